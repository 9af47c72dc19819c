//! In-process stand-in for the trivia server.
//!
//! Keeps its own lobby table and answers each request with the events the
//! server would publish, in the same order.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::{Transport, TransportError, TransportEvent, TransportRequest};
use crate::lobby::{Lobby, LobbyId};

/// Loopback transport answering requests from a local lobby table.
#[derive(Debug)]
pub struct LoopbackTransport {
    player_name: String,
    lobbies: Vec<Lobby>,
    next_id: u64,
    events: mpsc::UnboundedSender<TransportEvent>,
}

impl LoopbackTransport {
    /// Creates the loopback seeded with `lobbies`.
    ///
    /// Lobbies created later are attributed to `player_name` and receive
    /// numeric ids above every numeric seed id.
    #[instrument(skip(lobbies), fields(seeded = lobbies.len()))]
    pub fn new(
        player_name: String,
        lobbies: Vec<Lobby>,
    ) -> (Self, mpsc::UnboundedReceiver<TransportEvent>) {
        let next_id = lobbies
            .iter()
            .filter_map(|lobby| lobby.id().as_str().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        let (events, receiver) = mpsc::unbounded_channel();
        info!(next_id, "Loopback transport ready");
        (
            Self {
                player_name,
                lobbies,
                next_id,
                events,
            },
            receiver,
        )
    }

    /// Lobbies currently held by the loopback.
    pub fn lobbies(&self) -> &[Lobby] {
        &self.lobbies
    }

    fn emit(&self, event: TransportEvent) -> Result<(), TransportError> {
        self.events
            .send(event)
            .map_err(|_| TransportError::new("event receiver dropped"))
    }

    fn publish_list(&self) -> Result<(), TransportError> {
        self.emit(TransportEvent::LobbyListUpdated(self.lobbies.clone()))
    }

    fn find_open(&mut self, lobby_id: &LobbyId) -> Option<&mut Lobby> {
        self.lobbies
            .iter_mut()
            .find(|lobby| lobby.id() == lobby_id && !*lobby.in_progress())
    }

    #[instrument(skip(self))]
    fn create(&mut self, category: String, difficulty: String) -> Result<(), TransportError> {
        let lobby = Lobby::new(
            self.next_id.to_string(),
            self.player_name.clone(),
            category,
            difficulty,
        );
        self.next_id += 1;
        info!(lobby_id = %lobby.id(), "Lobby created");
        self.lobbies.push(lobby.clone());
        self.emit(TransportEvent::LobbyCreated(lobby))?;
        self.publish_list()
    }

    #[instrument(skip(self), fields(lobby_id = %lobby_id))]
    fn join(&mut self, lobby_id: LobbyId) -> Result<(), TransportError> {
        match self.find_open(&lobby_id) {
            Some(lobby) => {
                let lobby = lobby.clone();
                info!("Player added to lobby");
                self.emit(TransportEvent::LobbyJoined(lobby))
            }
            None => {
                warn!("Join refused: lobby unknown or already started");
                Ok(())
            }
        }
    }

    #[instrument(skip(self), fields(lobby_id = %lobby_id))]
    fn start(&mut self, lobby_id: LobbyId) -> Result<(), TransportError> {
        match self.find_open(&lobby_id) {
            Some(lobby) => {
                lobby.mark_in_progress();
                info!("Game started");
                self.emit(TransportEvent::GameStarted(lobby_id))?;
                self.publish_list()
            }
            None => {
                warn!("Start ignored: lobby unknown or already started");
                Ok(())
            }
        }
    }
}

impl Transport for LoopbackTransport {
    #[instrument(skip(self))]
    fn send(&mut self, request: TransportRequest) -> Result<(), TransportError> {
        debug!("Loopback handling request");
        match request {
            TransportRequest::CreateLobby {
                category,
                difficulty,
            } => self.create(category, difficulty),
            TransportRequest::JoinLobby(lobby_id) => self.join(lobby_id),
            TransportRequest::AllLobbies => self.publish_list(),
            TransportRequest::StartGame(lobby_id) => self.start(lobby_id),
        }
    }
}
