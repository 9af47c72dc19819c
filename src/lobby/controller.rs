//! State machine behind the lobby UI.

use std::time::Duration;

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use crate::lobby::action::UiAction;
use crate::lobby::card::{LobbyCard, render_lobby_cards};
use crate::lobby::countdown::Countdown;
use crate::lobby::form::LobbyForm;
use crate::lobby::model::{Lobby, LobbyId};
use crate::lobby::view_state::{View, ViewState};
use crate::transport::{Transport, TransportError, TransportEvent, TransportRequest};

/// A request sent to the collaborator whose confirmation has not arrived yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    /// Waiting for `LobbyCreated`.
    Create,
    /// Waiting for `LobbyJoined` for this lobby.
    Join(LobbyId),
}

/// Owns [`ViewState`] and the rendered lobby list.
///
/// Every operation runs to completion and leaves exactly one view active.
/// Operations that are not valid in the current view are logged no-ops.
#[derive(Debug, Getters)]
pub struct ViewStateController {
    player_name: String,
    view_state: ViewState,
    lobbies: Vec<Lobby>,
    cards: Vec<LobbyCard>,
    form: LobbyForm,
    pending: Option<PendingRequest>,
    countdown: Option<Countdown>,
    notice: Option<String>,
    question_seconds: u64,
    quit_requested: bool,
    #[getter(skip)]
    transport: Box<dyn Transport>,
}

impl ViewStateController {
    /// Creates a controller in the Landing view for the local `player_name`.
    #[instrument(skip(transport, player_name, form))]
    pub fn new(
        transport: Box<dyn Transport>,
        player_name: impl Into<String>,
        form: LobbyForm,
        question_seconds: u64,
    ) -> Self {
        let player_name = player_name.into();
        info!(player_name = %player_name, "Creating ViewStateController");
        Self {
            player_name,
            view_state: ViewState::new(),
            lobbies: Vec::new(),
            cards: Vec::new(),
            form,
            pending: None,
            countdown: None,
            notice: None,
            question_seconds,
            quit_requested: false,
            transport,
        }
    }

    /// The active view.
    pub fn current_view(&self) -> View {
        *self.view_state.current_view()
    }

    /// The lobby the local user has created or joined.
    pub fn current_lobby_id(&self) -> Option<&LobbyId> {
        self.view_state.current_lobby_id().as_ref()
    }

    /// The known lobby the local user belongs to, if any.
    pub fn current_lobby(&self) -> Option<&Lobby> {
        let id = self.current_lobby_id()?;
        self.lobbies.iter().find(|lobby| lobby.id() == id)
    }

    /// Replaces the rendered lobby list with exactly `lobbies`.
    #[instrument(skip(self, lobbies), fields(count = lobbies.len()))]
    pub fn render_lobby_list(&mut self, lobbies: Vec<Lobby>) {
        debug!("Re-rendering lobby list");
        self.lobbies = lobbies;
        self.rerender();
    }

    /// Flips between Landing and Waiting. Does nothing while Playing.
    ///
    /// Returning to a lobby whose game started in the meantime lands in
    /// Playing instead of Waiting.
    #[instrument(skip(self), fields(view = %self.current_view()))]
    pub fn toggle_landing_lobby(&mut self) {
        let next = match self.current_view() {
            View::Landing if self.current_lobby().is_some_and(|lobby| *lobby.in_progress()) => {
                info!("Our game started while away, switching to Playing");
                self.enter_playing();
                return;
            }
            View::Landing => View::Waiting,
            View::Waiting => View::Landing,
            View::Playing => {
                debug!("Toggle ignored while playing");
                return;
            }
        };
        info!(next = %next, "Toggling view");
        self.view_state.set_view(next);
    }

    /// Requests a lobby with the form's category and difficulty.
    ///
    /// The view changes only when the creation is confirmed.
    #[instrument(skip(self), fields(view = %self.current_view()))]
    pub fn create_lobby(&mut self) -> Result<(), TransportError> {
        if self.current_view() != View::Landing {
            debug!("Create ignored outside Landing");
            return Ok(());
        }
        let request = TransportRequest::CreateLobby {
            category: self.form.category().to_string(),
            difficulty: self.form.difficulty().to_string(),
        };
        self.transport.send(request)?;
        info!("Lobby creation requested");
        self.pending = Some(PendingRequest::Create);
        self.notice = None;
        Ok(())
    }

    /// Confirms a lobby creation reported by the collaborator.
    ///
    /// Creations are broadcast to every client, so only a lobby created by
    /// the local player answers a pending create.
    #[instrument(skip(self, lobby), fields(lobby_id = %lobby.id(), creator = %lobby.creator()))]
    pub fn confirm_lobby_created(&mut self, lobby: Lobby) {
        let lobby_id = lobby.id().clone();
        let ours = *lobby.creator() == self.player_name;
        self.upsert(lobby);
        if !ours {
            debug!("Lobby created by another player");
            return;
        }
        if self.pending == Some(PendingRequest::Create) && self.current_view() == View::Landing {
            info!("Creation confirmed, entering lobby");
            self.pending = None;
            self.view_state.enter_lobby(lobby_id);
        }
    }

    /// Requests to join `lobby_id`.
    ///
    /// Unknown and in-progress lobbies are refused without touching the view
    /// state; a notice is left for the operator instead.
    #[instrument(skip(self), fields(view = %self.current_view()))]
    pub fn join_lobby(&mut self, lobby_id: LobbyId) -> Result<(), TransportError> {
        if self.current_view() != View::Landing {
            debug!("Join ignored outside Landing");
            return Ok(());
        }
        let joinable = match self.lobbies.iter().find(|lobby| *lobby.id() == lobby_id) {
            Some(lobby) => !*lobby.in_progress(),
            None => {
                warn!(lobby_id = %lobby_id, "Join ignored for unknown lobby");
                self.notice = Some(format!("Lobby {} no longer exists", lobby_id));
                return Ok(());
            }
        };
        if !joinable {
            warn!(lobby_id = %lobby_id, "Join ignored for lobby in progress");
            self.notice = Some(format!("Lobby {} is already in progress", lobby_id));
            return Ok(());
        }
        self.transport
            .send(TransportRequest::JoinLobby(lobby_id.clone()))?;
        info!(lobby_id = %lobby_id, "Join requested");
        self.pending = Some(PendingRequest::Join(lobby_id));
        self.notice = None;
        Ok(())
    }

    /// Confirms that the local user was added to `lobby`.
    #[instrument(skip(self, lobby), fields(lobby_id = %lobby.id()))]
    pub fn confirm_lobby_joined(&mut self, lobby: Lobby) {
        let lobby_id = lobby.id().clone();
        let open = !*lobby.in_progress();
        self.upsert(lobby);
        let awaited = self.pending == Some(PendingRequest::Join(lobby_id.clone()));
        if awaited && open && self.current_view() == View::Landing {
            info!("Join confirmed, entering lobby");
            self.pending = None;
            self.view_state.enter_lobby(lobby_id);
        }
    }

    /// Asks the collaborator to start the current lobby's game.
    #[instrument(skip(self), fields(view = %self.current_view()))]
    pub fn request_start_game(&mut self) -> Result<(), TransportError> {
        if self.current_view() != View::Waiting {
            debug!("Start ignored outside Waiting");
            return Ok(());
        }
        let Some(lobby_id) = self.current_lobby_id().cloned() else {
            debug!("Start ignored without a lobby");
            return Ok(());
        };
        self.transport
            .send(TransportRequest::StartGame(lobby_id.clone()))?;
        info!(lobby_id = %lobby_id, "Game start requested");
        Ok(())
    }

    /// Applies a "game starting" notification for `lobby_id`.
    ///
    /// Unknown or already-started lobbies are ignored. Otherwise the lobby's
    /// card loses its join affordance, and the local user moves to Playing if
    /// they were waiting in that lobby.
    #[instrument(skip(self), fields(view = %self.current_view()))]
    pub fn start_game(&mut self, lobby_id: LobbyId) {
        let Some(lobby) = self.lobbies.iter_mut().find(|lobby| *lobby.id() == lobby_id) else {
            debug!(lobby_id = %lobby_id, "Start notification for unknown lobby");
            return;
        };
        if !lobby.mark_in_progress() {
            debug!(lobby_id = %lobby_id, "Duplicate start notification");
            return;
        }
        self.rerender();

        let ours = self.current_lobby_id() == Some(&lobby_id);
        if ours && self.current_view() == View::Waiting {
            info!(lobby_id = %lobby_id, "Our game started, switching to Playing");
            self.enter_playing();
        }
    }

    /// Returns to Landing and forgets the current lobby.
    #[instrument(skip(self), fields(view = %self.current_view()))]
    pub fn leave_game(&mut self) {
        info!("Leaving game");
        self.view_state.reset();
        self.pending = None;
        self.notice = None;
        self.countdown = None;
    }

    /// Asks the collaborator for the full lobby list.
    #[instrument(skip(self))]
    pub fn refresh_lobbies(&mut self) -> Result<(), TransportError> {
        self.transport.send(TransportRequest::AllLobbies)
    }

    /// Advances the Playing countdown.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.advance(elapsed);
        }
    }

    /// Interprets a user action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: UiAction) -> Result<(), TransportError> {
        match action {
            UiAction::NewLobby => self.create_lobby()?,
            UiAction::JoinLobby(lobby_id) => self.join_lobby(lobby_id)?,
            UiAction::ToggleLandingLobby => self.toggle_landing_lobby(),
            UiAction::StartGame => self.request_start_game()?,
            UiAction::LeaveGame => self.leave_game(),
            UiAction::RefreshLobbies => self.refresh_lobbies()?,
            UiAction::NextCategory => self.form.next_category(),
            UiAction::NextDifficulty => self.form.next_difficulty(),
            UiAction::Quit => {
                info!("Quit requested");
                self.quit_requested = true;
            }
        }
        Ok(())
    }

    /// Routes an inbound collaborator event.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::LobbyListUpdated(lobbies) => self.on_lobby_list_updated(lobbies),
            TransportEvent::LobbyCreated(lobby) => self.on_lobby_created(lobby),
            TransportEvent::LobbyJoined(lobby) => self.on_lobby_joined(lobby),
            TransportEvent::GameStarted(lobby_id) => self.on_game_started(lobby_id),
        }
    }

    /// Inbound: the lobby list changed.
    pub fn on_lobby_list_updated(&mut self, lobbies: Vec<Lobby>) {
        self.render_lobby_list(lobbies);
    }

    /// Inbound: a lobby was created.
    pub fn on_lobby_created(&mut self, lobby: Lobby) {
        self.confirm_lobby_created(lobby);
    }

    /// Inbound: the local user joined a lobby.
    pub fn on_lobby_joined(&mut self, lobby: Lobby) {
        self.confirm_lobby_joined(lobby);
    }

    /// Inbound: a lobby's game started.
    pub fn on_game_started(&mut self, lobby_id: LobbyId) {
        self.start_game(lobby_id);
    }

    fn enter_playing(&mut self) {
        self.view_state.set_view(View::Playing);
        self.countdown = Some(Countdown::new(self.question_seconds));
    }

    fn upsert(&mut self, lobby: Lobby) {
        match self.lobbies.iter_mut().find(|known| known.id() == lobby.id()) {
            Some(known) => *known = lobby,
            None => self.lobbies.push(lobby),
        }
        self.rerender();
    }

    fn rerender(&mut self) {
        self.cards = render_lobby_cards(&self.lobbies);
    }
}
