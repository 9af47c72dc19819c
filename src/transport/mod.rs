//! Boundary with the real-time transport collaborator.
//!
//! Requests flow out through [`Transport::send`]; the collaborator answers
//! asynchronously with [`TransportEvent`]s on a channel the UI loop drains.

mod channel;
mod loopback;

pub use channel::ChannelTransport;
pub use loopback::LoopbackTransport;

use derive_more::{Display, Error};
use tracing::instrument;

use crate::lobby::{Lobby, LobbyId};

/// Fire-and-forget requests the controller issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportRequest {
    /// Create a lobby with the given options.
    CreateLobby {
        /// Category chosen in the form.
        category: String,
        /// Difficulty chosen in the form.
        difficulty: String,
    },
    /// Join an existing lobby.
    JoinLobby(LobbyId),
    /// Fetch every known lobby.
    AllLobbies,
    /// Start the game for a lobby.
    StartGame(LobbyId),
}

/// Messages pushed by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Full replacement of the lobby list.
    LobbyListUpdated(Vec<Lobby>),
    /// A lobby was created.
    LobbyCreated(Lobby),
    /// The local user was added to a lobby.
    LobbyJoined(Lobby),
    /// A lobby's game has started.
    GameStarted(LobbyId),
}

/// Outbound half of the transport collaborator.
pub trait Transport: std::fmt::Debug {
    /// Hands a request to the collaborator without waiting for a reply.
    fn send(&mut self, request: TransportRequest) -> Result<(), TransportError>;
}

/// Transport error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Transport error: {} at {}:{}", message, file, line)]
pub struct TransportError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TransportError {
    /// Creates a new transport error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
