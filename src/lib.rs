//! Trivia Lobby library - view-state controller for a trivia game lobby
//!
//! # Architecture
//!
//! - **Lobby**: lobby descriptors, the card projection, and the
//!   [`ViewStateController`] that owns which view is visible
//! - **Transport**: the boundary with the real-time collaborator, with a
//!   channel-backed and an in-process loopback implementation
//! - **TUI**: one ratatui screen per view
//!
//! # Example
//!
//! ```
//! use trivia_lobby::{
//!     ChannelTransport, Lobby, LobbyForm, TransportEvent, View, ViewStateController,
//! };
//!
//! let (transport, _requests) = ChannelTransport::new();
//! let mut controller = ViewStateController::new(Box::new(transport), "Ada", LobbyForm::default(), 30);
//!
//! controller.create_lobby().expect("request sent");
//! controller.handle_event(TransportEvent::LobbyCreated(Lobby::new("42", "Ada", "Nature", "easy")));
//! assert_eq!(controller.current_view(), View::Waiting);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod lobby;
mod transport;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, LobbyConfig};

// Crate-level exports - Lobby view state
pub use lobby::{
    Countdown, DEFAULT_QUESTION_SECONDS, IN_PROGRESS_LABEL, JOIN_LABEL, JoinAffordance,
    LandingScreen, Lobby, LobbyCard, LobbyForm, LobbyId, PanelVisibility, PendingRequest,
    PlayingScreen, Screen, UiAction, View, ViewState, ViewStateController, WaitingScreen,
    render_lobby_cards,
};

// Crate-level exports - Transport boundary
pub use transport::{
    ChannelTransport, LoopbackTransport, Transport, TransportError, TransportEvent,
    TransportRequest,
};

// Crate-level exports - Terminal UI
pub use tui::{init_tracing, run_tui};
