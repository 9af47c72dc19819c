//! Lobby view state, lobby cards and their screens.

mod action;
mod card;
mod controller;
mod countdown;
mod form;
mod model;
mod screen;
mod screens;
mod view_state;

pub use action::UiAction;
pub use card::{IN_PROGRESS_LABEL, JOIN_LABEL, JoinAffordance, LobbyCard, render_lobby_cards};
pub use controller::{PendingRequest, ViewStateController};
pub use countdown::{Countdown, DEFAULT_QUESTION_SECONDS};
pub use form::LobbyForm;
pub use model::{Lobby, LobbyId};
pub use screen::Screen;
pub use screens::{LandingScreen, PlayingScreen, WaitingScreen};
pub use view_state::{PanelVisibility, View, ViewState};
