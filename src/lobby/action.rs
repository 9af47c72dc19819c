//! Logical actions that rendered affordances declare.
//!
//! Screens translate key presses into a [`UiAction`]; the
//! [`ViewStateController`](crate::ViewStateController) interprets it.

use crate::lobby::model::LobbyId;

/// A user-triggered action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Request a new lobby using the form's current selection.
    NewLobby,
    /// Join the given lobby.
    JoinLobby(LobbyId),
    /// Flip between the Landing and Waiting panels.
    ToggleLandingLobby,
    /// Ask the server to start the current lobby's game.
    StartGame,
    /// Leave the current lobby or game and go back to Landing.
    LeaveGame,
    /// Ask the server for the full lobby list.
    RefreshLobbies,
    /// Select the next category in the creation form.
    NextCategory,
    /// Select the next difficulty in the creation form.
    NextDifficulty,
    /// Exit the application.
    Quit,
}
