//! The three mutually exclusive views and the state that selects between them.

use derive_getters::Getters;
use strum::{Display, EnumIter};
use tracing::instrument;

use crate::lobby::model::LobbyId;

/// One of the three mutually exclusive UI panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum View {
    /// Lobby browser and lobby creation form.
    #[default]
    Landing,
    /// Joined a lobby, waiting for its game to start.
    Waiting,
    /// The joined lobby's game is running.
    Playing,
}

/// Which view is active and which lobby the local user belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ViewState {
    current_view: View,
    current_lobby_id: Option<LobbyId>,
}

impl ViewState {
    /// Creates the startup state: Landing, no lobby.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects the state onto panel visibility.
    pub fn panels(&self) -> PanelVisibility {
        PanelVisibility::for_view(self.current_view)
    }

    pub(crate) fn enter_lobby(&mut self, lobby_id: LobbyId) {
        self.current_lobby_id = Some(lobby_id);
        self.current_view = View::Waiting;
    }

    pub(crate) fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    pub(crate) fn reset(&mut self) {
        self.current_view = View::Landing;
        self.current_lobby_id = None;
    }
}

/// Visibility flags for the three panels. Exactly one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct PanelVisibility {
    landing: bool,
    waiting: bool,
    playing: bool,
}

impl PanelVisibility {
    /// Visibility with only `view`'s panel shown.
    pub fn for_view(view: View) -> Self {
        Self {
            landing: view == View::Landing,
            waiting: view == View::Waiting,
            playing: view == View::Playing,
        }
    }

    /// Number of visible panels.
    pub fn visible_count(&self) -> usize {
        [self.landing, self.waiting, self.playing]
            .iter()
            .filter(|shown| **shown)
            .count()
    }
}
