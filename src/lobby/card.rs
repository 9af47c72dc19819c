//! Pure projection from lobbies to lobby cards.

use derive_getters::Getters;
use tracing::{debug, instrument};

use crate::lobby::action::UiAction;
use crate::lobby::model::{Lobby, LobbyId};

/// Label of an enabled join affordance.
pub const JOIN_LABEL: &str = "Join";
/// Label of a disabled join affordance.
pub const IN_PROGRESS_LABEL: &str = "In Progress";

/// The join button on a lobby card.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct JoinAffordance {
    #[getter(skip)]
    label: &'static str,
    enabled: bool,
    action: Option<UiAction>,
}

impl JoinAffordance {
    /// Button text: [`JOIN_LABEL`] or [`IN_PROGRESS_LABEL`].
    pub fn label(&self) -> &'static str {
        self.label
    }

    fn for_lobby(lobby: &Lobby) -> Self {
        if *lobby.in_progress() {
            Self {
                label: IN_PROGRESS_LABEL,
                enabled: false,
                action: None,
            }
        } else {
            Self {
                label: JOIN_LABEL,
                enabled: true,
                action: Some(UiAction::JoinLobby(lobby.id().clone())),
            }
        }
    }
}

/// One rendered lobby entry.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LobbyCard {
    lobby_id: LobbyId,
    creator_line: String,
    category_line: String,
    difficulty_line: String,
    affordance: JoinAffordance,
}

impl LobbyCard {
    /// Builds the card for a single lobby.
    pub fn from_lobby(lobby: &Lobby) -> Self {
        Self {
            lobby_id: lobby.id().clone(),
            creator_line: format!("Creator: {}", lobby.creator()),
            category_line: format!("Category: {}", lobby.category()),
            difficulty_line: format!("Difficulty: {}", lobby.difficulty()),
            affordance: JoinAffordance::for_lobby(lobby),
        }
    }
}

/// Produces one card per lobby, in the order given.
#[instrument(skip(lobbies), fields(count = lobbies.len()))]
pub fn render_lobby_cards(lobbies: &[Lobby]) -> Vec<LobbyCard> {
    debug!("Projecting lobby cards");
    lobbies.iter().map(LobbyCard::from_lobby).collect()
}
