//! Lobby descriptors received from the transport collaborator.

use derive_getters::Getters;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Opaque lobby identifier, unique among currently-known lobbies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LobbyId(String);

impl LobbyId {
    /// Creates a lobby id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LobbyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A pending or in-progress trivia session descriptor.
///
/// The `id` is stable for the lifetime of the lobby and `in_progress` only ever
/// moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lobby {
    id: LobbyId,
    creator: String,
    category: String,
    difficulty: String,
    #[serde(default)]
    in_progress: bool,
}

impl Lobby {
    /// Creates a lobby that has not started yet.
    pub fn new(
        id: impl Into<LobbyId>,
        creator: impl Into<String>,
        category: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            creator: creator.into(),
            category: category.into(),
            difficulty: difficulty.into(),
            in_progress: false,
        }
    }

    /// Builder-style variant of [`Lobby::mark_in_progress`].
    pub fn started(mut self) -> Self {
        self.in_progress = true;
        self
    }

    /// Marks the lobby's game as started.
    ///
    /// Returns `false` if it was already in progress.
    #[instrument(skip(self), fields(lobby_id = %self.id))]
    pub fn mark_in_progress(&mut self) -> bool {
        if self.in_progress {
            debug!("Lobby already in progress");
            return false;
        }
        self.in_progress = true;
        true
    }
}
