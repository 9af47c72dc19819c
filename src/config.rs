//! Lobby client configuration.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::lobby::{DEFAULT_QUESTION_SECONDS, Lobby, LobbyForm};

/// Configuration for the lobby client.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct LobbyConfig {
    /// Display name used as creator of lobbies made from this client.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Categories offered by the new-lobby form.
    #[serde(default = "default_categories")]
    categories: Vec<String>,

    /// Difficulties offered by the new-lobby form.
    #[serde(default = "default_difficulties")]
    difficulties: Vec<String>,

    /// Seconds on the per-question countdown.
    #[serde(default = "default_question_seconds")]
    question_seconds: u64,

    /// UI poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// File the tracing output is written to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Lobbies the loopback transport starts with.
    #[serde(default = "default_lobbies")]
    lobbies: Vec<Lobby>,
}

#[instrument]
fn default_player_name() -> String {
    "Player".to_string()
}

#[instrument]
fn default_categories() -> Vec<String> {
    ["General Knowledge", "Nature", "History", "Sports"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[instrument]
fn default_difficulties() -> Vec<String> {
    ["easy", "medium", "hard"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[instrument]
fn default_question_seconds() -> u64 {
    DEFAULT_QUESTION_SECONDS
}

#[instrument]
fn default_tick_rate_ms() -> u64 {
    100
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("trivia_lobby.log")
}

#[instrument]
fn default_lobbies() -> Vec<Lobby> {
    vec![Lobby::new("1", "Dalai", "Nature", "Easy")]
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            categories: default_categories(),
            difficulties: default_difficulties(),
            question_seconds: default_question_seconds(),
            tick_rate_ms: default_tick_rate_ms(),
            log_file: default_log_file(),
            lobbies: default_lobbies(),
        }
    }
}

impl LobbyConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(player_name = %config.player_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the player name.
    pub fn with_player_name(mut self, player_name: String) -> Self {
        self.player_name = player_name;
        self
    }

    /// Overrides the log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Builds the new-lobby form from the configured choices.
    pub fn lobby_form(&self) -> LobbyForm {
        LobbyForm::new(self.categories.clone(), self.difficulties.clone())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_name.trim().is_empty() {
            return Err(ConfigError::new("player_name must not be empty".to_string()));
        }
        if let Some(lobby) = self.lobbies.iter().find(|l| l.creator().trim().is_empty()) {
            return Err(ConfigError::new(format!(
                "lobby {} has an empty creator",
                lobby.id()
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
