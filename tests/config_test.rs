//! Tests for loading the lobby client config.

use std::fs;
use tempfile::TempDir;

use trivia_lobby::{DEFAULT_QUESTION_SECONDS, LobbyConfig};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = LobbyConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config.player_name(), "Player");
    assert_eq!(*config.question_seconds(), DEFAULT_QUESTION_SECONDS);
    assert_eq!(config.lobbies().len(), 1);
    assert_eq!(config.lobbies()[0].creator(), "Dalai");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("lobby.toml");
    fs::write(
        &path,
        r#"player_name = "Ada"
difficulties = ["hard"]

[[lobbies]]
id = "9"
creator = "Grace"
category = "History"
difficulty = "hard"
inProgress = true
"#,
    )
    .expect("Failed to write TOML");

    let config = LobbyConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.player_name(), "Ada");
    assert_eq!(config.difficulties(), &["hard".to_string()]);
    assert_eq!(config.categories().len(), 4);
    assert_eq!(*config.tick_rate_ms(), 100);
    assert!(*config.lobbies()[0].in_progress());

    let form = config.lobby_form();
    assert_eq!(form.difficulty(), "hard");
}

#[test]
fn test_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");
    assert!(LobbyConfig::from_file(&path).is_err());
}

#[test]
fn test_empty_creator_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("lobby.toml");
    fs::write(
        &path,
        r#"[[lobbies]]
id = "1"
creator = " "
category = "Nature"
difficulty = "Easy"
"#,
    )
    .expect("Write failed");
    let err = LobbyConfig::from_file(&path).expect_err("empty creator");
    assert!(err.message.contains("empty creator"));
}

#[test]
fn test_overrides_replace_values() {
    let config = LobbyConfig::default()
        .with_player_name("Ada".to_string())
        .with_log_file("other.log".into());
    assert_eq!(config.player_name(), "Ada");
    assert_eq!(config.log_file().to_str(), Some("other.log"));
}
