//! Command-line interface for trivia_lobby.

use clap::Parser;

/// Trivia Lobby - browse, create and join trivia lobbies from the terminal
#[derive(Parser, Debug)]
#[command(name = "trivia_lobby")]
#[command(about = "Terminal lobby for trivia games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "trivia_lobby.toml")]
    pub config: std::path::PathBuf,

    /// Display name for lobbies you create (overrides the config file)
    #[arg(long, env = "TRIVIA_PLAYER_NAME")]
    pub player_name: Option<String>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,
}
