//! Trivia Lobby - terminal client
//!
//! Renders lobby cards and switches between the landing, waiting and
//! playing views.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use trivia_lobby::{LobbyConfig, init_tracing, run_tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = LobbyConfig::load_or_default(&cli.config)?;
    if let Some(name) = cli.player_name {
        config = config.with_player_name(name);
    }
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_tracing(&config)?;
    run_tui(config).await
}
