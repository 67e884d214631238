//! tictactoe - terminal front end and headless replay.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use std::sync::Arc;
use tictactoe::{Snapshot, TuiConfig, status_text, tui};
use tictactoe_core::GameState;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Tui { config } => run_tui(config.as_deref()),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Run the terminal UI, logging to a file so output does not tear the screen
fn run_tui(config_path: Option<&Path>) -> Result<()> {
    let config = TuiConfig::load(config_path)?;

    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(log_file = %config.log_file().display(), "Starting tictactoe");
    tui::run_tui(&config)
}

/// Apply moves headlessly and print the result
fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let game = GameState::from_moves(moves);
    debug!(moves = moves.len(), outcome = %game.outcome(), "Replay finished");

    if json {
        let snapshot = Snapshot::from_state(&game);
        let rendered =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
        println!("{rendered}");
    } else {
        println!("{}", game.board());
        println!();
        println!("{}", status_text(&game));
    }

    Ok(())
}
