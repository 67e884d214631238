//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Tui {
        /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply moves without a UI and print the resulting board
    Replay {
        /// Board indices 0-8, comma or space separated; illegal ones are ignored
        #[arg(value_delimiter = ',', num_args = 0..)]
        moves: Vec<usize>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Tui { config: None }
    }
}
