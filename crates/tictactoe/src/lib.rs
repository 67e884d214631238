//! Terminal tic-tac-toe.
//!
//! The rules live in [`tictactoe_core`]; this crate is everything a player
//! sees and touches.
//!
//! # Architecture
//!
//! - **View**: presentation model derived from a [`GameState`](tictactoe_core::GameState)
//!   (status line, cell labels, winning highlight, disabled cells)
//! - **Config**: optional TOML file for colors, hints and the log file
//! - **TUI**: ratatui front end driving the game from the keyboard

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod view;

pub mod tui;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Palette, TuiConfig};
pub use view::{BoardView, CellView, Snapshot, StatusKind, cell_label, status_text};
