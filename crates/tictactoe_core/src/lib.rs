//! Pure tic-tac-toe game state.
//!
//! This crate owns the rules of the game and nothing else: a 3x3 board,
//! strict X/O turn alternation, and win/draw detection. Rendering, input
//! and configuration live in the `tictactoe` crate, which drives a
//! [`GameState`] through two operations:
//!
//! - [`GameState::apply_move`] places the current player's mark.
//! - [`GameState::reset`] starts a fresh game.
//!
//! Everything else is read-only: the [`Board`], whose [`Player`] moves
//! next, and the derived [`Outcome`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Outcome, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.apply_move(index);
//! }
//!
//! match game.outcome() {
//!     Outcome::Win { player, line } => {
//!         assert_eq!(player, Player::X);
//!         assert_eq!(line.indices(), [0, 1, 2]);
//!     }
//!     other => panic!("expected a win, got {other:?}"),
//! }
//!
//! // Moves on a finished board are ignored.
//! let before = game.clone();
//! game.apply_move(5);
//! assert_eq!(game, before);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod line;
mod position;
mod types;

#[cfg(kani)]
mod kani_support;

pub mod rules;

pub use action::MoveRejection;
pub use contracts::{Contract, MoveContract};
pub use game::GameState;
pub use invariants::{
    GameStateInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SingleWinnerInvariant, TurnParityInvariant,
};
pub use line::{LINES, Line};
pub use position::Position;
pub use rules::{Outcome, compute_outcome};
pub use types::{BOARD_SIZE, Board, Cell, Player};
