//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so they can be applied to any arrangement of cells, including
//! ones legal play never reaches.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::find_winner;

use super::line::Line;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// A player holds every cell of a line.
    Win {
        /// The player holding the line.
        player: Player,
        /// The first complete line in canonical order.
        line: Line,
    },
    /// Board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Computes the outcome of a board.
///
/// A complete line wins even on a full board; a full board with no complete
/// line is a draw; anything else is still in progress.
#[instrument(skip(board))]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some((player, line)) = find_winner(board) {
        Outcome::Win { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LINES;
    use crate::test_support::board;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(compute_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // X O X / O X O / O X X -- full board, main diagonal complete
        let outcome = compute_outcome(&board("XOXOXOOXX"));
        assert_eq!(
            outcome,
            Outcome::Win {
                player: Player::X,
                line: LINES[6],
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(compute_outcome(&board("XOXXOOOXX")), Outcome::Draw);
    }

    #[test]
    fn test_first_line_in_scan_order_wins_tie() {
        // Unreachable board: X holds the top row, O the bottom row.
        let outcome = compute_outcome(&board("XXX...OOO"));
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(!Outcome::InProgress.is_over());
        assert!(Outcome::Draw.is_over());
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Draw.winning_line(), None);
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }
}
