//! Win detection logic for tic-tac-toe.

use super::super::line::{LINES, Line};
use super::super::types::{Board, Cell, Player};
use tracing::instrument;

/// Finds the first complete line on the board.
///
/// Returns the owning player and the line, scanning [`LINES`] in order.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<(Player, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Cell::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((player, *line))
            }
            _ => None,
        }
    })
}
