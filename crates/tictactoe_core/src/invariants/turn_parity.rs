//! Turn parity invariant: the turn agrees with the marks on the board.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X is to move exactly when both players have the same number
/// of marks.
///
/// Together with [`MarkBalanceInvariant`](super::MarkBalanceInvariant) this
/// means the n-th accepted move is X's when n is odd and O's when n is even.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(game: &GameState) -> bool {
        let even = game.board().count(Player::X) == game.board().count(Player::O);
        (game.turn() == Player::X) == even
    }

    fn description() -> &'static str {
        "X is to move exactly when both players have placed the same number of marks"
    }
}
