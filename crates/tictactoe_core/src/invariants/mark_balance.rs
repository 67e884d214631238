//! Mark balance invariant: X leads O by at most one mark.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X has as many marks as O, or exactly one more.
///
/// X moves first and turns alternate, so O can never be ahead.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::state;

    #[test]
    fn test_fresh_game_holds() {
        assert!(MarkBalanceInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_through_a_full_game() {
        let mut game = GameState::new();
        for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            game.apply_move(index);
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        assert!(!MarkBalanceInvariant::holds(&state("O........", Player::X)));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        assert!(!MarkBalanceInvariant::holds(&state("XX.......", Player::O)));
    }
}
