//! Single winner invariant: both players never own a line at once.

use super::super::line::LINES;
use super::super::{Cell, GameState, Player};
use super::Invariant;

/// Invariant: at most one player owns a complete line.
///
/// Play stops at the first complete line, so the loser can never finish
/// one afterwards. The winner may own two lines if the last move completed
/// both.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    fn owns_line(game: &GameState, player: Player) -> bool {
        LINES.iter().any(|line| {
            line.positions()
                .iter()
                .all(|pos| game.board().get(*pos) == Cell::Occupied(player))
        })
    }
}

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        !(Self::owns_line(game, Player::X) && Self::owns_line(game, Player::O))
    }

    fn description() -> &'static str {
        "At most one player owns a complete line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::state;

    #[test]
    fn test_double_line_by_one_player_holds() {
        // X's last move at 0 completes the top row and the left column.
        let game = GameState::from_moves(&[1, 4, 2, 5, 3, 8, 6, 7, 0]);
        assert_eq!(game.outcome().winner(), Some(Player::X));
        assert!(SingleWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_both_players_with_lines_violates() {
        assert!(!SingleWinnerInvariant::holds(&state("XXX...OOO", Player::X)));
    }
}
