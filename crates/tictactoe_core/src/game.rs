//! The game state a front end owns and drives.

use super::action::MoveRejection;
use super::position::Position;
use super::rules::{Outcome, compute_outcome};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};

/// Complete state of one game: the board and whose turn it is.
///
/// The outcome is never stored. It is derived from the board each time
/// [`GameState::outcome`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
        }
    }

    /// Builds a game by applying each index in order.
    ///
    /// Illegal indices are skipped exactly as [`GameState::apply_move`]
    /// skips them.
    #[instrument]
    pub fn from_moves(moves: &[usize]) -> Self {
        let mut game = Self::new();
        for index in moves {
            game.apply_move(*index);
        }
        game
    }

    /// Assembles a state without checking that play could reach it.
    #[cfg(any(test, kani))]
    pub(crate) fn from_parts(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moves next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        compute_outcome(&self.board)
    }

    /// Checks whether the current player may play at `index`.
    pub fn check_move(&self, index: usize) -> Result<Position, MoveRejection> {
        if self.outcome().is_over() {
            return Err(MoveRejection::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveRejection::OutOfRange(index))?;

        if !self.board.is_empty(pos) {
            return Err(MoveRejection::Occupied(pos));
        }

        Ok(pos)
    }

    /// Returns true if a move at `index` would be accepted.
    pub fn is_playable(&self, index: usize) -> bool {
        self.check_move(index).is_ok()
    }

    /// Places the current player's mark at `index` and passes the turn.
    ///
    /// Out-of-range indices, occupied cells and moves after the game is
    /// over are ignored: the state is left untouched and nothing is
    /// reported to the caller beyond a debug log line.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn apply_move(&mut self, index: usize) {
        let pos = match self.check_move(index) {
            Ok(pos) => pos,
            Err(reason) => {
                debug!(%reason, "Ignoring move");
                return;
            }
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place(pos, self.turn);
        self.turn = self.turn.opponent();

        // A deserialized state may already break the invariants.
        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, self) {
            tracing::warn!(?violations, "Move postcondition failed");
        }

        debug!(position = %pos, next = %self.turn, "Move applied");
    }

    /// Discards the current game and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_apply_move_places_and_flips() {
        let mut game = GameState::new();
        game.apply_move(4);
        assert_eq!(game.board().cell(4), Some(Cell::Occupied(Player::X)));
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_check_move_reasons() {
        let mut game = GameState::new();
        assert_eq!(game.check_move(9), Err(MoveRejection::OutOfRange(9)));

        game.apply_move(0);
        assert_eq!(
            game.check_move(0),
            Err(MoveRejection::Occupied(Position::TopLeft))
        );
        assert_eq!(game.check_move(1), Ok(Position::TopCenter));

        for index in [3, 1, 4, 2] {
            game.apply_move(index);
        }
        assert!(game.outcome().is_over());
        assert_eq!(game.check_move(8), Err(MoveRejection::GameOver));
        assert!(!game.is_playable(8));
    }

    #[test]
    fn test_from_moves_skips_illegal_entries() {
        let game = GameState::from_moves(&[0, 0, 42, 4]);
        assert_eq!(game.board().count(Player::X), 1);
        assert_eq!(game.board().count(Player::O), 1);
        assert_eq!(game.board().cell(4), Some(Cell::Occupied(Player::O)));
        assert_eq!(game.turn(), Player::X);
    }

    #[test]
    fn test_move_on_unbalanced_state_still_applies() {
        let mut game = crate::test_support::state("OO.......", Player::X);
        game.apply_move(4);
        assert_eq!(game.board().get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_reset_from_mid_game() {
        let mut game = GameState::from_moves(&[0, 4, 8]);
        game.reset();
        assert_eq!(game, GameState::new());
    }
}
