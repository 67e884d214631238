//! Why a move was not accepted.
//!
//! Rejections are not errors from the caller's point of view:
//! [`GameState::apply_move`](crate::GameState::apply_move) ignores illegal
//! moves. The reason is still useful for logging and for deciding which
//! cells a front end should offer.

use super::position::Position;

/// Reason a move index cannot be played right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveRejection {
    /// Index does not name a cell (must be 0-8).
    #[display("Index {} is off the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejection {}
