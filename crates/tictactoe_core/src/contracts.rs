//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. The
//! precondition decides whether a move is legal; the postcondition checks
//! that applying it changed exactly what it should have.

use super::action::MoveRejection;
use super::game::GameState;
use super::invariants::{GameStateInvariants, InvariantSet, InvariantViolation};
use super::types::Cell;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Reason the precondition can fail.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Contract for placing a mark by board index.
///
/// Preconditions:
/// - Game is still in progress
/// - Index is on the board
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one cell changed, from empty to the mover's mark
/// - The turn passed to the opponent
/// - [`GameStateInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Rejection = MoveRejection;

    fn pre(state: &GameState, index: &usize) -> Result<(), MoveRejection> {
        state.check_move(*index).map(|_| ())
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mover = before.turn();
        let mut violations = Vec::new();

        let changed: Vec<(Cell, Cell)> = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .filter(|(old, new)| old != new)
            .map(|(old, new)| (*old, *new))
            .collect();

        match changed.as_slice() {
            [(Cell::Empty, Cell::Occupied(player))] if *player == mover => {}
            _ => violations.push(InvariantViolation::new(format!(
                "Exactly one empty cell becomes {mover} (saw {} changes)",
                changed.len()
            ))),
        }

        if after.turn() != mover.opponent() {
            violations.push(InvariantViolation::new("Turn passes to the opponent"));
        }

        if let Err(mut broken) = GameStateInvariants::check_all(after) {
            violations.append(&mut broken);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
