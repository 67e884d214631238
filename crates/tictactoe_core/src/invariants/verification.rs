//! Kani proof harnesses for the game-state invariants.
//!
//! Each harness starts from an arbitrary reachable-by-construction state and
//! checks that one legal move keeps every invariant intact.

use crate::{Contract, GameState, GameStateInvariants, InvariantSet, MoveContract};

#[kani::proof]
#[kani::unwind(10)]
fn verify_move_preserves_invariants() {
    let game: GameState = kani::any();
    kani::assume(GameStateInvariants::check_all(&game).is_ok());

    let index: usize = kani::any();
    kani::assume(MoveContract::pre(&game, &index).is_ok());

    let mut after = game.clone();
    after.apply_move(index);

    assert!(MoveContract::post(&game, &after).is_ok());
}

#[kani::proof]
#[kani::unwind(10)]
fn verify_illegal_move_is_no_op() {
    let game: GameState = kani::any();
    let index: usize = kani::any();
    kani::assume(MoveContract::pre(&game, &index).is_err());

    let mut after = game.clone();
    after.apply_move(index);

    assert!(after == game);
}
