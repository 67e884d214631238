//! Kani arbitrary implementations for tic-tac-toe types.

use super::{Board, Cell, GameState, Player};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        Board::from_cells(kani::any())
    }
}

impl kani::Arbitrary for GameState {
    fn any() -> Self {
        GameState::from_parts(kani::any(), kani::any())
    }
}
