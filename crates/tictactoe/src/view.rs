//! Presentation model derived from a [`GameState`].
//!
//! Everything a front end needs to draw one frame: marks, labels, which
//! cells can still be clicked, which cells form the winning line, and the
//! status line. Nothing here mutates the game.

use serde::Serialize;
use tictactoe_core::{Cell, GameState, Outcome, Player, Position};
use tracing::instrument;

/// What the status line is announcing, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatusKind {
    /// The game is running; the status names the player to move.
    Turn,
    /// Somebody won.
    Win,
    /// Board full, nobody won.
    Draw,
}

impl StatusKind {
    /// Classifies an outcome.
    pub fn of(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::InProgress => StatusKind::Turn,
            Outcome::Win { .. } => StatusKind::Win,
            Outcome::Draw => StatusKind::Draw,
        }
    }
}

/// Status line for a game: `Turn: Player X`, `Winner: O` or `Draw!`.
#[instrument(skip(game))]
pub fn status_text(game: &GameState) -> String {
    match game.outcome() {
        Outcome::Win { player, .. } => format!("Winner: {player}"),
        Outcome::Draw => "Draw!".to_string(),
        Outcome::InProgress => format!("Turn: Player {}", game.turn()),
    }
}

/// Accessible description of one cell, e.g. `Square row 1 column 3 currently X`.
pub fn cell_label(pos: Position, cell: Cell) -> String {
    match cell {
        Cell::Empty => format!("Square {} empty", pos.grid_label()),
        Cell::Occupied(player) => format!("Square {} currently {player}", pos.grid_label()),
    }
}

/// One cell as the front end should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Board index, 0-8 in row-major order.
    pub index: usize,
    /// Where the cell is.
    pub position: Position,
    /// What it holds.
    pub cell: Cell,
    /// Accessible description.
    pub label: String,
    /// Part of the winning line.
    pub is_winning: bool,
    /// Clicking it would be ignored (occupied, or the game is over).
    pub is_disabled: bool,
}

/// A whole frame's worth of presentation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Cells in row-major order.
    pub cells: Vec<CellView>,
    /// Status line text.
    pub status: String,
    /// What the status line announces.
    pub kind: StatusKind,
}

impl BoardView {
    /// Derives the view of a game.
    #[instrument(skip(game))]
    pub fn from_state(game: &GameState) -> Self {
        let outcome = game.outcome();
        let winning_line = outcome.winning_line();

        let cells = Position::ALL
            .into_iter()
            .map(|position| {
                let cell = game.board().get(position);
                CellView {
                    index: position.to_index(),
                    position,
                    cell,
                    label: cell_label(position, cell),
                    is_winning: winning_line.is_some_and(|line| line.contains(position)),
                    is_disabled: !game.is_playable(position.to_index()),
                }
            })
            .collect();

        Self {
            cells,
            status: status_text(game),
            kind: StatusKind::of(&outcome),
        }
    }

    /// Cells grouped into the three board rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(3)
    }
}

/// Serializable summary of a game, as printed by `replay --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Marks in row-major order, `null` for empty cells.
    pub board: Vec<Option<Player>>,
    /// Player to move next.
    pub turn: Player,
    /// Derived outcome.
    pub outcome: Outcome,
    /// Indices of the winning line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Status line text.
    pub status: String,
}

impl Snapshot {
    /// Captures a game.
    pub fn from_state(game: &GameState) -> Self {
        let outcome = game.outcome();
        Self {
            board: game.board().cells().iter().map(|cell| cell.player()).collect(),
            turn: game.turn(),
            outcome,
            winning_line: outcome.winning_line().map(|line| line.indices()),
            status: status_text(game),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kind_of_outcome() {
        assert_eq!(StatusKind::of(&Outcome::InProgress), StatusKind::Turn);
        assert_eq!(StatusKind::of(&Outcome::Draw), StatusKind::Draw);
        let won = GameState::from_moves(&[0, 4, 1, 3, 2]).outcome();
        assert_eq!(StatusKind::of(&won), StatusKind::Win);
    }

    #[test]
    fn test_rows_are_three_by_three() {
        let view = BoardView::from_state(&GameState::new());
        let rows: Vec<_> = view.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert_eq!(rows[1][2].position, Position::MiddleRight);
        assert_eq!(rows[1][2].index, 5);
        assert!(view.cells.iter().enumerate().all(|(i, cell)| cell.index == i));
    }
}
