//! The eight winning lines.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Three positions that win the game when one player holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// The positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether the line passes through a position.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// All winning lines in canonical scan order.
///
/// Rows top to bottom, then columns left to right, then the main diagonal
/// and the anti-diagonal. Win detection reports the first complete line in
/// this order.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new(Position::TopLeft, Position::TopCenter, Position::TopRight),
    Line::new(Position::MiddleLeft, Position::Center, Position::MiddleRight),
    Line::new(Position::BottomLeft, Position::BottomCenter, Position::BottomRight),
    // Columns
    Line::new(Position::TopLeft, Position::MiddleLeft, Position::BottomLeft),
    Line::new(Position::TopCenter, Position::Center, Position::BottomCenter),
    Line::new(Position::TopRight, Position::MiddleRight, Position::BottomRight),
    // Diagonals
    Line::new(Position::TopLeft, Position::Center, Position::BottomRight),
    Line::new(Position::TopRight, Position::Center, Position::BottomLeft),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let indices: Vec<[usize; 3]> = LINES.iter().map(Line::indices).collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_center_is_on_four_lines() {
        let through_center = LINES
            .iter()
            .filter(|line| line.contains(Position::Center))
            .count();
        assert_eq!(through_center, 4);
    }
}
