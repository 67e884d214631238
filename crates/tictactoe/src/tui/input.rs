//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Position;

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    Cursor(Direction),
    /// Play at the cursor.
    Place,
    /// Play at a board index (from the number keys).
    PlaceAt(usize),
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Maps a key press to a command. Unbound keys yield `None`.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::Cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Cursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Command::Place,
        KeyCode::Char(c @ '1'..='9') => Command::PlaceAt(c as usize - '1' as usize),
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Steps the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match direction {
        Direction::Up => (row.saturating_sub(1), column),
        Direction::Down => (row + 1, column),
        Direction::Left => (row, column.saturating_sub(1)),
        Direction::Right => (row, column + 1),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}
