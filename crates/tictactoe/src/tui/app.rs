//! Application state and logic.

use super::input::{Command, command_for, move_cursor};
use crate::view::BoardView;
use crossterm::event::KeyEvent;
use tictactoe_core::{GameState, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the one [`GameState`] of the session and the keyboard cursor.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    running: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Presentation state for the next frame.
    pub fn view(&self) -> BoardView {
        BoardView::from_state(&self.game)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = command_for(key) {
            self.execute(command);
        }
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) {
        debug!(?command, "Handling command");
        match command {
            Command::Cursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Command::Place => self.select(self.cursor.to_index()),
            Command::PlaceAt(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.select(index);
            }
            Command::Restart => self.restart(),
            Command::Quit => {
                info!("User quit");
                self.running = false;
            }
        }
    }

    /// Plays the current player's mark at `index`; illegal moves are ignored.
    pub fn select(&mut self, index: usize) {
        let was_over = self.game.outcome().is_over();
        self.game.apply_move(index);
        let outcome = self.game.outcome();
        if outcome.is_over() && !was_over {
            info!(%outcome, "Game over");
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::StatusKind;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tictactoe_core::{Cell, Player};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().board().get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(app.game().turn(), Player::O);
    }

    #[test]
    fn test_arrows_then_space() {
        let mut app = App::new();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.game().board().get(Position::TopLeft), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_number_keys_play_a_full_game() {
        let mut app = App::new();
        for key in ['1', '5', '2', '4', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        let view = app.view();
        assert_eq!(view.kind, StatusKind::Win);
        assert_eq!(view.status, "Winner: X");
        assert_eq!(app.cursor(), Position::TopRight);

        // Board is locked until restart.
        let before = app.game().clone();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_restart_key() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new();
        assert!(app.is_running());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.is_running());
    }

    #[test]
    fn test_unbound_key_changes_nothing() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.game(), &GameState::new());
        assert!(app.is_running());
    }
}
