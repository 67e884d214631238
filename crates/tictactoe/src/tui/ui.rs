//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use crate::config::Palette;
use crate::view::{CellView, StatusKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};
use tictactoe_core::{Cell, Player};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const HELP: &str = "arrows/hjkl move · enter place · 1-9 play · r Restart Game · q quit";

/// Options that shape a frame but are not game state.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Mark and highlight colors.
    pub palette: Palette,
    /// Show 1-9 in playable cells.
    pub show_cell_numbers: bool,
}

/// Renders the title, status line, board and key help.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let view = app.view();

    let [title, status, board, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(CELL_HEIGHT * 3),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(frame.area());

    let heading = Paragraph::new("Tic Tac Toe")
        .style(Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, title);

    let status_style = match view.kind {
        StatusKind::Turn => Style::new().fg(Color::Yellow),
        StatusKind::Win => Style::new().fg(theme.palette.highlight).add_modifier(Modifier::BOLD),
        StatusKind::Draw => Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };
    let status_line = Paragraph::new(view.status.as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(status_line, centered(status, CELL_WIDTH * 5));

    let [board] = Layout::horizontal([Constraint::Length(CELL_WIDTH * 3)])
        .flex(Flex::Center)
        .areas(board);
    let rows: [Rect; 3] = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).areas(board);
    for (row_area, cells) in rows.into_iter().zip(view.rows()) {
        let columns: [Rect; 3] =
            Layout::horizontal([Constraint::Length(CELL_WIDTH); 3]).areas(row_area);
        for (area, cell) in columns.into_iter().zip(cells) {
            draw_cell(frame, area, cell, cell.position == app.cursor(), theme);
        }
    }

    let hint = Paragraph::new(HELP)
        .style(Style::new().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, help);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, is_cursor: bool, theme: &Theme) {
    let (text, mut style) = match cell.cell {
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::new().fg(theme.palette.x).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::new().fg(theme.palette.o).add_modifier(Modifier::BOLD),
        ),
        Cell::Empty if theme.show_cell_numbers && !cell.is_disabled => (
            (cell.position.to_index() + 1).to_string(),
            Style::new().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::new(), Style::new()),
    };

    if cell.is_winning {
        style = style.bg(theme.palette.highlight).fg(Color::Black);
    }

    let border = if is_cursor {
        Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if cell.is_disabled {
        Style::new().fg(Color::DarkGray)
    } else {
        Style::new()
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border));
    frame.render_widget(paragraph, area);
}

fn centered(area: Rect, width: u16) -> Rect {
    let [inner] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::tui::input::Command;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let theme = Theme {
            palette: TuiConfig::default().palette().expect("default palette"),
            show_cell_numbers: true,
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        terminal
            .draw(|frame| draw(frame, app, &theme))
            .expect("draw succeeds");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_fresh_game_frame() {
        let screen = render(&App::new());
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Turn: Player X"));
        assert!(screen.contains("Restart Game"));
    }

    #[test]
    fn test_winner_frame() {
        let mut app = App::new();
        for index in [0, 4, 1, 3, 2] {
            app.execute(Command::PlaceAt(index));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
    }
}
