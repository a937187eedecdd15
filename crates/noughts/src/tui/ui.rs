//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::app::App;
use noughts_core::{Cell, GameStatus, Player, Position};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 14;
const BUTTON_LABEL: &str = "New Game";
const HELP: &str = "click or 1-9 to play | arrows + enter | n: new game | q: quit";

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// The "New Game" button.
    NewGame,
}

/// Screen rectangles of everything clickable, as of the last draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hitmap {
    /// Cell rectangles, indexed like [`Position::to_index`].
    pub cells: [Rect; 9],
    /// The "New Game" button.
    pub new_game: Rect,
}

impl Hitmap {
    /// Resolves a terminal coordinate to the target under it.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cells[pos.to_index()], column, row))
            .map(Target::Cell)
            .or_else(|| contains(self.new_game, column, row).then_some(Target::NewGame))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Renders the whole window and returns where the clickable parts landed.
pub fn draw(frame: &mut Frame, app: &App) -> Hitmap {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Title
            Constraint::Length(3),               // Status
            Constraint::Min(CELL_HEIGHT * 3),    // Board
            Constraint::Length(3),               // New Game
            Constraint::Length(1),               // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(app.config().title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], app);
    let cells = draw_board(frame, chunks[2], app);
    let new_game = draw_button(frame, chunks[3]);

    if *app.config().show_help() {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }

    Hitmap { cells, new_game }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let style = match app.game().status() {
        GameStatus::InProgress => Style::default().add_modifier(Modifier::BOLD),
        GameStatus::Won(_) => Style::default().fg(palette.win).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(palette.draw).add_modifier(Modifier::BOLD),
    };

    let status = Paragraph::new(app.status_line())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let board_area = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, *cell_area, app, pos);
                cells[pos.to_index()] = *cell_area;
            }
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();
    let palette = app.palette();
    let over = game.is_over();
    let on_line = game
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let (symbol, mut mark_style) = match game.board().get(pos) {
        Cell::Empty => (
            pos.number().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(player) => {
            let color = match player {
                Player::X => palette.x,
                Player::O => palette.o,
            };
            (
                player.mark().to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    let mut border_style = Style::default();
    if over {
        // Finished boards render like disabled buttons.
        border_style = border_style.fg(Color::DarkGray);
        if game.board().is_empty(pos) {
            mark_style = Style::default().fg(Color::Black);
        }
    } else if pos == app.cursor() {
        border_style = border_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if on_line {
        mark_style = mark_style.bg(palette.win).fg(Color::Black);
        border_style = Style::default().fg(palette.win);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, mark_style)))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border_style));
    frame.render_widget(paragraph, area);
}

fn draw_button(frame: &mut Frame, area: Rect) -> Rect {
    let button_area = center_rect(area, BUTTON_WIDTH, 3);
    let button = Paragraph::new(BUTTON_LABEL)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(button, button_area);
    button_area
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
