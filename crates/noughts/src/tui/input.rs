//! Translation of terminal events into shell commands.
//!
//! Nothing here touches the terminal or the game; the event loop feeds raw
//! crossterm events in and hands the resulting [`Command`] to the app.

use super::ui::{Hitmap, Target};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::{BOARD_SIZE, Position};

/// Cursor movement direction.
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

/// Something the user asked the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark at a position.
    Play(Position),
    /// Place the current player's mark under the cursor.
    PlayCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Throw the current game away and start over.
    NewGame,
    /// Leave the program.
    Quit,
}

/// Maps a key press to a command.
///
/// Digits 1-9 address cells by [`Position::number`], the same numbers the
/// board shows on empty cells.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('n') | KeyCode::Char('r') => Some(Command::NewGame),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::MoveCursor(Direction::Right)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| Position::from_number(digit as usize))
            .map(Command::Play),
        _ => None,
    }
}

/// Maps a mouse event to a command using the last rendered hit map.
///
/// Only left-button presses count as clicks.
pub fn command_for_mouse(mouse: MouseEvent, hitmap: &Hitmap) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    hitmap
        .target_at(mouse.column, mouse.row)
        .map(|target| match target {
            Target::Cell(pos) => Command::Play(pos),
            Target::NewGame => Command::NewGame,
        })
}

/// Moves the cursor one step, stopping at the board edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let last = BOARD_SIZE - 1;

    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(last), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(last)),
    };

    Position::from_row_col(row, col).unwrap_or(cursor)
}
