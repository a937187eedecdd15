//! Application state and logic.

use super::input::{self, Command};
use crate::config::{ConfigError, Palette, ShellConfig};
use noughts_core::{GameState, GameStatus, Position};
use tracing::{debug, info, instrument};

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the only [`GameState`]; every mutation goes through
/// [`App::dispatch`].
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    config: ShellConfig,
    palette: Palette,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: ShellConfig) -> Result<Self, ConfigError> {
        let palette = config.palette()?;
        Ok(Self {
            game: GameState::new(),
            cursor: Position::Center,
            config,
            palette,
        })
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the shell configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Gets the resolved colors.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Text for the status label above the board.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.game.current_player()),
            GameStatus::Won(player) => format!("Player {} wins! Congratulations!", player),
            GameStatus::Draw => "The game is a draw!".to_string(),
        }
    }

    /// Applies a command from the input adapter.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Flow {
        match command {
            Command::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Command::PlayCursor => self.play(self.cursor),
            Command::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Command::NewGame => self.game.reset(),
            Command::Quit => {
                info!("User quit");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn play(&mut self, pos: Position) {
        match self.game.play(pos) {
            Ok(status) => debug!(position = %pos, ?status, "Move applied"),
            // Invalid moves are ignored, as a disabled button would be.
            Err(e) => debug!(position = %pos, error = %e, "Move ignored"),
        }
    }
}
