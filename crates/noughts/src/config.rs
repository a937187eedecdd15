//! Shell configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// User-facing presentation settings.
///
/// Every field has a default, so an empty file (or no file at all) gives the
/// stock look: red X, blue O, green win banner, yellow draw banner.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Title shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// Color of X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color of O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Color of the status line after a win.
    #[serde(default = "default_win_color")]
    win_color: String,

    /// Color of the status line after a draw.
    #[serde(default = "default_draw_color")]
    draw_color: String,

    /// Whether to show the key help line under the board.
    #[serde(default = "default_show_help")]
    show_help: bool,
}

fn default_title() -> String {
    "Tic Tac Toe".to_string()
}

fn default_x_color() -> String {
    "red".to_string()
}

fn default_o_color() -> String {
    "blue".to_string()
}

fn default_win_color() -> String {
    "green".to_string()
}

fn default_draw_color() -> String {
    "yellow".to_string()
}

fn default_show_help() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_color: default_x_color(),
            o_color: default_o_color(),
            win_color: default_win_color(),
            draw_color: default_draw_color(),
            show_help: default_show_help(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Colors are validated here so a bad palette fails at startup rather
    /// than at first draw.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(title = %config.title, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.palette()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the color names into terminal colors.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            win: parse_color("win_color", &self.win_color)?,
            draw: parse_color("draw_color", &self.draw_color)?,
        })
    }
}

#[track_caller]
fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Unknown color {:?} for {}", value, field)))
}

/// Resolved colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Status line after a win.
    pub win: Color,
    /// Status line after a draw.
    pub draw: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Red,
            o: Color::Blue,
            win: Color::Green,
            draw: Color::Yellow,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
