//! Noughts - two-player tic-tac-toe shell.
//!
//! The game rules live in [`noughts_core`]. This crate is the presentation
//! and input shell: it renders the board in a terminal window, turns mouse
//! clicks and key presses into moves, and redraws from the returned status.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags (config file, log file)
//! - **Config**: title and palette loaded from TOML
//! - **Tui**: terminal session, event loop, renderer and input adapter

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod tui;

pub use cli::Cli;
pub use config::{ConfigError, Palette, ShellConfig};
pub use tui::{App, Command, Flow, Hitmap, Target};
