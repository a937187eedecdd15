//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in a clickable terminal window
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with title and color settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
