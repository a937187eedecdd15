//! Noughts - two-player tic-tac-toe.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, ShellConfig, tui};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.log_file.as_deref())?;
    info!("Starting noughts");

    let config = ShellConfig::load(cli.config.as_deref())?;
    tui::run(config)
}

/// Sends logs to `log_file`, or nowhere when no file was requested.
///
/// The terminal belongs to the game window, so logs never go to stdout.
fn initialize_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,noughts=debug,noughts_core=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}
