//! Hotseat Tic-Tac-Toe - terminal host.
//!
//! Loads config, opens the saved-game store, restores the last game and
//! runs the board in the terminal until the players quit.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use hotseat_tictactoe::{
    BoardView, GameController, HotseatConfig, PersistenceAdapter, PersistenceError, SqliteStore,
    StartOutcome,
};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config =
        HotseatConfig::load_or_default(&cli.config).context("Failed to load configuration")?;
    if let Some(db_path) = cli.db_path {
        config = config.with_db_path(db_path);
    }

    init_logging(config.log_file())?;
    info!(
        config = %cli.config.display(),
        db_path = %config.db_path(),
        policy = ?config.save_policy(),
        "Starting Hotseat Tic-Tac-Toe"
    );

    let store = SqliteStore::open(config.db_path()).context("Failed to open saved-game store")?;
    let adapter = PersistenceAdapter::with_key(store, config.save_key().as_str());
    let mut controller = GameController::new(adapter, BoardView::new(), *config.save_policy());

    match controller.start() {
        StartOutcome::Restored => info!("Resuming saved game"),
        StartOutcome::Fresh(PersistenceError::NotFound) => info!("Starting a new game"),
        StartOutcome::Fresh(reason) => warn!(%reason, "Starting a new game"),
    }

    tui::run(&mut controller)
}

/// Sends logs to a file so they do not draw over the terminal UI.
fn init_logging(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
