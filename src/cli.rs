//! Command-line interface for hotseat_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Hotseat Tic-Tac-Toe - two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat_tictactoe")]
#[command(about = "Two-player tic-tac-toe with saved games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "hotseat.toml")]
    pub config: PathBuf,

    /// Override the saved-game database path from the config
    #[arg(long)]
    pub db_path: Option<String>,
}
