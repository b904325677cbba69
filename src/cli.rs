//! Command-line interface for tictactoe_travel.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_travel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults apply when missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Run a scripted session and print the resulting view
    Replay {
        /// Comma-separated actions: `N` plays cell N, `@N` jumps to step N,
        /// `~` toggles the move list order
        #[arg(short, long, allow_hyphen_values = true)]
        actions: String,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
