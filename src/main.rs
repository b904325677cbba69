//! Tic-tac-toe with time travel - CLI entry point.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tictactoe_travel::cli::{Cli, Command};
use tictactoe_travel::{
    ConfigSource, GameConfig, GameEngine, GameView, parse_script, run_script, tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config, source) = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play => run_play(&config, &source),
        Command::Replay { actions, json } => run_replay(&config, &source, &actions, json),
    }
}

/// Builds the env filter, falling back to the configured default.
fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Records which settings are in effect once a subscriber exists.
fn log_config(config: &GameConfig, source: &ConfigSource) {
    info!(
        %source,
        ascending = *config.ascending(),
        log_filter = %config.log_filter(),
        "Settings loaded"
    );
}

/// Run the terminal UI, logging to a file so the screen stays clean.
fn run_play(config: &GameConfig, source: &ConfigSource) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    log_config(config, source);

    tui::run_tui(config)
}

/// Run a scripted session headlessly and print the view.
#[instrument(skip(config, source))]
fn run_replay(config: &GameConfig, source: &ConfigSource, script: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
    log_config(config, source);

    let actions = parse_script(script)?;
    let mut engine = GameEngine::with_order(*config.ascending());
    run_script(&mut engine, &actions)?;

    let view = GameView::from_engine(&engine);
    info!(status = %view.status, steps = view.moves.len(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render_text());
    }
    Ok(())
}
