//! Tic-tac-toe - terminal game with time travel through past moves.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use tictactoe_tui::{ReplayScript, TuiConfig, render_text, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay {
            cells,
            jump_to,
            descending,
        } => run_replay(&cells, jump_to, descending),
    }
}

/// Run the interactive TUI, logging to a file so the screen stays clean.
fn run_play(config_path: PathBuf) -> Result<()> {
    let config = TuiConfig::load_or_default(&config_path)?;
    initialize_file_tracing(config.log_file(), config.log_filter())?;
    info!(config_path = %config_path.display(), "Configuration ready");
    run_tui(&config)
}

/// Replay a scripted game and print the result.
fn run_replay(cells: &[String], jump_to: Option<usize>, descending: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let script = ReplayScript::parse(cells, jump_to, descending)?;
    let game = script.run();
    print!("{}", render_text(&game));
    Ok(())
}

fn initialize_file_tracing(log_file: &Path, default_filter: &str) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
