//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal with time travel through past moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TUI config file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,
    },

    /// Play a fixed sequence of cells and print the result
    Replay {
        /// Cells to click in order, as an index (0-8) or a label such as "center"
        cells: Vec<String>,

        /// Jump to this move after playing the cells
        #[arg(long)]
        jump_to: Option<usize>,

        /// Print the move list latest-first
        #[arg(long)]
        descending: bool,
    },
}
