//! Terminal front end for tic-tac-toe with a navigable move history.
//!
//! # Architecture
//!
//! - **App**: cursor, focus and selection around a [`tictactoe::Game`]
//! - **Layout**: one geometry shared by drawing and mouse hit-testing
//! - **UI**: stateless ratatui rendering of the board, status and move list
//! - **Replay**: headless scripted play for the `replay` command

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod input;
mod layout;
mod replay;
mod terminal;
pub mod ui;

pub use app::{App, Focus, Transition};
pub use config::{ConfigError, TuiConfig};
pub use input::{digit_cell, move_cursor};
pub use layout::{ScreenLayout, list_offset};
pub use replay::{ReplayScript, render_text};
pub use terminal::run_tui;
