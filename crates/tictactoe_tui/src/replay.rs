//! Headless replay: play a scripted sequence and print the outcome.

use anyhow::{Result, bail};
use tictactoe::{Game, Position, SortOrder};
use tracing::{debug, info, instrument};

/// Actions applied by a replay, parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayScript {
    /// Cells clicked in order.
    pub cells: Vec<Position>,
    /// Move to jump to after clicking.
    pub jump_to: Option<usize>,
    /// Whether to show the move list latest-first.
    pub descending: bool,
}

impl ReplayScript {
    /// Parses cell arguments given as indices (0-8) or labels.
    ///
    /// # Errors
    ///
    /// Fails on the first argument that names no cell.
    #[instrument]
    pub fn parse(cells: &[String], jump_to: Option<usize>, descending: bool) -> Result<Self> {
        let cells = cells
            .iter()
            .map(|cell| match Position::from_label_or_number(cell) {
                Some(pos) => Ok(pos),
                None => bail!("Unknown cell {:?} (expected 0-8 or a label like \"center\")", cell),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            cells,
            jump_to,
            descending,
        })
    }

    /// Applies the script to a new game.
    ///
    /// Illegal clicks and out-of-range jumps are skipped.
    #[instrument(skip(self))]
    pub fn run(&self) -> Game {
        let mut game = Game::new();
        for &pos in &self.cells {
            if let Err(e) = game.click(pos) {
                debug!(error = %e, %pos, "Skipping illegal click");
            }
        }
        if let Some(mv) = self.jump_to
            && let Err(e) = game.jump_to(mv)
        {
            debug!(error = %e, "Skipping jump");
        }
        if self.descending && game.sort() == SortOrder::Ascending {
            game.toggle_sort();
        }
        info!(moves = game.history().len() - 1, "Replay finished");
        game
    }
}

/// Formats the displayed board, status and numbered move list.
pub fn render_text(game: &Game) -> String {
    let mut out = String::new();
    out.push_str(&game.current_squares().display());
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push_str(&format!("\n\nMoves ({}):\n", game.sort()));
    for (row, entry) in game.move_list().iter().enumerate() {
        out.push_str(&format!("{}. {}\n", row + 1, entry.label()));
    }
    out
}
