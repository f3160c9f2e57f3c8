//! Game controller: the authoritative history, pointer and sort order.

use crate::{Board, BoardView, GameStatus, HistoryError, Location, Mark, MoveError, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Order in which the move list is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this row refers to.
    pub move_number: usize,
    /// Cell changed by this move; `None` for the game start.
    pub location: Option<Location>,
    /// Whether this row is the displayed move.
    pub is_current: bool,
}

impl MoveEntry {
    /// Only rows other than the displayed move can be jumped to.
    pub fn is_clickable(&self) -> bool {
        !self.is_current
    }

    /// Text shown for this row.
    pub fn label(&self) -> String {
        if self.is_current {
            format!("You are at move #{}", self.move_number)
        } else if self.move_number == 0 {
            "Go to game start".to_string()
        } else if let Some(location) = self.location {
            format!("Go to move #{} location {}", self.move_number, location)
        } else {
            format!("Go to move #{}", self.move_number)
        }
    }
}

/// Tic-tac-toe game with a navigable move history.
///
/// `history[0]` is the empty board and `history[i]` the board after move
/// `i`. Jumping back and then playing discards every later snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
    sort: SortOrder,
}

impl Game {
    /// Creates a game with only the empty board in its history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            sort: SortOrder::Ascending,
        }
    }

    /// All snapshots from game start to the latest move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed snapshot.
    pub fn current_squares(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Mark to be placed next, from the pointer's parity.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Current move-list order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Board view over the displayed snapshot.
    pub fn board_view(&self) -> BoardView<'_> {
        BoardView::new(self.current_squares(), self.next_mark())
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        self.board_view().status()
    }

    /// Records `next_squares` as the move after the displayed one.
    ///
    /// Snapshots after the pointer are dropped before appending.
    #[instrument(skip(self, next_squares), fields(current_move = self.current_move))]
    pub fn play(&mut self, next_squares: Board) {
        let dropped = self.history.len() - (self.current_move + 1);
        if dropped > 0 {
            debug!(dropped, "Discarding abandoned future moves");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next_squares);
        self.current_move = self.history.len() - 1;
        info!(current_move = self.current_move, "Move played");
    }

    /// Clicks a cell on the displayed board.
    ///
    /// # Errors
    ///
    /// Returns the board's [`MoveError`] and leaves the game untouched when
    /// the click is not a legal move.
    #[instrument(skip(self), fields(next = %self.next_mark()))]
    pub fn click(&mut self, pos: Position) -> Result<(), MoveError> {
        let next_squares = self.board_view().handle_click(pos)?;
        self.play(next_squares);
        Ok(())
    }

    /// Displays snapshot `mv` without altering the history.
    ///
    /// # Errors
    ///
    /// [`HistoryError::OutOfRange`] if `mv` is not a history index.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mv: usize) -> Result<(), HistoryError> {
        if mv >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                requested: mv,
                len: self.history.len(),
            });
        }
        self.current_move = mv;
        debug!("Jumped to move");
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggle();
        debug!(sort = %self.sort, "Move list order changed");
    }

    /// Cell changed by move `mv`, as (row, col).
    ///
    /// `None` for the game start or an index past the end.
    pub fn location_of(&self, mv: usize) -> Option<Location> {
        if mv == 0 {
            return None;
        }
        let current = self.history.get(mv)?;
        let previous = self.history.get(mv - 1)?;
        current.first_difference(previous).map(Position::location)
    }

    /// Move-list rows in display order.
    ///
    /// Descending order reverses the rows; history itself is never reordered.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let entries = (0..self.history.len()).map(|move_number| MoveEntry {
            move_number,
            location: self.location_of(move_number),
            is_current: move_number == self.current_move,
        });
        match self.sort {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }

    /// Row at which move `mv` appears in [`Game::move_list`].
    pub fn display_row(&self, mv: usize) -> usize {
        match self.sort {
            SortOrder::Ascending => mv,
            SortOrder::Descending => (self.history.len() - 1).saturating_sub(mv),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
