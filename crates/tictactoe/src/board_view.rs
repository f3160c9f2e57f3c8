//! Stateless board view: status derivation and click legality.

use crate::rules::{self, Line};
use crate::{Board, Mark, MoveError, Position, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// Status derived from a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress {
        /// Mark to be placed next.
        next: Mark,
    },
    /// A line is complete.
    Won {
        /// Mark that owns the line.
        mark: Mark,
        /// The first complete line in scan order.
        line: Line,
    },
    /// Board full without a line.
    Draw,
}

impl GameStatus {
    /// True once the board is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next Player: {next}"),
            GameStatus::Won { mark, .. } => write!(f, "Winner: {mark}"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Cell position.
    pub position: Position,
    /// Square contents.
    pub square: Square,
    /// Whether the cell lies on the winning line.
    pub winning: bool,
}

impl CellView {
    /// Text shown in the cell; blank when empty.
    pub fn symbol(&self) -> &'static str {
        match self.square {
            Square::Empty => " ",
            occupied => occupied.symbol(),
        }
    }
}

/// Read-only view over the displayed snapshot and whose turn it is.
///
/// Holds no state of its own: everything is recomputed from `board`.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    next: Mark,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board` with `next` to move.
    pub fn new(board: &'a Board, next: Mark) -> Self {
        Self { board, next }
    }

    /// The snapshot being viewed.
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Mark that a legal click would place.
    pub fn next(&self) -> Mark {
        self.next
    }

    /// The first complete line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.board)
    }

    /// Winner first, then draw, otherwise in progress.
    #[instrument(level = "trace", skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winning_line()
            && let Some(mark) = self.board.get(line[0]).mark()
        {
            GameStatus::Won { mark, line }
        } else if rules::is_full(self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next: self.next }
        }
    }

    /// The nine cells in index order, with winning cells flagged.
    pub fn cells(&self) -> [CellView; 9] {
        let line = self.winning_line();
        Position::ALL.map(|position| CellView {
            position,
            square: self.board.get(position),
            winning: line.is_some_and(|line| line.contains(&position)),
        })
    }

    /// Proposes the snapshot produced by clicking `pos`.
    ///
    /// # Errors
    ///
    /// [`MoveError::SquareOccupied`] if the cell holds a mark, otherwise
    /// [`MoveError::GameOver`] if the board already has a winner.
    #[instrument(skip(self), fields(next = %self.next))]
    pub fn handle_click(&self, pos: Position) -> Result<Board, MoveError> {
        if !self.board.is_empty(pos) {
            debug!("Ignoring click on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }
        if let Some(winner) = rules::check_winner(self.board) {
            debug!(%winner, "Ignoring click after game end");
            return Err(MoveError::GameOver(winner));
        }
        Ok(self.board.with_mark(pos, self.next))
    }
}
