//! Rejection reasons for game actions.
//!
//! Every rejection is a no-op for the player. The types exist so callers can
//! log the reason and tests can assert on it.

use crate::{Mark, Position};

/// Why a cell click was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Mark),
}

impl std::error::Error for MoveError {}

/// Why a history jump was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested move is past the end of the history.
    #[display("Move #{} is out of range (history has {} entries)", requested, len)]
    OutOfRange {
        /// Requested move index.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}
