//! Tic-tac-toe with a navigable move history.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`] and the immutable [`Board`] snapshot
//! - **Rules**: winning-line scan and draw detection ([`rules`])
//! - **Board view**: [`BoardView`] derives status and decides click legality
//! - **Controller**: [`Game`] owns the history, the current-move pointer and
//!   the move-list order
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, Position};
//!
//! let mut game = Game::new();
//! game.click(Position::Center).unwrap();
//! game.click(Position::TopLeft).unwrap();
//! game.jump_to(1).unwrap();
//! game.click(Position::BottomRight).unwrap();
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status().to_string(), "Next Player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_view;
mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use board_view::{BoardView, CellView, GameStatus};
pub use error::{HistoryError, MoveError};
pub use game::{Game, MoveEntry, SortOrder};
pub use position::{Location, Position};
pub use types::{Board, Mark, Square};
