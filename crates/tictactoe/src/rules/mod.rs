//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluated against a board snapshot. Nothing here is
//! stored; callers recompute on every read.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};
