//! Core game logic: the board state machine with undo history and
//! localized win detection.

mod board;
mod status;

pub use board::{Board, COLS, ROWS, WIN_COUNT};
pub use status::{Cell, GameStatus};
