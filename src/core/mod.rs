//! Core domain types for the letter grid
//!
//! The grid and the player's selection. Both are plain in-memory values with
//! no I/O.

mod grid;
mod selection;

pub use grid::{COLS, DEFAULT_LETTERS, GridError, LetterGrid, Position, ROWS};
pub use selection::{Pick, Selection};
