//! Letter grid representation
//!
//! A `LetterGrid` is the fixed 5×6 puzzle surface. It is built once at startup
//! and never mutated for the rest of the session.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use thiserror::Error;

/// Number of grid rows
pub const ROWS: usize = 5;

/// Number of grid columns
pub const COLS: usize = 6;

/// The 30-letter alphabet of the default grid, row-major
pub const DEFAULT_LETTERS: [[char; COLS]; ROWS] = [
    ['А', 'Б', 'В', 'Г', 'Д', 'Е'],
    ['Ж', 'З', 'И', 'Й', 'К', 'Л'],
    ['М', 'Н', 'О', 'П', 'Р', 'С'],
    ['Т', 'У', 'Ф', 'Х', 'Ц', 'Ч'],
    ['Ш', 'Щ', 'Ы', 'Э', 'Ю', 'Я'],
];

/// A zero-based grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the position lies inside a 5×6 grid
    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors raised when addressing the grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position {0} is outside the {ROWS}x{COLS} grid")]
    OutOfBounds(Position),
}

/// Fixed table of letters the player picks from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: [[char; COLS]; ROWS],
}

impl Default for LetterGrid {
    fn default() -> Self {
        Self {
            cells: DEFAULT_LETTERS,
        }
    }
}

impl LetterGrid {
    /// Build a grid from an explicit letter layout
    ///
    /// Letters are stored uppercase whatever case they are given in.
    #[must_use]
    pub fn from_letters(cells: [[char; COLS]; ROWS]) -> Self {
        Self {
            cells: cells.map(|row| row.map(normalize)),
        }
    }

    /// Build a grid holding a random permutation of the default alphabet
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_grid::core::LetterGrid;
    ///
    /// let grid = LetterGrid::shuffled(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(grid.letters().count(), 30);
    /// ```
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters: Vec<char> = DEFAULT_LETTERS.iter().flatten().copied().collect();
        letters.shuffle(rng);

        let mut cells = [[' '; COLS]; ROWS];
        for (i, letter) in letters.into_iter().enumerate() {
            cells[i / COLS][i % COLS] = letter;
        }
        Self { cells }
    }

    /// Get the letter at a position
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if the position is outside the grid.
    pub fn letter_at(&self, pos: Position) -> Result<char, GridError> {
        if pos.in_bounds() {
            Ok(self.cells[pos.row][pos.col])
        } else {
            Err(GridError::OutOfBounds(pos))
        }
    }

    /// Find where a letter sits, ignoring case
    #[must_use]
    pub fn find(&self, letter: char) -> Option<Position> {
        let wanted = normalize(letter);
        self.positions()
            .find(|&pos| self.cells[pos.row][pos.col] == wanted)
    }

    /// Cells that spell `word`, one per letter, if the grid can form it
    ///
    /// Returns `None` if a letter is missing or repeated, since a letter can
    /// only be picked once per word.
    #[must_use]
    pub fn spell(&self, word: &str) -> Option<Vec<Position>> {
        let mut path: Vec<Position> = Vec::new();
        for letter in word.chars() {
            let pos = self.find(letter)?;
            if path.contains(&pos) {
                return None;
            }
            path.push(pos);
        }
        Some(path)
    }

    /// Iterate all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Position::new(row, col)))
    }

    /// Iterate all letters in row-major order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Borrow a row of letters
    ///
    /// # Panics
    /// Panics if `row >= ROWS`
    #[must_use]
    pub fn row(&self, row: usize) -> &[char; COLS] {
        &self.cells[row]
    }
}

/// Grid letters are stored uppercase; selection compares on that form.
fn normalize(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}
