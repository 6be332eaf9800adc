//! Player letter selection
//!
//! The in-progress candidate word. Letters keep pick order and a letter value
//! can only be held once at a time.

use super::grid::Position;

/// A picked letter together with the cell it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub letter: char,
    pub position: Position,
}

/// Ordered set of picked letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    picks: Vec<Pick>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter unless that value is already selected
    ///
    /// Returns `true` if the letter was added.
    pub fn push(&mut self, letter: char, position: Position) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.picks.push(Pick { letter, position });
        true
    }

    /// Remove the most recent pick
    pub fn pop(&mut self) -> Option<Pick> {
        self.picks.pop()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.picks.iter().any(|p| p.letter == letter)
    }

    /// Whether the cell at `position` is part of the selection
    #[inline]
    #[must_use]
    pub fn contains_position(&self, position: Position) -> bool {
        self.picks.iter().any(|p| p.position == position)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Picks in selection order
    #[must_use]
    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    /// The candidate word: picked letters joined and lowercased
    ///
    /// # Examples
    /// ```
    /// use word_grid::core::{Position, Selection};
    ///
    /// let mut selection = Selection::new();
    /// selection.push('К', Position::new(1, 4));
    /// selection.push('О', Position::new(2, 2));
    /// selection.push('Т', Position::new(3, 0));
    /// assert_eq!(selection.word(), "кот");
    /// ```
    #[must_use]
    pub fn word(&self) -> String {
        self.picks
            .iter()
            .map(|p| p.letter)
            .collect::<String>()
            .to_lowercase()
    }

    /// Picked letters separated by spaces, as shown while building a word
    #[must_use]
    pub fn spaced(&self) -> String {
        self.picks
            .iter()
            .map(|p| p.letter.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
