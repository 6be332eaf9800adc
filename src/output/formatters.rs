//! Formatting utilities for terminal output

use crate::core::{COLS, LetterGrid, Position, ROWS, Selection};

/// Width at which the current word wraps
pub const WORD_WRAP: usize = 15;

/// How to play
pub const RULES: &[&str] = &[
    "1. Pick letters from the grid.",
    "2. Build a word from the picked letters; each letter once per word.",
    "3. Submit the word. A real word scores one point per letter.",
    "4. Accepted words are saved to your dictionary.",
    "5. Make as many words as you can once the timer is running.",
];

/// Render the grid as text, bracketing selected cells
///
/// ```text
///  А  Б  В  Г  Д  Е
///  Ж  З  И  Й [К] Л
/// ```
#[must_use]
pub fn format_grid(grid: &LetterGrid, selection: &Selection) -> String {
    let mut out = String::new();
    for row in 0..ROWS {
        for (col, letter) in grid.row(row).iter().enumerate() {
            let cell = if selection.contains_position(Position::new(row, col)) {
                format!("[{letter}]")
            } else {
                format!(" {letter} ")
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

/// Column header for the text grid, 1-based
#[must_use]
pub fn grid_header() -> String {
    (1..=COLS).map(|c| format!(" {c} ")).collect()
}

/// Split text into lines of at most `width` characters
#[must_use]
pub fn wrap_chunks(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Format elapsed seconds as `m:ss`
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_brackets_selected_cells() {
        let grid = LetterGrid::default();
        let mut selection = Selection::new();
        selection.push('К', Position::new(1, 4));

        let text = format_grid(&grid, &selection);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], " А  Б  В  Г  Д  Е ");
        assert_eq!(lines[1], " Ж  З  И  Й [К] Л ");
    }

    #[test]
    fn header_numbers_columns() {
        assert_eq!(grid_header(), " 1  2  3  4  5  6 ");
    }

    #[test]
    fn wrap_splits_on_chars() {
        assert_eq!(wrap_chunks("К О Т", 2), vec!["К ", "О ", "Т"]);
        assert_eq!(wrap_chunks("", WORD_WRAP), Vec::<String>::new());
        assert_eq!(wrap_chunks("абв", 0), vec!["абв"]);
    }

    #[test]
    fn elapsed_minutes_and_seconds() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(65), "1:05");
        assert_eq!(format_elapsed(3600), "60:00");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
