//! Word check command
//!
//! Validates a single word and reports every parse the analyzer produced.

use crate::core::{LetterGrid, Position};
use crate::dictionary::DictionaryStore;
use crate::morph::{MorphAnalyzer, Parse, Verdict, WordValidator};
use anyhow::{Context, Result, bail};

/// Result of checking a word
pub struct CheckResult {
    pub verdict: Verdict,
    /// All parses, best first
    pub parses: Vec<Parse>,
    /// Grid cells that spell the word, if it can be formed
    pub path: Option<Vec<Position>>,
    pub in_dictionary: bool,
}

/// Check a word against the validator, the grid and the dictionary
///
/// # Errors
///
/// Returns an error if the word is empty or the dictionary cannot be read.
pub fn check_word<A: MorphAnalyzer>(
    word: &str,
    validator: &WordValidator<A>,
    grid: &LetterGrid,
    store: &DictionaryStore,
) -> Result<CheckResult> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        bail!("Word must not be empty");
    }

    let verdict = validator.verdict(&word);
    let parses = validator.analyzer().parse(&word);
    let in_dictionary = store
        .contains(&word)
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    Ok(CheckResult {
        path: grid.spell(&word),
        verdict,
        parses,
        in_dictionary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::LexiconAnalyzer;
    use tempfile::tempdir;

    fn validator() -> WordValidator<LexiconAnalyzer> {
        WordValidator::new(
            LexiconAnalyzer::from_lines(["кот кот NOUN", "мама мама NOUN"]).unwrap(),
        )
    }

    #[test]
    fn check_known_buildable_word() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::open(dir.path().join("words.txt"));
        store.add_if_absent("кот").unwrap();

        let result = check_word("КОТ", &validator(), &LetterGrid::default(), &store).unwrap();
        assert!(result.verdict.accepted);
        assert_eq!(result.verdict.word, "кот");
        assert_eq!(result.parses.len(), 1);
        assert_eq!(result.path.map(|p| p.len()), Some(3));
        assert!(result.in_dictionary);
    }

    #[test]
    fn check_word_with_repeated_letters() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("words.txt"));

        let result = check_word("мама", &validator(), &LetterGrid::default(), &store).unwrap();
        assert!(result.verdict.accepted);
        assert!(result.path.is_none());
        assert!(!result.in_dictionary);
    }

    #[test]
    fn check_empty_word_fails() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("words.txt"));
        assert!(check_word("  ", &validator(), &LetterGrid::default(), &store).is_err());
    }
}
