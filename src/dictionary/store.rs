//! Flat-file dictionary of accepted words
//!
//! One lowercase word per line, UTF-8, insertion order. The file only ever
//! grows; duplicates are rejected case-insensitively.

use rustc_hash::FxHashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Default dictionary file name
pub const DEFAULT_FILE_NAME: &str = "словарь.txt";

/// Errors raised by the dictionary store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot store an empty word")]
    EmptyWord,
    #[error("cannot store '{0}': words are single lines")]
    Multiline(String),
    #[error("dictionary I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Append-only word list backed by a text file
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    path: PathBuf,
}

impl DictionaryStore {
    /// Point a store at a file without touching the filesystem
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open a store, creating an empty backing file if none exists
    ///
    /// Creation is best-effort: failure is logged and the store still works
    /// as an empty dictionary.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = Self::new(path);
        if !store.path.exists()
            && let Err(e) = store.create_empty()
        {
            warn!("could not create dictionary file: {e}");
        }
        store
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a word unless it is already stored, ignoring case
    ///
    /// Returns `true` if a line was written.
    ///
    /// # Errors
    /// Returns `StoreError` if the word is empty or spans lines, or if the
    /// file cannot be read or appended to.
    pub fn add_if_absent(&self, word: &str) -> Result<bool> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(StoreError::EmptyWord);
        }
        if word.contains(['\n', '\r']) {
            return Err(StoreError::Multiline(word));
        }

        let content = self.read_raw()?;
        if content.lines().any(|line| line.trim().to_lowercase() == word) {
            debug!(word = %word, "word already in dictionary");
            return Ok(false);
        }

        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        // Keep one word per line even if the file was edited by hand
        let separator = if content.is_empty() || content.ends_with('\n') {
            ""
        } else {
            "\n"
        };
        writeln!(file, "{separator}{word}").map_err(|source| self.io_error(source))?;

        debug!(word = %word, path = %self.path.display(), "stored word");
        Ok(true)
    }

    /// All stored words in insertion order
    ///
    /// A missing file is an empty dictionary.
    ///
    /// # Errors
    /// Returns `StoreError::Io` for read failures other than a missing file.
    pub fn list_all(&self) -> Result<Vec<String>> {
        Ok(self
            .read_raw()?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Stored words deduplicated, sorted and capitalized for display
    ///
    /// # Errors
    /// Returns `StoreError::Io` for read failures other than a missing file.
    pub fn list_sorted(&self) -> Result<Vec<String>> {
        let mut seen = FxHashSet::default();
        let mut words: Vec<String> = self
            .list_all()?
            .into_iter()
            .map(|w| w.to_lowercase())
            .filter(|w| seen.insert(w.clone()))
            .collect();
        words.sort();
        Ok(words.iter().map(|w| capitalize(w)).collect())
    }

    /// Whether the word is stored, ignoring case
    ///
    /// # Errors
    /// Returns `StoreError::Io` for read failures other than a missing file.
    pub fn contains(&self, word: &str) -> Result<bool> {
        let word = word.trim().to_lowercase();
        Ok(self.list_all()?.iter().any(|w| w.to_lowercase() == word))
    }

    fn read_raw(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn create_empty(&self) -> Result<()> {
        self.ensure_parent()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map(drop)
            .map_err(|source| self.io_error(source))
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|source| self.io_error(source))
            }
            _ => Ok(()),
        }
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Uppercase the first character
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_creates_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        let store = DictionaryStore::open(&path);

        assert!(path.exists());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn open_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("words.txt");
        let _store = DictionaryStore::open(&path);
        assert!(path.exists());
    }

    #[test]
    fn missing_file_is_empty_dictionary() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("absent.txt"));
        assert!(store.list_all().unwrap().is_empty());
        assert!(!store.contains("кот").unwrap());
    }

    #[test]
    fn repeated_add_writes_single_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let store = DictionaryStore::open(&path);

        assert!(store.add_if_absent("кот").unwrap());
        assert!(!store.add_if_absent("кот").unwrap());

        assert_eq!(fs::read_to_string(&path).unwrap(), "кот\n");
    }

    #[test]
    fn dedup_ignores_case() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::open(dir.path().join("words.txt"));

        assert!(store.add_if_absent("Кот").unwrap());
        assert!(!store.add_if_absent("КОТ").unwrap());
        assert_eq!(store.list_all().unwrap(), vec!["кот"]);
    }

    #[test]
    fn dedup_sees_hand_edited_uppercase_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "Дом\n").unwrap();
        let store = DictionaryStore::open(&path);

        assert!(!store.add_if_absent("дом").unwrap());
    }

    #[test]
    fn list_keeps_insertion_order() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::open(dir.path().join("words.txt"));
        for word in ["сон", "кот", "дом"] {
            store.add_if_absent(word).unwrap();
        }
        assert_eq!(store.list_all().unwrap(), vec!["сон", "кот", "дом"]);
    }

    #[test]
    fn list_sorted_capitalizes() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::open(dir.path().join("words.txt"));
        for word in ["сон", "кот", "дом"] {
            store.add_if_absent(word).unwrap();
        }
        assert_eq!(store.list_sorted().unwrap(), vec!["Дом", "Кот", "Сон"]);
    }

    #[test]
    fn append_repairs_missing_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "дом").unwrap();
        let store = DictionaryStore::open(&path);

        store.add_if_absent("кот").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "дом\nкот\n");
    }

    #[test]
    fn blank_lines_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "\nдом\n\n  \n").unwrap();
        let store = DictionaryStore::open(&path);
        assert_eq!(store.list_all().unwrap(), vec!["дом"]);
    }

    #[test]
    fn empty_word_rejected() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::open(dir.path().join("words.txt"));
        assert!(matches!(store.add_if_absent("  "), Err(StoreError::EmptyWord)));
        assert!(matches!(
            store.add_if_absent("ко\nт"),
            Err(StoreError::Multiline(_))
        ));
    }

    #[test]
    fn capitalize_handles_cyrillic() {
        assert_eq!(capitalize("ёж"), "Ёж");
        assert_eq!(capitalize(""), "");
    }
}
