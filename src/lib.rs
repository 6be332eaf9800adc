//! Word Grid
//!
//! A letter-grid word game: pick Cyrillic letters from a 5×6 grid, submit the
//! word, and score one point per letter when a morphological analyzer
//! recognises it. Accepted words are kept in a plain-text dictionary file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_grid::core::LetterGrid;
//! use word_grid::dictionary::DictionaryStore;
//! use word_grid::game::GameSession;
//! use word_grid::morph::{LexiconAnalyzer, WordValidator};
//!
//! let validator = WordValidator::new(LexiconAnalyzer::embedded());
//! let store = DictionaryStore::open("словарь.txt");
//! let mut session = GameSession::new(LetterGrid::default(), validator, store);
//!
//! session.start_game();
//! for letter in "кот".chars() {
//!     session.select_char(letter).unwrap();
//! }
//! let outcome = session.submit_word().unwrap();
//! println!("accepted: {}, score: {}", outcome.accepted(), session.score());
//! ```

// Core domain types
pub mod core;

// Morphological analysis and word validation
pub mod morph;

// Persistent word list
pub mod dictionary;

// Game session state
pub mod game;

// User settings and logging setup
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
