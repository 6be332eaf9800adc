//! Batch validation command
//!
//! Validates every word of a list in parallel and optionally stores the
//! accepted ones in the dictionary.

use crate::dictionary::DictionaryStore;
use crate::morph::{MorphAnalyzer, WordValidator};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a batch run
#[derive(Debug)]
pub struct BatchResult {
    pub total_words: usize,
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
    /// Accepted words newly written to the dictionary
    pub stored: usize,
    pub duration: Duration,
}

impl BatchResult {
    #[must_use]
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.accepted.len() as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Read a word list: one word per line, blanks and `#` comments skipped
///
/// Words are lowercased and deduplicated, keeping first occurrence order.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut seen = FxHashSet::default();
    Ok(content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|word| seen.insert(word.clone()))
        .collect())
}

/// Validate `words` in parallel
///
/// If `store` is given, accepted words are added to it in input order.
/// Storage failures are logged and skipped.
pub fn run_batch<A: MorphAnalyzer + Sync>(
    words: &[String],
    validator: &WordValidator<A>,
    store: Option<&DictionaryStore>,
    show_progress: bool,
) -> BatchResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let verdicts: Vec<bool> = words
        .par_iter()
        .map(|word| {
            let accepted = validator.validate(word);
            pb.inc(1);
            accepted
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for (word, ok) in words.iter().zip(verdicts) {
        if ok {
            accepted.push(word.clone());
        } else {
            rejected.push(word.clone());
        }
    }

    let stored = store.map_or(0, |store| {
        accepted
            .iter()
            .filter(|word| match store.add_if_absent(word) {
                Ok(stored) => stored,
                Err(e) => {
                    warn!("failed to store '{word}': {e}");
                    false
                }
            })
            .count()
    });

    BatchResult {
        total_words: words.len(),
        accepted,
        rejected,
        stored,
        duration: start.elapsed(),
    }
}
