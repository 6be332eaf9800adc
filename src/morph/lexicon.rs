//! Lexicon-backed morphological analyzer
//!
//! Looks words up in a form table and falls back to guessing the part of
//! speech from known word endings.

use super::analyzer::{MorphAnalyzer, Parse, ParseMethod, rank};
use super::embedded::LEXICON;
use super::PartOfSpeech;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Scale applied to suffix guesses so they stay below the acceptance threshold
pub const DEFAULT_PREDICTION_WEIGHT: f64 = 0.4;

const MIN_SUFFIX: usize = 2;
const MAX_SUFFIX: usize = 5;

/// Errors raised while reading lexicon data
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected `form lemma TAG [weight]`, got '{content}'")]
    Malformed { line: usize, content: String },
    #[error("line {line}: {message}")]
    UnknownTag { line: usize, message: String },
    #[error("line {line}: weight must be a positive number, got '{value}'")]
    InvalidWeight { line: usize, value: String },
}

/// A single lexicon line
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    pub form: String,
    pub normal_form: String,
    pub tag: PartOfSpeech,
    pub weight: f64,
}

impl LexiconEntry {
    /// Parse one `form lemma TAG [weight]` line
    ///
    /// Blank lines and `#` comments yield `Ok(None)`. `line` is the 1-based
    /// line number used in error messages.
    ///
    /// # Errors
    /// Returns `LexiconError` if the line has the wrong shape, an unknown tag,
    /// or a non-positive weight.
    pub fn parse_line(content: &str, line: usize) -> Result<Option<Self>, LexiconError> {
        let trimmed = content.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let (form, normal_form, tag, weight) = match fields.as_slice() {
            [form, lemma, tag] => (*form, *lemma, *tag, None),
            [form, lemma, tag, weight] => (*form, *lemma, *tag, Some(*weight)),
            _ => {
                return Err(LexiconError::Malformed {
                    line,
                    content: trimmed.to_string(),
                });
            }
        };

        let tag = tag
            .parse::<PartOfSpeech>()
            .map_err(|message| LexiconError::UnknownTag { line, message })?;

        let weight = match weight {
            None => 1.0,
            Some(value) => match value.parse::<f64>() {
                Ok(w) if w > 0.0 && w.is_finite() => w,
                _ => {
                    return Err(LexiconError::InvalidWeight {
                        line,
                        value: value.to_string(),
                    });
                }
            },
        };

        Ok(Some(Self {
            form: form.to_lowercase(),
            normal_form: normal_form.to_lowercase(),
            tag,
            weight,
        }))
    }
}

#[derive(Debug, Clone)]
struct Reading {
    normal_form: String,
    tag: PartOfSpeech,
    weight: f64,
}

/// Morphological analyzer over an in-memory lexicon
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    forms: FxHashMap<String, Vec<Reading>>,
    suffixes: FxHashMap<String, FxHashMap<PartOfSpeech, u32>>,
    prediction_weight: f64,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self {
            forms: FxHashMap::default(),
            suffixes: FxHashMap::default(),
            prediction_weight: DEFAULT_PREDICTION_WEIGHT,
        }
    }
}

impl LexiconAnalyzer {
    /// Create an empty analyzer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an analyzer from the lexicon compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let mut analyzer = Self::new();
        for (i, line) in LEXICON.iter().enumerate() {
            match LexiconEntry::parse_line(line, i + 1) {
                Ok(Some(entry)) => analyzer.insert(entry),
                Ok(None) => {}
                Err(e) => warn!("skipping embedded lexicon entry: {e}"),
            }
        }
        debug!(forms = analyzer.len(), "loaded embedded lexicon");
        analyzer
    }

    /// Build an analyzer from lexicon lines
    ///
    /// # Errors
    /// Returns the first `LexiconError` encountered.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut analyzer = Self::new();
        analyzer.extend_from_lines(lines)?;
        Ok(analyzer)
    }

    /// Merge lexicon lines into this analyzer
    ///
    /// Returns the number of entries added.
    ///
    /// # Errors
    /// Returns the first `LexiconError` encountered; entries before it stay merged.
    pub fn extend_from_lines<'a, I>(&mut self, lines: I) -> Result<usize, LexiconError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut added = 0;
        for (i, line) in lines.into_iter().enumerate() {
            if let Some(entry) = LexiconEntry::parse_line(line, i + 1)? {
                self.insert(entry);
                added += 1;
            }
        }
        Ok(added)
    }

    /// Merge a lexicon file into this analyzer
    ///
    /// # Errors
    /// Returns `LexiconError::Io` if the file cannot be read, or a parse error
    /// for the first bad line.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, LexiconError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let added = self.extend_from_lines(content.lines())?;
        debug!(path = %path.display(), added, "merged lexicon file");
        Ok(added)
    }

    /// Add one entry
    ///
    /// Re-inserting the same form, lemma and tag only updates the weight.
    pub fn insert(&mut self, entry: LexiconEntry) {
        let readings = self.forms.entry(entry.form.clone()).or_default();
        if let Some(existing) = readings
            .iter_mut()
            .find(|r| r.normal_form == entry.normal_form && r.tag == entry.tag)
        {
            existing.weight = entry.weight;
            return;
        }

        readings.push(Reading {
            normal_form: entry.normal_form,
            tag: entry.tag,
            weight: entry.weight,
        });

        let chars: Vec<char> = entry.form.chars().collect();
        for n in MIN_SUFFIX..=MAX_SUFFIX.min(chars.len().saturating_sub(1)) {
            let suffix: String = chars[chars.len() - n..].iter().collect();
            *self
                .suffixes
                .entry(suffix)
                .or_default()
                .entry(entry.tag)
                .or_insert(0) += 1;
        }
    }

    /// Set the scale for suffix guesses, clamped to [0, 1]
    #[must_use]
    pub fn with_prediction_weight(mut self, weight: f64) -> Self {
        self.prediction_weight = weight.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn prediction_weight(&self) -> f64 {
        self.prediction_weight
    }

    /// Number of distinct word forms
    #[must_use]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    #[must_use]
    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains_key(&form.to_lowercase())
    }

    fn lookup(&self, word: &str, readings: &[Reading]) -> Vec<Parse> {
        let total: f64 = readings.iter().map(|r| r.weight).sum();
        let mut parses: Vec<Parse> = readings
            .iter()
            .map(|r| Parse {
                word: word.to_string(),
                normal_form: r.normal_form.clone(),
                tag: Some(r.tag),
                score: r.weight / total,
                method: ParseMethod::Dictionary,
            })
            .collect();
        rank(&mut parses);
        parses
    }

    fn predict(&self, word: &str) -> Option<Vec<Parse>> {
        let chars: Vec<char> = word.chars().collect();
        let longest = MAX_SUFFIX.min(chars.len().saturating_sub(1));

        (MIN_SUFFIX..=longest).rev().find_map(|n| {
            let suffix: String = chars[chars.len() - n..].iter().collect();
            let counts = self.suffixes.get(&suffix)?;
            let total: u32 = counts.values().sum();

            let mut parses: Vec<Parse> = counts
                .iter()
                .map(|(&tag, &count)| Parse {
                    word: word.to_string(),
                    normal_form: word.to_string(),
                    tag: Some(tag),
                    score: self.prediction_weight * f64::from(count) / f64::from(total),
                    method: ParseMethod::Suffix,
                })
                .collect();
            rank(&mut parses);
            Some(parses)
        })
    }
}

impl MorphAnalyzer for LexiconAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Vec::new();
        }

        if let Some(readings) = self.forms.get(&word) {
            return self.lookup(&word, readings);
        }

        if word.chars().all(char::is_alphabetic)
            && let Some(parses) = self.predict(&word)
        {
            return parses;
        }

        vec![Parse {
            normal_form: word.clone(),
            word,
            tag: None,
            score: 1.0,
            method: ParseMethod::Unknown,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[&str] = &[
        "# sample",
        "кот кот NOUN",
        "рот рот NOUN",
        "крот крот NOUN",
        "",
        "печь печь NOUN 1",
        "печь печь INFN 1",
        "стали стать VERB 3",
        "стали сталь NOUN 1",
    ];

    fn sample() -> LexiconAnalyzer {
        LexiconAnalyzer::from_lines(SAMPLE.iter().copied()).unwrap()
    }

    #[test]
    fn parse_line_with_weight() {
        let entry = LexiconEntry::parse_line("Стали стать VERB 3", 1)
            .unwrap()
            .unwrap();
        assert_eq!(entry.form, "стали");
        assert_eq!(entry.normal_form, "стать");
        assert_eq!(entry.tag, PartOfSpeech::Verb);
        assert!((entry.weight - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_line_skips_comments_and_blanks() {
        assert!(LexiconEntry::parse_line("# note", 1).unwrap().is_none());
        assert!(LexiconEntry::parse_line("   ", 2).unwrap().is_none());
    }

    #[test]
    fn parse_line_errors_carry_line_number() {
        let err = LexiconEntry::parse_line("кот", 7).unwrap_err();
        assert!(matches!(err, LexiconError::Malformed { line: 7, .. }));

        let err = LexiconEntry::parse_line("кот кот ANIMAL", 3).unwrap_err();
        assert!(matches!(err, LexiconError::UnknownTag { line: 3, .. }));

        let err = LexiconEntry::parse_line("кот кот NOUN -1", 4).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidWeight { line: 4, .. }));
    }

    #[test]
    fn known_form_scores_one() {
        let parses = sample().parse("КОТ");
        assert_eq!(parses.len(), 1);
        assert_eq!(parses[0].tag, Some(PartOfSpeech::Noun));
        assert_eq!(parses[0].method, ParseMethod::Dictionary);
        assert!((parses[0].score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ambiguous_form_splits_by_weight() {
        let parses = sample().parse("стали");
        assert_eq!(parses.len(), 2);
        assert_eq!(parses[0].tag, Some(PartOfSpeech::Verb));
        assert_eq!(parses[0].normal_form, "стать");
        assert!((parses[0].score - 0.75).abs() < 1e-9);
        assert!((parses[1].score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn equal_weights_split_evenly() {
        let parses = sample().parse("печь");
        assert!((parses[0].score - 0.5).abs() < 1e-9);
        assert!((parses[1].score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn unknown_word_predicted_from_suffix() {
        // "грот" shares the "рот" ending with "крот"
        let parses = sample().parse("грот");
        assert_eq!(parses.len(), 1);
        assert_eq!(parses[0].method, ParseMethod::Suffix);
        assert_eq!(parses[0].tag, Some(PartOfSpeech::Noun));
        assert!((parses[0].score - DEFAULT_PREDICTION_WEIGHT).abs() < 1e-9);
    }

    #[test]
    fn prediction_weight_scales_guesses() {
        let analyzer = sample().with_prediction_weight(0.9);
        let parses = analyzer.parse("грот");
        assert!((parses[0].score - 0.9).abs() < 1e-9);

        let clamped = sample().with_prediction_weight(4.0);
        assert!((clamped.prediction_weight() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unrecognized_word_has_no_tag() {
        let parses = sample().parse("ъъъъ");
        assert_eq!(parses.len(), 1);
        assert_eq!(parses[0].tag, None);
        assert_eq!(parses[0].method, ParseMethod::Unknown);

        let parses = sample().parse("к0т");
        assert_eq!(parses[0].tag, None);
    }

    #[test]
    fn empty_word_has_no_parse() {
        assert!(sample().parse("").is_empty());
        assert!(sample().parse("   ").is_empty());
    }

    #[test]
    fn reinsert_updates_weight_only() {
        let mut analyzer = sample();
        analyzer
            .extend_from_lines(["стали сталь NOUN 3"])
            .unwrap();
        let parses = analyzer.parse("стали");
        assert_eq!(parses.len(), 2);
        assert!((parses[0].score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn load_file_merges_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.txt");
        std::fs::write(&path, "грот грот NOUN\n# tail\n").unwrap();

        let mut analyzer = sample();
        assert_eq!(analyzer.load_file(&path).unwrap(), 1);
        assert_eq!(analyzer.parse("грот")[0].method, ParseMethod::Dictionary);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LexiconAnalyzer::new()
            .load_file(dir.path().join("absent.txt"))
            .unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    #[test]
    fn embedded_lexicon_knows_common_words() {
        let analyzer = LexiconAnalyzer::embedded();
        assert!(!analyzer.is_empty());
        assert!(analyzer.contains("кот"));
        assert!(analyzer.contains("я"));
        assert_eq!(analyzer.parse("кот")[0].tag, Some(PartOfSpeech::Noun));
    }
}
