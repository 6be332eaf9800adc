//! Morphological word validation
//!
//! The analyzer boundary, a lexicon-backed analyzer, and the validator that
//! turns parses into accept/reject decisions.

mod analyzer;
mod embedded;
pub mod lexicon;
mod tag;
mod validator;

pub use analyzer::{MorphAnalyzer, Parse, ParseMethod};
pub use embedded::{LEXICON, LEXICON_COUNT};
pub use lexicon::{LexiconAnalyzer, LexiconEntry, LexiconError};
pub use tag::PartOfSpeech;
pub use validator::{ACCEPT_THRESHOLD, Verdict, WordValidator};
