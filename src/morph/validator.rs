//! Word validation
//!
//! A word is accepted when the analyzer's best parse is confident enough and
//! names a real part of speech.

use super::analyzer::{MorphAnalyzer, Parse};
use tracing::debug;

/// Minimum top-parse score for a word to be accepted
pub const ACCEPT_THRESHOLD: f64 = 0.5;

/// Outcome of validating a word
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub word: String,
    pub accepted: bool,
    /// Top-ranked parse, if the analyzer produced any
    pub best: Option<Parse>,
}

impl Verdict {
    /// Score of the top parse, 0 when there was no parse
    #[must_use]
    pub fn score(&self) -> f64 {
        self.best.as_ref().map_or(0.0, |p| p.score)
    }
}

/// Accepts or rejects candidate words using a morphological analyzer
#[derive(Debug, Clone)]
pub struct WordValidator<A> {
    analyzer: A,
}

impl<A: MorphAnalyzer> WordValidator<A> {
    #[must_use]
    pub const fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    #[must_use]
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Whether the word is a recognized lexical item
    #[must_use]
    pub fn validate(&self, word: &str) -> bool {
        self.verdict(word).accepted
    }

    /// Validate and keep the deciding parse
    #[must_use]
    pub fn verdict(&self, word: &str) -> Verdict {
        let best = self.analyzer.parse(word).into_iter().next();
        let accepted = best
            .as_ref()
            .is_some_and(|p| p.score >= ACCEPT_THRESHOLD && p.tag.is_some());

        debug!(
            word,
            accepted,
            score = best.as_ref().map_or(0.0, |p| p.score),
            "validated word"
        );

        Verdict {
            word: word.to_string(),
            accepted,
            best,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::{LexiconAnalyzer, ParseMethod, PartOfSpeech};

    fn validator() -> WordValidator<LexiconAnalyzer> {
        let lexicon = [
            "кот кот NOUN",
            "крот крот NOUN",
            "печь печь NOUN 1",
            "печь печь INFN 1",
            "три три NUMR 1",
            "три тереть VERB 1",
            "три третий ADJF 1",
        ];
        WordValidator::new(LexiconAnalyzer::from_lines(lexicon).unwrap())
    }

    #[test]
    fn dictionary_word_accepted() {
        let verdict = validator().verdict("кот");
        assert!(verdict.accepted);
        assert_eq!(
            verdict.best.as_ref().and_then(|p| p.tag),
            Some(PartOfSpeech::Noun)
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        // Two equal readings put the top score exactly on the threshold
        assert!(validator().validate("печь"));
    }

    #[test]
    fn weak_top_parse_rejected() {
        // Three equal readings leave the best at 1/3
        let verdict = validator().verdict("три");
        assert!(!verdict.accepted);
        assert!(verdict.score() < ACCEPT_THRESHOLD);
    }

    #[test]
    fn suffix_guess_rejected_by_default() {
        let verdict = validator().verdict("грот");
        assert!(!verdict.accepted);
        assert_eq!(
            verdict.best.as_ref().map(|p| p.method),
            Some(ParseMethod::Suffix)
        );
    }

    #[test]
    fn suffix_guess_accepted_with_high_weight() {
        let lenient = WordValidator::new(
            LexiconAnalyzer::from_lines(["крот крот NOUN"])
                .unwrap()
                .with_prediction_weight(1.0),
        );
        assert!(lenient.validate("грот"));
    }

    #[test]
    fn untagged_parse_rejected() {
        let verdict = validator().verdict("ъъъ");
        assert!(!verdict.accepted);
        assert!((verdict.score() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_parse_scores_zero() {
        let verdict = validator().verdict("");
        assert!(!verdict.accepted);
        assert!(verdict.best.is_none());
        assert!(verdict.score().abs() < f64::EPSILON);
    }
}
