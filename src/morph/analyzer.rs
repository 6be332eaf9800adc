//! Morphological analyzer boundary
//!
//! Defines the `MorphAnalyzer` trait and the parse results it produces.

use super::PartOfSpeech;

/// How a parse was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMethod {
    /// The form is listed in the lexicon
    Dictionary,
    /// Guessed from a known word ending
    Suffix,
    /// Nothing recognized the word
    Unknown,
}

/// One morphological interpretation of a word
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
    pub word: String,
    pub normal_form: String,
    /// `None` when the analyzer could not assign a part of speech
    pub tag: Option<PartOfSpeech>,
    /// Confidence in [0, 1]
    pub score: f64,
    pub method: ParseMethod,
}

/// A source of ranked morphological parses
pub trait MorphAnalyzer {
    /// Parse a word
    ///
    /// Returns parses ordered best first. An empty vector means the word could
    /// not be parsed at all.
    fn parse(&self, word: &str) -> Vec<Parse>;
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for &A {
    fn parse(&self, word: &str) -> Vec<Parse> {
        (**self).parse(word)
    }
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for Box<A> {
    fn parse(&self, word: &str) -> Vec<Parse> {
        (**self).parse(word)
    }
}

/// Sort parses best first, breaking score ties by tag order
pub(crate) fn rank(parses: &mut [Parse]) {
    parses.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.tag.cmp(&b.tag)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tag: Option<PartOfSpeech>, score: f64) -> Parse {
        Parse {
            word: "x".to_string(),
            normal_form: "x".to_string(),
            tag,
            score,
            method: ParseMethod::Dictionary,
        }
    }

    #[test]
    fn rank_orders_by_score_descending() {
        let mut parses = vec![
            parse(Some(PartOfSpeech::Verb), 0.25),
            parse(Some(PartOfSpeech::Noun), 0.75),
        ];
        rank(&mut parses);
        assert_eq!(parses[0].tag, Some(PartOfSpeech::Noun));
    }

    #[test]
    fn rank_breaks_ties_by_tag() {
        let mut parses = vec![
            parse(Some(PartOfSpeech::Infinitive), 0.5),
            parse(Some(PartOfSpeech::Noun), 0.5),
        ];
        rank(&mut parses);
        assert_eq!(parses[0].tag, Some(PartOfSpeech::Noun));
        assert_eq!(parses[1].tag, Some(PartOfSpeech::Infinitive));
    }
}
