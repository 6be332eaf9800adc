//! Part-of-speech tags
//!
//! The OpenCorpora part-of-speech set used by Russian morphological
//! dictionaries.

use std::fmt;
use std::str::FromStr;

/// Grammatical part of speech of a parsed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartOfSpeech {
    Noun,
    FullAdjective,
    ShortAdjective,
    Comparative,
    Verb,
    Infinitive,
    FullParticiple,
    ShortParticiple,
    Gerund,
    Numeral,
    Adverb,
    Pronoun,
    Predicative,
    Preposition,
    Conjunction,
    Particle,
    Interjection,
}

impl PartOfSpeech {
    pub const ALL: [Self; 17] = [
        Self::Noun,
        Self::FullAdjective,
        Self::ShortAdjective,
        Self::Comparative,
        Self::Verb,
        Self::Infinitive,
        Self::FullParticiple,
        Self::ShortParticiple,
        Self::Gerund,
        Self::Numeral,
        Self::Adverb,
        Self::Pronoun,
        Self::Predicative,
        Self::Preposition,
        Self::Conjunction,
        Self::Particle,
        Self::Interjection,
    ];

    /// The OpenCorpora tag code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::FullAdjective => "ADJF",
            Self::ShortAdjective => "ADJS",
            Self::Comparative => "COMP",
            Self::Verb => "VERB",
            Self::Infinitive => "INFN",
            Self::FullParticiple => "PRTF",
            Self::ShortParticiple => "PRTS",
            Self::Gerund => "GRND",
            Self::Numeral => "NUMR",
            Self::Adverb => "ADVB",
            Self::Pronoun => "NPRO",
            Self::Predicative => "PRED",
            Self::Preposition => "PREP",
            Self::Conjunction => "CONJ",
            Self::Particle => "PRCL",
            Self::Interjection => "INTJ",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::FullAdjective => "adjective",
            Self::ShortAdjective => "short adjective",
            Self::Comparative => "comparative",
            Self::Verb => "verb",
            Self::Infinitive => "infinitive",
            Self::FullParticiple => "participle",
            Self::ShortParticiple => "short participle",
            Self::Gerund => "gerund",
            Self::Numeral => "numeral",
            Self::Adverb => "adverb",
            Self::Pronoun => "pronoun",
            Self::Predicative => "predicative",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Particle => "particle",
            Self::Interjection => "interjection",
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|pos| pos.code() == code)
            .ok_or_else(|| format!("unknown part-of-speech tag '{s}'"))
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
