// ********* Input data structures ***********

use std::collections::HashMap;
use std::error::Error;
use std::fmt::Display;

/// The separator placed between the two words of a bigram.
pub const BIGRAM_SEPARATOR: char = ' ';

/// The default number of terms kept when ranking a mapping for display.
/// Word clouds become unreadable well before this point.
pub const DEFAULT_MAX_TERMS: usize = 50;

/// The kind of a term, as observed by the counter.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum TermKind {
    /// A single normalized word that is not a stopword.
    Unigram,
    /// Two adjacent normalized words of the same response.
    Bigram,
}

impl TermKind {
    pub fn of(term: &str) -> TermKind {
        if term.contains(BIGRAM_SEPARATOR) {
            TermKind::Bigram
        } else {
            TermKind::Unigram
        }
    }
}

// ******** Output data structures *********

/// The final term -> count mapping, as handed to a renderer.
///
/// Keys are unique, counts are always strictly positive and there is no
/// ordering. An empty mapping means that there was nothing worth rendering.
pub type FrequencyMapping = HashMap<String, u64>;

/// The counts produced by the counter, before disambiguation.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RawCounts {
    pub unigrams: HashMap<String, u64>,
    pub bigrams: HashMap<String, u64>,
}

impl RawCounts {
    /// Records one occurrence of a term in the table of its kind.
    pub fn add(&mut self, term: String) {
        let table = match TermKind::of(&term) {
            TermKind::Unigram => &mut self.unigrams,
            TermKind::Bigram => &mut self.bigrams,
        };
        *table.entry(term).or_insert(0) += 1;
    }
}

/// A term with its final count, as used for display.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RankedTerm {
    pub term: String,
    pub count: u64,
}

/// Errors raised inside the counting stage.
///
/// None of them escapes `term_frequencies`: they are converted to an empty
/// mapping there.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum FrequencyError {
    /// Every token was a stopword, or there was no token at all.
    VocabularyExhausted,
}

impl Error for FrequencyError {}

impl Display for FrequencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrequencyError::VocabularyExhausted => {
                write!(f, "empty vocabulary: only stopwords in the responses")
            }
        }
    }
}
