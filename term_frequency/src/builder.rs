use std::fmt::Display;

pub use crate::config::*;
use crate::stopwords::StopwordSet;

/// Collects the responses to one question.
///
/// The builder accepts any displayable value: spreadsheet readers do not
/// always hand over strings. Blank responses are skipped.
///
/// ```
/// use term_frequency::builder::Builder;
/// use term_frequency::{StopwordSet, PORTUGUESE_EXTRA};
///
/// let stopwords = StopwordSet::from_list(PORTUGUESE_EXTRA);
/// let mut builder = Builder::new(&stopwords);
/// builder.add_response("Entregas no prazo");
/// builder.add_value(&2025);
/// builder.add_response("   ");
///
/// assert_eq!(builder.len(), 2);
/// let freqs = builder.frequencies();
/// assert_eq!(freqs.get("entregas"), None);
/// assert_eq!(freqs.get("2025"), Some(&1));
/// ```
pub struct Builder<'a> {
    pub(crate) _stopwords: &'a StopwordSet,
    pub(crate) _responses: Vec<String>,
}

impl<'a> Builder<'a> {
    pub fn new(stopwords: &'a StopwordSet) -> Builder<'a> {
        Builder {
            _stopwords: stopwords,
            _responses: Vec::new(),
        }
    }

    /// Adds one free-text answer.
    pub fn add_response(&mut self, response: &str) {
        if !response.trim().is_empty() {
            self._responses.push(response.to_string());
        }
    }

    /// Adds a cell that may not be a string. It is coerced through `Display`.
    pub fn add_value<T: Display + ?Sized>(&mut self, value: &T) {
        self.add_response(&value.to_string())
    }

    pub fn len(&self) -> usize {
        self._responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self._responses.is_empty()
    }

    /// The responses collected so far, in insertion order.
    pub fn responses(&self) -> &[String] {
        &self._responses
    }

    pub fn frequencies(&self) -> FrequencyMapping {
        crate::term_frequencies(self._responses.as_slice(), self._stopwords)
    }
}
