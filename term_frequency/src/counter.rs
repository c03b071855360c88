use std::fmt::Display;

use log::debug;

use crate::config::*;
use crate::normalize::{normalize_value, tokenize};
use crate::stopwords::StopwordSet;

/// Counts the unigrams and the bigrams of a batch of responses.
///
/// Each response is normalized and tokenized separately, so that a bigram
/// never joins the last word of one response with the first word of the next.
/// Stopwords are dropped from the unigrams only: bigrams are formed from every
/// pair of adjacent tokens, since a phrase such as "plano de acao" still means
/// something as a whole.
///
/// Responses that are not strings (numbers, dates) are counted through their
/// textual representation.
///
/// Returns `VocabularyExhausted` when no unigram survives the stopword filter.
pub fn count_terms<S: Display>(
    responses: &[S],
    stopwords: &StopwordSet,
) -> Result<RawCounts, FrequencyError> {
    let mut counts = RawCounts::default();
    for response in responses.iter() {
        let normalized = normalize_value(response);
        let tokens = tokenize(&normalized);
        for token in tokens.iter() {
            if !stopwords.contains(token) {
                counts.add(token.to_string());
            }
        }
        for pair in tokens.windows(2) {
            counts.add(format!("{}{}{}", pair[0], BIGRAM_SEPARATOR, pair[1]));
        }
    }
    debug!(
        "count_terms: {} responses, {} unigrams, {} bigrams",
        responses.len(),
        counts.unigrams.len(),
        counts.bigrams.len()
    );
    if counts.unigrams.is_empty() {
        return Err(FrequencyError::VocabularyExhausted);
    }
    Ok(counts)
}
