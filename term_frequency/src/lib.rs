/*!
Term frequencies for word clouds built from free-text survey answers.

The pipeline has three stages:
- every response is normalized (lowercased, accents removed),
- unigrams and bigrams are counted, with stopwords removed from the unigrams,
- bigram counts are subtracted from the words they are made of, so that a
  phrase answered many times does not also show up as two large single words.

```
use term_frequency::{term_frequencies, StopwordSet};

let stopwords = StopwordSet::default_portuguese();
let freqs = term_frequencies(
    &["Novos aprendizados", "novos aprendizados", "novos"],
    &stopwords,
);
assert_eq!(freqs.get("novos aprendizados"), Some(&2));
assert_eq!(freqs.get("novos"), Some(&1));
assert_eq!(freqs.get("aprendizados"), None);
```

See the [manual](manual/index.html) for the command line tabulator.
*/
mod config;
pub mod builder;
pub mod counter;
pub mod disambiguate;
pub mod manual;
pub mod normalize;
pub mod stopwords;

use std::fmt::Display;

use log::{debug, info};

pub use crate::config::*;
pub use crate::counter::count_terms;
pub use crate::disambiguate::disambiguate;
pub use crate::normalize::{normalize_text, normalize_value};
pub use crate::stopwords::{StopwordSet, StopwordSetBuilder, PORTUGUESE_EXTRA};

/// Computes the final term frequencies of a batch of responses.
///
/// Arguments:
/// * `responses` the answers to one question, in any order. Empty strings are
/// allowed and contribute nothing. Other values are coerced through `Display`.
/// * `stopwords` the words that may not appear as single terms.
///
/// An empty mapping is returned when there is nothing to show (no response,
/// or only stopwords). This is not an error.
pub fn term_frequencies<S: Display>(
    responses: &[S],
    stopwords: &StopwordSet,
) -> FrequencyMapping {
    info!("term_frequencies: processing {} responses", responses.len());
    match count_terms(responses, stopwords) {
        Ok(raw) => {
            let res = disambiguate(&raw);
            debug!(
                "term_frequencies: {} raw terms -> {} terms",
                raw.unigrams.len() + raw.bigrams.len(),
                res.len()
            );
            res
        }
        Err(FrequencyError::VocabularyExhausted) => {
            info!("term_frequencies: no term left after stopword filtering");
            FrequencyMapping::new()
        }
    }
}

/// Sorts a mapping for display: the most frequent terms first, ties ordered
/// alphabetically. At most `max_terms` terms are kept.
pub fn rank_terms(freqs: &FrequencyMapping, max_terms: usize) -> Vec<RankedTerm> {
    let mut ranked: Vec<RankedTerm> = freqs
        .iter()
        .map(|(term, count)| RankedTerm {
            term: term.clone(),
            count: *count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    ranked.truncate(max_terms);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sw() -> StopwordSet {
        StopwordSet::from_list(PORTUGUESE_EXTRA)
    }

    fn mapping(entries: &[(&str, u64)]) -> FrequencyMapping {
        entries.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn every_stopword_alone_is_empty() {
        init();
        let list = StopwordSet::default_portuguese();
        for s in list.iter() {
            let batch = vec![s.clone(), format!("{} {}", s, s)];
            assert!(
                term_frequencies(batch.as_slice(), &list).is_empty(),
                "stopword {:?}",
                s
            );
        }
        for s in stopwords::PORTUGUESE_EXTRA {
            assert!(term_frequencies(&[*s], &list).is_empty(), "{:?}", s);
        }
    }

    #[test]
    fn no_bigram_keeps_unigrams() {
        init();
        let stopwords = sw();
        let batch = ["Equipe", "entregas", "equipe"];
        let raw = count_terms(&batch, &stopwords).unwrap();
        assert!(raw.bigrams.is_empty());
        let res = term_frequencies(&batch, &stopwords);
        assert_eq!(res, raw.unigrams);
        assert_eq!(res, mapping(&[("equipe", 2), ("entregas", 1)]));
    }

    #[test]
    fn phrase_absorption() {
        init();
        let res = term_frequencies(&["novos aprendizados", "novos aprendizados"], &sw());
        assert_eq!(res, mapping(&[("novos aprendizados", 2)]));
    }

    #[test]
    fn partial_absorption() {
        init();
        let res = term_frequencies(&["novos aprendizados", "novos desafios"], &sw());
        assert_eq!(
            res,
            mapping(&[("novos aprendizados", 1), ("novos desafios", 1)])
        );
    }

    #[test]
    fn surplus_unigram_survives() {
        init();
        let res = term_frequencies(
            &["novos aprendizados", "novos aprendizados", "novos"],
            &sw(),
        );
        assert_eq!(res, mapping(&[("novos aprendizados", 2), ("novos", 1)]));
    }

    #[test]
    fn accent_insensitive() {
        init();
        let stopwords = sw();
        assert_eq!(
            term_frequencies(&["Relatório"], &stopwords),
            term_frequencies(&["relatorio"], &stopwords)
        );
        assert_eq!(
            term_frequencies(&["Relatório"], &stopwords),
            mapping(&[("relatorio", 1)])
        );
    }

    #[test]
    fn empty_batch() {
        init();
        let empty: Vec<&str> = vec![];
        assert!(term_frequencies(empty.as_slice(), &sw()).is_empty());
        assert!(term_frequencies(empty.as_slice(), &StopwordSet::empty()).is_empty());
    }

    #[test]
    fn phrase_with_function_word() {
        init();
        let res = term_frequencies(&["Plano de ação", "plano de ação"], &sw());
        assert_eq!(res, mapping(&[("plano de", 2), ("de acao", 2)]));
    }

    #[test]
    fn stopword_phrases_need_a_content_word() {
        init();
        // Alone, a batch of function words has nothing to show.
        assert!(term_frequencies(&["foi o que"], &sw()).is_empty());
        // Once a content word is present, their bigrams are kept as well.
        let res = term_frequencies(&["foi o que", "equipe"], &sw());
        assert_eq!(res, mapping(&[("foi o", 1), ("o que", 1), ("equipe", 1)]));
    }

    #[test]
    fn ranking_order_and_truncation() {
        let freqs = mapping(&[("sede", 2), ("equipe", 5), ("entregas", 2), ("time", 1)]);
        let ranked = rank_terms(&freqs, 3);
        let terms: Vec<(&str, u64)> = ranked.iter().map(|r| (r.term.as_str(), r.count)).collect();
        assert_eq!(terms, vec![("equipe", 5), ("entregas", 2), ("sede", 2)]);
        assert!(rank_terms(&FrequencyMapping::new(), DEFAULT_MAX_TERMS).is_empty());
    }
}
