use std::collections::HashMap;

use log::debug;

use crate::config::*;

/// Removes the double counting between phrases and their words.
///
/// Every occurrence of a bigram also contributed one occurrence to each of its
/// two words. Those occurrences are taken back from the unigrams, and the
/// words that have nothing left are dropped: their whole weight belongs to
/// the phrases they appear in. Bigrams keep their counts unchanged.
///
/// A word may be decremented by several bigrams. The order in which bigrams
/// are processed does not change the result.
pub fn disambiguate(raw: &RawCounts) -> FrequencyMapping {
    let mut adjusted: HashMap<&str, i64> = raw
        .unigrams
        .iter()
        .map(|(t, c)| (t.as_str(), *c as i64))
        .collect();

    for (bigram, count) in raw.bigrams.iter() {
        for word in bigram.split(BIGRAM_SEPARATOR) {
            if let Some(c) = adjusted.get_mut(word) {
                *c -= *count as i64;
            }
        }
    }

    let mut res: FrequencyMapping = raw.bigrams.clone();
    for (word, count) in adjusted.into_iter() {
        if count > 0 {
            res.insert(word.to_string(), count as u64);
        } else {
            debug!("disambiguate: {:?} absorbed by phrases ({})", word, count);
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(unigrams: &[(&str, u64)], bigrams: &[(&str, u64)]) -> RawCounts {
        RawCounts {
            unigrams: unigrams.iter().map(|(t, c)| (t.to_string(), *c)).collect(),
            bigrams: bigrams.iter().map(|(t, c)| (t.to_string(), *c)).collect(),
        }
    }

    fn mapping(entries: &[(&str, u64)]) -> FrequencyMapping {
        entries.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn no_bigrams_is_identity() {
        let r = raw(&[("equipe", 3), ("entregas", 1)], &[]);
        assert_eq!(disambiguate(&r), r.unigrams);
    }

    #[test]
    fn word_absorbed_by_several_phrases() {
        let r = raw(
            &[("novos", 2), ("aprendizados", 1), ("desafios", 1)],
            &[("novos aprendizados", 1), ("novos desafios", 1)],
        );
        assert_eq!(
            disambiguate(&r),
            mapping(&[("novos aprendizados", 1), ("novos desafios", 1)])
        );
    }

    #[test]
    fn negative_counts_are_dropped() {
        // "de" is a stopword and absent from the unigrams, "acao" goes negative.
        let r = raw(
            &[("plano", 1), ("acao", 1)],
            &[("plano de", 1), ("de acao", 1), ("acao acao", 1)],
        );
        let res = disambiguate(&r);
        assert_eq!(
            res,
            mapping(&[("plano de", 1), ("de acao", 1), ("acao acao", 1)])
        );
    }

    #[test]
    fn repeated_word_bigram_subtracts_twice() {
        let r = raw(&[("muito", 5)], &[("muito muito", 2)]);
        assert_eq!(
            disambiguate(&r),
            mapping(&[("muito muito", 2), ("muito", 1)])
        );
    }

    #[test]
    fn empty_input() {
        assert!(disambiguate(&RawCounts::default()).is_empty());
    }
}
