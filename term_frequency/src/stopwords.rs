//! Stopword filtering
//!
//! The exclusion vocabulary is built once, then passed by reference to every
//! counting call. All the entries are normalized with the same function as the
//! responses, so that "não" in the list still matches "nao" in a text.

use std::collections::HashSet;

use log::debug;
use stop_words::{get, LANGUAGE};

use crate::normalize::{normalize_text, tokenize};

/// High-frequency Portuguese function words. Without them, articles and
/// prepositions would be the largest words of every cloud.
pub const PORTUGUESE_EXTRA: &[&str] = &[
    "de", "a", "o", "que", "e", "do", "da", "em", "um", "para", "é", "com", "não", "uma", "os",
    "no", "se", "na", "por", "mais", "as", "dos", "como", "mas", "ao", "ele", "das", "tem", "à",
    "seu", "sua", "ou", "ser", "quando", "muito", "nos", "já", "está", "eu", "também", "só",
    "pelo", "pela", "até", "isso", "ela", "entre", "depois", "sem", "mesmo", "aos", "ter", "seus",
    "quem", "nas", "me", "esse", "eles", "estão", "você", "tinha", "foram", "essa", "num", "nem",
    "suas", "meu", "às", "minha", "têm", "numa", "pelos", "elas", "havia", "seja", "qual", "será",
    "nós", "tenho", "lhe", "deles", "essas", "esses", "pelas", "este", "fosse", "dele", "tu", "te",
    "vocês", "vos", "lhes", "meus", "minhas", "teu", "tua", "teus", "tuas", "nosso", "nossa",
    "nossos", "nossas", "ok", "foi",
];

/// An immutable set of normalized stopwords.
///
/// Every member is a single token: entries such as "aren't" are stored as the
/// tokens the counter would produce for them ("aren", "t").
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The generic default list plus the Portuguese function words.
    pub fn default_portuguese() -> StopwordSet {
        StopwordSetBuilder::new()
            .with_generic_defaults()
            .with_words(PORTUGUESE_EXTRA)
            .build()
    }

    /// A set with no stopword at all.
    pub fn empty() -> StopwordSet {
        StopwordSet::default()
    }

    /// A set made only of the given words.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> StopwordSet {
        StopwordSetBuilder::new().with_words(words).build()
    }

    /// Checks a token that has already been normalized.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }
}

/// Assembles a `StopwordSet` from several lists.
#[derive(Debug, Clone, Default)]
pub struct StopwordSetBuilder {
    words: HashSet<String>,
}

impl StopwordSetBuilder {
    pub fn new() -> StopwordSetBuilder {
        StopwordSetBuilder::default()
    }

    /// Adds the generic list of ultra-common words used to declutter clouds:
    /// the short NLTK English list of function words.
    pub fn with_generic_defaults(self) -> StopwordSetBuilder {
        let generic: Vec<String> = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_string())
            .collect();
        debug!("with_generic_defaults: {} words", generic.len());
        self.with_words(&generic)
    }

    pub fn with_words<S: AsRef<str>>(mut self, words: &[S]) -> StopwordSetBuilder {
        for w in words {
            let normalized = normalize_text(w.as_ref());
            for token in tokenize(&normalized) {
                self.words.insert(token.to_string());
            }
        }
        self
    }

    pub fn build(self) -> StopwordSet {
        debug!("StopwordSetBuilder::build: {} stopwords", self.words.len());
        StopwordSet { words: self.words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_normalized() {
        let sw = StopwordSet::from_list(&["Não", "também", "À"]);
        assert!(sw.contains("nao"));
        assert!(sw.contains("tambem"));
        assert!(sw.contains("a"));
        assert!(!sw.contains("não"));
        assert_eq!(sw.len(), 3);
    }

    #[test]
    fn multi_token_entries_are_split() {
        let sw = StopwordSet::from_list(&["aren't", "  "]);
        assert!(sw.contains("aren"));
        assert!(sw.contains("t"));
        assert!(!sw.contains("aren't"));
        assert_eq!(sw.len(), 2);
    }

    #[test]
    fn default_set_contains_both_lists() {
        let sw = StopwordSet::default_portuguese();
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
        assert!(sw.contains("nao"));
        assert!(sw.contains("voces"));
        assert!(sw.contains("ok"));
        assert!(!sw.contains("aprendizados"));
        assert!(sw.len() > PORTUGUESE_EXTRA.len());
    }

    #[test]
    fn generic_defaults_keep_content_words() {
        let sw = StopwordSet::default_portuguese();
        // "area" is also "área" once normalized.
        for word in ["area", "value", "best", "results", "present", "world"] {
            assert!(!sw.contains(word), "{:?}", word);
        }
        let generic = StopwordSetBuilder::new().with_generic_defaults().build();
        assert!(generic.len() < 200, "{} generic stopwords", generic.len());
    }

    #[test]
    fn empty_set() {
        let sw = StopwordSet::empty();
        assert!(sw.is_empty());
        assert!(!sw.contains("de"));
    }
}
