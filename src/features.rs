//! Word-feature lookup used by conditioned rules.
//!
//! Rule conditions exclude a rule when the governing word (the pair's first
//! word) carries a given grammatical feature value, e.g. a case or number.
//! Where those values come from is the caller's business (the surrounding
//! application keeps them in its sentence matrix); the engine only sees
//! this trait.

use std::collections::BTreeMap;

/// Grammatical feature values of one word, keyed by feature name
/// ("case", "number", ...). Values are the same strings rule conditions
/// compare against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFeatures {
    values: BTreeMap<String, String>,
}

impl WordFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, feature: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(feature.into(), value.into());
        self
    }

    pub fn get(&self, feature: &str) -> Option<&str> {
        self.values.get(feature).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Source of per-word features for one sentence.
///
/// Implementations must be total: an out-of-range or unknown position yields
/// neutral empty features, never an error. The engine consults this only
/// while evaluating a rule that declares conditions.
pub trait FeatureLookup {
    /// Features of the word at `position` (0-based index into the split
    /// sentence; the pipeline passes the pair's first-word position).
    fn features(&self, position: usize) -> WordFeatures;
}

/// Lookup that knows nothing. Conditioned rules are skipped under it
/// (skip-on-ambiguity), unconditioned rules are unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeatures;

impl FeatureLookup for NoFeatures {
    fn features(&self, _position: usize) -> WordFeatures {
        WordFeatures::default()
    }
}

/// Per-position features supplied up front by the caller.
#[derive(Debug, Clone, Default)]
pub struct SentenceFeatures {
    words: Vec<WordFeatures>,
}

impl SentenceFeatures {
    pub fn new(words: Vec<WordFeatures>) -> Self {
        Self { words }
    }

    /// Set features for `position`, growing the sentence with neutral
    /// entries as needed.
    pub fn set(&mut self, position: usize, features: WordFeatures) {
        if self.words.len() <= position {
            self.words.resize(position + 1, WordFeatures::default());
        }
        self.words[position] = features;
    }
}

impl FeatureLookup for SentenceFeatures {
    fn features(&self, position: usize) -> WordFeatures {
        self.words.get(position).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_is_neutral() {
        let feats = SentenceFeatures::new(vec![WordFeatures::new().with("case", "1")]);
        assert_eq!(feats.features(0).get("case"), Some("1"));
        assert!(feats.features(5).is_empty());
    }

    #[test]
    fn set_grows_sentence() {
        let mut feats = SentenceFeatures::default();
        feats.set(2, WordFeatures::new().with("number", "2"));
        assert!(feats.features(0).is_empty());
        assert_eq!(feats.features(2).get("number"), Some("2"));
    }
}
