//! Pattern resolution against word boundaries.
//!
//! A pattern may be a literal, a list of alternatives, or a group reference;
//! the resolver expands it to its alternatives and matches against a word's
//! start or end, preferring the longest alternative on ties. In paired-index
//! mode it also reports which alternative matched, as an index into the
//! pattern's *original* load order: the replacement side of a paired rule is
//! resolved in a later pipeline stage and must line up by that index, so the
//! longest-first probe order never leaks into it.

use crate::rules::{GroupRegistry, Pattern, Replacement};

/// Successful boundary match.
pub(crate) struct PatternMatch {
    /// The matched surface text (marker-stripped alternative).
    pub text: String,
    /// Index of the matched alternative in the unsorted pattern list.
    /// Present only in paired-index mode; valid only for the current rule
    /// attempt.
    pub index: Option<usize>,
}

pub(crate) struct Resolver<'a> {
    registry: &'a GroupRegistry,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a GroupRegistry) -> Self {
        Self { registry }
    }

    /// Expand a pattern to its ordered alternatives. `None` for an
    /// unconstrained pattern or an unknown group reference; both mean the
    /// rule cannot match, not an error.
    fn alternatives(&self, pattern: &'a Pattern) -> Option<Vec<&'a str>> {
        match pattern {
            Pattern::None => None,
            Pattern::Literal(s) => Some(vec![s.as_str()]),
            Pattern::Alternatives(v) => Some(v.iter().map(String::as_str).collect()),
            Pattern::Group(name) => Some(
                self.registry
                    .resolve(name)?
                    .iter()
                    .map(String::as_str)
                    .collect(),
            ),
        }
    }

    /// Does `word` end with one of the pattern's alternatives?
    pub fn ends_with(&self, word: &str, pattern: &'a Pattern, paired: bool) -> Option<PatternMatch> {
        self.find(word, pattern, paired, |word, alt| word.ends_with(alt))
    }

    /// Does `word` start with one of the pattern's alternatives?
    pub fn starts_with(
        &self,
        word: &str,
        pattern: &'a Pattern,
        paired: bool,
    ) -> Option<PatternMatch> {
        self.find(word, pattern, paired, |word, alt| word.starts_with(alt))
    }

    fn find(
        &self,
        word: &str,
        pattern: &'a Pattern,
        paired: bool,
        test: impl Fn(&str, &str) -> bool,
    ) -> Option<PatternMatch> {
        let alts = self.alternatives(pattern)?;

        // Longest alternative first; the sort is stable, so equal lengths
        // keep their load order.
        let mut order: Vec<usize> = (0..alts.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(alts[i].chars().count()));

        for i in order {
            if test(word, alts[i]) {
                return Some(PatternMatch {
                    text: alts[i].to_string(),
                    index: paired.then_some(i),
                });
            }
        }
        None
    }

    /// Replacement-resolution mode: pick the replacement alternative that
    /// corresponds to an already-matched pattern alternative.
    ///
    /// In paired mode the carried `index` selects the alternative
    /// (out-of-range → no match, the rule is skipped). Outside paired mode
    /// only a single-alternative replacement resolves unambiguously.
    /// `Keep`/`Delete`/`None` never reach this point; the pipeline handles
    /// the sentinels directly.
    pub fn select_replacement(
        &self,
        replacement: &Replacement,
        paired: bool,
        index: Option<usize>,
    ) -> Option<String> {
        let alts: Vec<&str> = match replacement {
            Replacement::Literal(s) => vec![s.as_str()],
            Replacement::Alternatives(v) => v.iter().map(String::as_str).collect(),
            Replacement::Group(name) => self
                .registry
                .resolve(name)?
                .iter()
                .map(String::as_str)
                .collect(),
            _ => return None,
        };

        if paired {
            index.and_then(|i| alts.get(i)).map(|s| s.to_string())
        } else if alts.len() == 1 {
            Some(alts[0].to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GroupRegistry;
    use std::collections::BTreeMap;

    fn registry() -> GroupRegistry {
        let mut raw = BTreeMap::new();
        raw.insert(
            "vowels".to_string(),
            vec!["a-".into(), "ai-".into(), "á-".into()],
        );
        GroupRegistry::new(raw).unwrap()
    }

    #[test]
    fn literal_suffix_match() {
        let reg = registry();
        let r = Resolver::new(&reg);
        let m = r
            .ends_with("naraḥ", &Pattern::Literal("aḥ".into()), false)
            .unwrap();
        assert_eq!(m.text, "aḥ");
        assert!(m.index.is_none());
    }

    #[test]
    fn longest_alternative_wins() {
        let reg = registry();
        let r = Resolver::new(&reg);
        // "aiva" starts with both "a" and "ai"; the longer one must match.
        let m = r
            .starts_with("aiva", &Pattern::Group("vowels".into()), false)
            .unwrap();
        assert_eq!(m.text, "ai");
    }

    #[test]
    fn unknown_group_is_a_miss() {
        let reg = registry();
        let r = Resolver::new(&reg);
        assert!(r
            .starts_with("atra", &Pattern::Group("nope".into()), false)
            .is_none());
    }

    #[test]
    fn unconstrained_pattern_is_a_miss() {
        let reg = registry();
        let r = Resolver::new(&reg);
        assert!(r.ends_with("atra", &Pattern::None, false).is_none());
    }

    #[test]
    fn paired_index_counts_in_load_order() {
        let reg = registry();
        let r = Resolver::new(&reg);
        // Sorted probe order is ["ai", "a", "á"], but the reported index must
        // point into the original list.
        let pat = Pattern::Alternatives(vec!["k".into(), "ṭ".into(), "t".into(), "p".into()]);
        let m = r.ends_with("marut", &pat, true).unwrap();
        assert_eq!(m.text, "t");
        assert_eq!(m.index, Some(2));
    }

    #[test]
    fn select_replacement_by_pair_index() {
        let reg = registry();
        let r = Resolver::new(&reg);
        let repl = Replacement::Alternatives(vec!["g".into(), "ḍ".into(), "d".into(), "b".into()]);
        assert_eq!(r.select_replacement(&repl, true, Some(2)).unwrap(), "d");
        // Out-of-range index: no match, not an error.
        assert!(r.select_replacement(&repl, true, Some(9)).is_none());
        // Paired mode without a carried index cannot resolve.
        assert!(r.select_replacement(&repl, true, None).is_none());
    }

    #[test]
    fn select_replacement_singleton_without_pairing() {
        let reg = registry();
        let r = Resolver::new(&reg);
        assert_eq!(
            r.select_replacement(&Replacement::Literal("ó".into()), false, None)
                .unwrap(),
            "ó"
        );
        let multi = Replacement::Alternatives(vec!["g".into(), "d".into()]);
        assert!(r.select_replacement(&multi, false, None).is_none());
    }
}
