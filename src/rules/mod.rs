//! Sandhi rule data: pattern groups, rules, and their JSON wire format.
//!
//! `GroupRegistry` maps group names to ordered lists of surface alternatives
//! (e.g. "vowels", "voiced"). `RuleSet` holds the rules in load order, which
//! is also their match priority: the pipeline takes the first rule that
//! clears all four stages, not the best one. Everything here is immutable
//! after construction; malformed data is rejected at load, never at match
//! time.

mod config;

pub use config::{RuleFile, DEFAULT_RULES_JSON};

use std::collections::BTreeMap;

/// Errors raised while loading or decoding rule data.
///
/// These are configuration errors and fatal to engine construction.
/// Pattern-resolution misses during matching are ordinary control flow and
/// never surface here.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(String),

    #[error("group {name:?}: {reason}")]
    InvalidGroup { name: String, reason: String },

    #[error("rule #{index} ({kind:?}): {reason}")]
    InvalidRule {
        index: usize,
        kind: String,
        reason: String,
    },
}

/// A match pattern for one side of a word boundary.
///
/// Side markers (`-`) and the group sigil (`*`) from the wire format are
/// stripped during decoding; alternatives stored here compare directly
/// against word prefixes/suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// The rule does not constrain this side. A rule with an empty pattern
    /// can never fire on that side; the pipeline skips it.
    None,
    Literal(String),
    /// Ordered alternatives. Order is significant when the rule runs in
    /// paired-index mode: the Nth pattern corresponds to the Nth replacement.
    Alternatives(Vec<String>),
    /// Reference to a named group in the registry.
    Group(String),
}

impl Pattern {
    pub fn is_none(&self) -> bool {
        matches!(self, Pattern::None)
    }
}

/// Replacement spec for a matched pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// No replacement given; the rule cannot commit.
    None,
    /// `"_"` on the wire: leave the matched text unchanged.
    Keep,
    /// `"x"` on the wire: drop the matched text entirely.
    Delete,
    Literal(String),
    /// Ordered alternatives, resolved by paired index or as a singleton.
    Alternatives(Vec<String>),
    Group(String),
}

impl Replacement {
    pub fn is_none(&self) -> bool {
        matches!(self, Replacement::None)
    }
}

/// Replacement for the second word's start, carrying the join decision.
///
/// A leading `+` on the wire means the pair is fused with no intervening
/// space; without it the rewritten words stay separated by one space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartReplacement {
    pub fuse: bool,
    pub action: Replacement,
}

/// A single feature exclusion: the rule must not fire when the governing
/// word's feature equals `value` (wire format `"case": "!8"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclude {
    pub feature: String,
    pub value: String,
}

/// Optional per-rule conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditions {
    /// When set, the end pattern and end replacement are parallel lists and
    /// the Nth matched alternative selects the Nth replacement.
    pub paired_index: bool,
    pub excludes: Vec<Exclude>,
}

/// One sandhi rule, fully decoded. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Rule identifier reported in change records (e.g. "visarga_ah_voiced").
    pub kind: String,
    pub end: Pattern,
    pub start: Pattern,
    pub end_replacement: Replacement,
    pub start_replacement: StartReplacement,
    pub conditions: Conditions,
}

/// Named pattern groups, shared by reference across rules.
///
/// Alternatives keep their load order; the resolver sorts by length on the
/// fly so that longest-match preference never disturbs paired indices.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: BTreeMap<String, Vec<String>>,
}

impl GroupRegistry {
    /// Build a registry from name → alternatives, stripping side markers.
    /// Fails on empty group names or alternatives that are empty after
    /// marker stripping.
    pub fn new(raw: BTreeMap<String, Vec<String>>) -> Result<Self, RuleError> {
        let mut groups = BTreeMap::new();
        for (name, alts) in raw {
            if name.is_empty() {
                return Err(RuleError::InvalidGroup {
                    name,
                    reason: "empty group name".into(),
                });
            }
            let mut stripped = Vec::with_capacity(alts.len());
            for alt in alts {
                let s = strip_markers(&alt);
                if s.is_empty() {
                    return Err(RuleError::InvalidGroup {
                        name,
                        reason: format!("alternative {alt:?} is empty after marker stripping"),
                    });
                }
                stripped.push(s.to_string());
            }
            groups.insert(name, stripped);
        }
        Ok(Self { groups })
    }

    /// Ordered alternatives for `name`, or `None` if the group is unknown.
    pub fn resolve(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group names in sorted order (diagnostics).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

/// Ordered rule collection. Registration order is match priority.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Strip the `-` side markers a pattern string may carry on either end.
pub(crate) fn strip_markers(s: &str) -> &str {
    s.trim_matches('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_markers_both_sides() {
        assert_eq!(strip_markers("-aḥ"), "aḥ");
        assert_eq!(strip_markers("a-"), "a");
        assert_eq!(strip_markers("dž"), "dž");
        assert_eq!(strip_markers("-"), "");
    }

    #[test]
    fn registry_resolves_in_load_order() {
        let mut raw = BTreeMap::new();
        raw.insert("vowels".to_string(), vec!["a-".into(), "á-".into()]);
        let reg = GroupRegistry::new(raw).unwrap();
        assert_eq!(reg.resolve("vowels").unwrap(), &["a", "á"]);
        assert!(reg.resolve("missing").is_none());
    }

    #[test]
    fn registry_rejects_empty_alternative() {
        let mut raw = BTreeMap::new();
        raw.insert("bad".to_string(), vec!["-".into()]);
        let err = GroupRegistry::new(raw).unwrap_err();
        assert!(matches!(err, RuleError::InvalidGroup { .. }));
    }
}
