//! Sandhi orchestration: sentence splitting, pairwise rule application,
//! reassembly, and the change log.
//!
//! One `apply` invocation owns its word sequence and change log exclusively;
//! the rule data is read-only for the engine's lifetime, so a shared engine
//! is safe to use from multiple sessions at once. Pairs are processed left
//! to right in a single pass: a word rewritten as the second member of one
//! pair participates in the next pair in its rewritten form, and earlier
//! pairs are never re-scanned.

mod pipeline;
mod resolver;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{debug, debug_span};

use crate::features::{FeatureLookup, NoFeatures};
use crate::rules::RuleFile;

use pipeline::Pipeline;

/// One committed substitution in the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Index of the pair's first word in the split sentence.
    pub position: usize,
    /// The two words as they stood before the rewrite.
    pub before: String,
    /// The rewritten pair, spacing as it will appear in the result.
    pub after: String,
    /// `kind` of the rule that fired.
    pub rule: String,
}

/// Engine output: transformed sentence plus the ordered change log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SandhiOutput {
    pub text: String,
    pub changes: Vec<ChangeRecord>,
}

/// Construction-time options, replacing the source application's
/// session-global flags.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Memoize `apply` results by exact sentence text.
    pub cache: bool,
    /// Emit per-rule debug events while matching (needs the `trace` feature
    /// and an installed subscriber to be visible).
    pub log_rules: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache: true,
            log_rules: false,
        }
    }
}

/// The sandhi engine: immutable rule data plus an optional result cache.
pub struct SandhiEngine {
    rules: RuleFile,
    config: EngineConfig,
    cache: Mutex<HashMap<String, SandhiOutput>>,
}

impl SandhiEngine {
    pub fn new(rules: RuleFile) -> Self {
        Self::with_config(rules, EngineConfig::default())
    }

    pub fn with_config(rules: RuleFile, config: EngineConfig) -> Self {
        Self {
            rules,
            config,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Engine over the embedded default rule set.
    pub fn with_default_rules() -> Self {
        Self::new(RuleFile::default())
    }

    pub fn rules(&self) -> &RuleFile {
        &self.rules
    }

    /// Replace the rule data and invalidate the result cache.
    pub fn reload(&mut self, rules: RuleFile) {
        self.rules = rules;
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }

    /// Apply sandhi to a sentence. Words carry no grammatical features, so
    /// conditioned rules are skipped. Results are cached by sentence text
    /// when the cache is enabled.
    pub fn apply(&self, sentence: &str) -> SandhiOutput {
        if self.config.cache {
            if let Ok(cache) = self.cache.lock() {
                if let Some(hit) = cache.get(sentence) {
                    return hit.clone();
                }
            }
        }

        let out = self.apply_with_features(sentence, &NoFeatures);

        if self.config.cache {
            if let Ok(mut cache) = self.cache.lock() {
                cache.insert(sentence.to_string(), out.clone());
            }
        }
        out
    }

    /// Apply sandhi with caller-supplied word features for condition
    /// evaluation. Never cached, since features are not part of the cache
    /// key.
    pub fn apply_with_features(
        &self,
        sentence: &str,
        features: &dyn FeatureLookup,
    ) -> SandhiOutput {
        let mut words: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return SandhiOutput::default();
        }
        let _span = debug_span!("apply", word_count = words.len()).entered();

        let pipeline = Pipeline::new(&self.rules.groups, &self.rules.rules, self.config.log_rules);
        let mut changes = Vec::new();

        for pos in 0..words.len() - 1 {
            if let Some(record) = pipeline.run_pair(&mut words, pos, features) {
                debug!(rule = %record.rule, position = pos, "rule fired");
                changes.push(record);
            }
        }

        // Spacing is already embedded in each slot (join decisions for
        // rewritten pairs, the plain boundary space for untouched ones), so
        // reassembly is direct concatenation of the non-empty slots.
        let text: String = words
            .iter()
            .filter(|w| !w.is_empty())
            .map(String::as_str)
            .collect();

        SandhiOutput { text, changes }
    }
}
