//! The four-stage rule application pipeline.
//!
//! Per word pair, each rule runs through end-match → end-replacement →
//! start-match → start-replacement (with the condition check folded into the
//! last stage). Any stage that fails advances to the next rule; the first
//! rule that clears all four commits its rewrite and stops the search for
//! that pair. Stage results accumulate in a `PairContext` built fresh per
//! rule attempt; in particular the paired-index value is only valid within
//! one attempt and never outlives it.

use tracing::debug;

use crate::features::FeatureLookup;
use crate::rules::{GroupRegistry, Replacement, Rule, RuleSet};

use super::resolver::{PatternMatch, Resolver};
use super::ChangeRecord;

/// What to do with a matched boundary text, sentinels already resolved.
enum Action {
    Keep,
    Delete,
    Text(String),
}

/// Working state of one successful rule attempt against one pair.
struct PairContext<'r> {
    rule: &'r Rule,
    end: PatternMatch,
    end_action: Action,
    start: PatternMatch,
    start_action: Action,
    fuse: bool,
}

pub(crate) struct Pipeline<'a> {
    resolver: Resolver<'a>,
    rules: &'a RuleSet,
    log_rules: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(registry: &'a GroupRegistry, rules: &'a RuleSet, log_rules: bool) -> Self {
        Self {
            resolver: Resolver::new(registry),
            rules,
            log_rules,
        }
    }

    /// Try every rule in registration order against the pair at `pos`;
    /// commit the first that clears all four stages and return its change
    /// record.
    ///
    /// When no rule fires the pair is left as-is except for its separating
    /// space: spacing is embedded in the word slots during rewriting, so an
    /// untouched second word must still carry the boundary space into the
    /// final concatenation.
    pub fn run_pair(
        &self,
        words: &mut [String],
        pos: usize,
        features: &dyn FeatureLookup,
    ) -> Option<ChangeRecord> {
        for rule in self.rules.rules() {
            let Some(ctx) = self.try_rule(rule, &words[pos], &words[pos + 1], pos, features)
            else {
                continue;
            };
            return Some(commit(words, pos, ctx));
        }

        words[pos + 1].insert(0, ' ');
        None
    }

    fn try_rule(
        &self,
        rule: &'a Rule,
        first: &str,
        second: &str,
        pos: usize,
        features: &dyn FeatureLookup,
    ) -> Option<PairContext<'a>> {
        let paired = rule.conditions.paired_index;

        // Stage 1: end match. Paired mode is decided before matching since
        // it controls whether the alternative's index is carried forward.
        let end = self.resolver.ends_with(first, &rule.end, paired)?;

        // Stage 2: end replacement, resolved against the carried index.
        let end_action = self.resolve_action(&rule.end_replacement, paired, end.index)?;

        // Stage 3: start match.
        let start = self.resolver.starts_with(second, &rule.start, paired)?;

        // Stage 4: start replacement, then conditions.
        let start_action =
            self.resolve_action(&rule.start_replacement.action, paired, start.index)?;

        if !self.conditions_allow(rule, pos, features) {
            if self.log_rules {
                debug!(rule = %rule.kind, position = pos, "rejected by condition");
            }
            return None;
        }

        Some(PairContext {
            rule,
            end,
            end_action,
            start,
            start_action,
            fuse: rule.start_replacement.fuse,
        })
    }

    fn resolve_action(
        &self,
        replacement: &Replacement,
        paired: bool,
        index: Option<usize>,
    ) -> Option<Action> {
        match replacement {
            Replacement::None => None,
            Replacement::Keep => Some(Action::Keep),
            Replacement::Delete => Some(Action::Delete),
            other => self
                .resolver
                .select_replacement(other, paired, index)
                .map(Action::Text),
        }
    }

    /// Evaluate feature exclusions against the governing (first) word.
    ///
    /// Skip-on-ambiguity: a condition whose feature value cannot be resolved
    /// rejects the rule instead of silently accepting it. This is a
    /// deliberate policy choice; the source application was inconsistent
    /// here.
    fn conditions_allow(&self, rule: &Rule, pos: usize, features: &dyn FeatureLookup) -> bool {
        if rule.conditions.excludes.is_empty() {
            return true;
        }
        let word = features.features(pos);
        rule.conditions
            .excludes
            .iter()
            .all(|ex| match word.get(&ex.feature) {
                Some(value) => value != ex.value,
                None => false,
            })
    }
}

/// Apply the rewrite to the word slots and produce the change record.
fn commit(words: &mut [String], pos: usize, ctx: PairContext<'_>) -> ChangeRecord {
    let first = &words[pos];
    let second = &words[pos + 1];

    // Matched texts are literal prefixes/suffixes of the slots, so byte
    // slicing by their lengths stays on char boundaries.
    let new_first = match &ctx.end_action {
        Action::Keep => first.clone(),
        Action::Delete => first[..first.len() - ctx.end.text.len()].to_string(),
        Action::Text(t) => format!("{}{}", &first[..first.len() - ctx.end.text.len()], t),
    };

    let join = if ctx.fuse { "" } else { " " };
    let tail = &second[ctx.start.text.len()..];
    let new_second = match &ctx.start_action {
        Action::Keep => format!("{join}{second}"),
        Action::Delete => format!("{join}{tail}"),
        Action::Text(t) => format!("{join}{t}{tail}"),
    };

    // First slots of later pairs may already carry their embedded boundary
    // space; trim it out of the audit text.
    let record = ChangeRecord {
        position: pos,
        before: format!("{} {}", first.trim_start(), second),
        after: format!("{}{}", new_first.trim_start(), new_second),
        rule: ctx.rule.kind.clone(),
    };

    words[pos] = new_first;
    words[pos + 1] = new_second;
    record
}
