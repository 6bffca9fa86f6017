//! JSON wire format for rule/group data and its decoding.
//!
//! The document has two top-level members: `groups` (name → list of pattern
//! strings) and `rules`. Surface conventions come from the original CSV → JSON
//! pipeline: `-` marks the word side a pattern attaches to, `*name` references
//! a group, `"_"`/`"x"` are the keep/delete sentinels, and a leading `"+"` on
//! a start replacement fuses the pair without a space. All of that is decoded
//! here, once, into the typed `Pattern`/`Replacement` values; the engine never
//! re-parses magic strings.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::Deserialize;

use super::{
    strip_markers, Conditions, Exclude, GroupRegistry, Pattern, Replacement, Rule, RuleError,
    RuleSet, StartReplacement,
};

/// Classical external-sandhi rules in Czech-scientific romanization,
/// embedded as the default data set.
pub const DEFAULT_RULES_JSON: &str = include_str!("default_rules.json");

/// A decoded rule document: group registry plus ordered rule set.
#[derive(Debug, Clone)]
pub struct RuleFile {
    pub groups: GroupRegistry,
    pub rules: RuleSet,
}

impl RuleFile {
    /// Decode a JSON rule document. Malformed shape is a hard error.
    pub fn from_json(text: &str) -> Result<Self, RuleError> {
        let raw: RawFile =
            serde_json::from_str(text).map_err(|e| RuleError::Parse(e.to_string()))?;
        let groups = GroupRegistry::new(raw.groups)?;

        let mut rules = Vec::with_capacity(raw.rules.len());
        for (index, r) in raw.rules.into_iter().enumerate() {
            rules.push(decode_rule(index, r)?);
        }

        Ok(Self {
            groups,
            rules: RuleSet::new(rules),
        })
    }

    /// Load a rule document from disk.
    ///
    /// A missing file falls back to an empty document (the engine then
    /// passes every sentence through unchanged); a present-but-malformed
    /// file is a hard error.
    pub fn load(path: &Path) -> Result<Self, RuleError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::empty()),
            Err(e) => Err(RuleError::Io(e)),
        }
    }

    /// No groups, no rules.
    pub fn empty() -> Self {
        Self {
            groups: GroupRegistry::default(),
            rules: RuleSet::default(),
        }
    }
}

impl Default for RuleFile {
    /// The embedded default rule set. Validity is covered by tests, so a
    /// decode failure here is a build defect, not a runtime condition.
    fn default() -> Self {
        Self::from_json(DEFAULT_RULES_JSON).expect("embedded default rules must be valid")
    }
}

#[derive(Deserialize)]
struct RawFile {
    #[serde(default)]
    groups: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    rules: Vec<RawRule>,
}

#[derive(Deserialize)]
struct RawRule {
    #[serde(default)]
    kind: String,
    #[serde(default)]
    end: Option<RawPattern>,
    #[serde(default)]
    start: Option<RawPattern>,
    #[serde(default)]
    end_replacement: Option<RawPattern>,
    #[serde(default)]
    start_replacement: Option<RawPattern>,
    #[serde(default)]
    conditions: Option<RawConditions>,
}

/// `"-aḥ"` or `["-k", "-t", ...]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPattern {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
struct RawConditions {
    #[serde(default)]
    paired_index: bool,
    /// Remaining entries are feature exclusions, e.g. `"case": "!8"`.
    #[serde(flatten)]
    excludes: BTreeMap<String, String>,
}

fn decode_rule(index: usize, raw: RawRule) -> Result<Rule, RuleError> {
    let err = |reason: String| RuleError::InvalidRule {
        index,
        kind: raw.kind.clone(),
        reason,
    };

    let end = decode_pattern(raw.end.as_ref()).map_err(&err)?;
    let start = decode_pattern(raw.start.as_ref()).map_err(&err)?;
    let end_replacement = decode_replacement(raw.end_replacement.as_ref()).map_err(&err)?;
    let start_replacement =
        decode_start_replacement(raw.start_replacement.as_ref()).map_err(&err)?;
    let conditions = decode_conditions(raw.conditions).map_err(&err)?;

    Ok(Rule {
        kind: raw.kind,
        end,
        start,
        end_replacement,
        start_replacement,
        conditions,
    })
}

fn decode_pattern(raw: Option<&RawPattern>) -> Result<Pattern, String> {
    match raw {
        None => Ok(Pattern::None),
        Some(RawPattern::One(s)) => {
            let s = strip_markers(s);
            if s.is_empty() {
                Ok(Pattern::None)
            } else if let Some(name) = s.strip_prefix('*') {
                Ok(Pattern::Group(name.trim_matches('-').to_string()))
            } else {
                Ok(Pattern::Literal(s.to_string()))
            }
        }
        Some(RawPattern::Many(items)) => {
            if items.is_empty() {
                return Ok(Pattern::None);
            }
            Ok(Pattern::Alternatives(decode_alternatives(items)?))
        }
    }
}

fn decode_replacement(raw: Option<&RawPattern>) -> Result<Replacement, String> {
    match raw {
        None => Ok(Replacement::None),
        Some(RawPattern::One(s)) => decode_replacement_str(s),
        Some(RawPattern::Many(items)) => {
            if items.is_empty() {
                return Ok(Replacement::None);
            }
            Ok(Replacement::Alternatives(decode_alternatives(items)?))
        }
    }
}

fn decode_replacement_str(s: &str) -> Result<Replacement, String> {
    let s = strip_markers(s);
    match s {
        "" => Ok(Replacement::None),
        "_" => Ok(Replacement::Keep),
        "x" => Ok(Replacement::Delete),
        _ => {
            if let Some(name) = s.strip_prefix('*') {
                Ok(Replacement::Group(name.trim_matches('-').to_string()))
            } else {
                Ok(Replacement::Literal(s.to_string()))
            }
        }
    }
}

fn decode_start_replacement(raw: Option<&RawPattern>) -> Result<StartReplacement, String> {
    match raw {
        Some(RawPattern::One(s)) => {
            let stripped = strip_markers(s);
            if let Some(rest) = stripped.strip_prefix('+') {
                if rest.is_empty() {
                    return Err("start replacement is a bare \"+\"".to_string());
                }
                Ok(StartReplacement {
                    fuse: true,
                    action: decode_replacement_str(rest)?,
                })
            } else {
                Ok(StartReplacement {
                    fuse: false,
                    action: decode_replacement_str(stripped)?,
                })
            }
        }
        other => Ok(StartReplacement {
            fuse: false,
            action: decode_replacement(other)?,
        }),
    }
}

fn decode_alternatives(items: &[String]) -> Result<Vec<String>, String> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let s = strip_markers(item);
        if s.is_empty() {
            return Err(format!("alternative {item:?} is empty after marker stripping"));
        }
        out.push(s.to_string());
    }
    Ok(out)
}

fn decode_conditions(raw: Option<RawConditions>) -> Result<Conditions, String> {
    let Some(raw) = raw else {
        return Ok(Conditions::default());
    };
    let mut excludes = Vec::with_capacity(raw.excludes.len());
    for (feature, value) in raw.excludes {
        let Some(excluded) = value.strip_prefix('!') else {
            return Err(format!(
                "condition {feature:?} must use the \"!value\" exclusion form, got {value:?}"
            ));
        };
        excludes.push(Exclude {
            feature,
            value: excluded.to_string(),
        });
    }
    Ok(Conditions {
        paired_index: raw.paired_index,
        excludes,
    })
}
