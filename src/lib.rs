//! Rule-driven Sanskrit external-sandhi engine.
//!
//! Given a sentence in Czech-scientific romanization, the engine walks every
//! adjacent word pair, finds the first rule whose end/start patterns match the
//! boundary, and rewrites both word ends per the rule's replacement spec. The
//! result is the transformed sentence plus an audit trail of every
//! substitution. Rule and group data come from a JSON document; script
//! conversion (IAST, Devanagari) is applied to the finished output only.

pub mod engine;
pub mod features;
pub mod rules;
pub mod trace_init;
pub mod translit;

pub use engine::{ChangeRecord, EngineConfig, SandhiEngine, SandhiOutput};
pub use features::{FeatureLookup, NoFeatures, SentenceFeatures, WordFeatures};
pub use rules::{GroupRegistry, Pattern, Replacement, Rule, RuleError, RuleFile, RuleSet};
