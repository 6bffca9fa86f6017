use crate::engine::{EngineConfig, SandhiEngine};
use crate::rules::RuleFile;

mod cascade;
mod conditions;

fn engine() -> SandhiEngine {
    SandhiEngine::with_default_rules()
}

fn engine_from(json: &str) -> SandhiEngine {
    SandhiEngine::new(RuleFile::from_json(json).unwrap())
}

fn engine_uncached() -> SandhiEngine {
    SandhiEngine::with_config(
        RuleFile::default(),
        EngineConfig {
            cache: false,
            log_rules: false,
        },
    )
}
