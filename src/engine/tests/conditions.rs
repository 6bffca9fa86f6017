use super::engine;
use crate::features::{SentenceFeatures, WordFeatures};

fn number(value: &str) -> WordFeatures {
    WordFeatures::new().with("number", value)
}

#[test]
fn glide_fires_when_number_is_not_dual() {
    let features = SentenceFeatures::new(vec![number("1")]);
    let out = engine().apply_with_features("hari atra", &features);
    assert_eq!(out.text, "harjatra");
    assert_eq!(out.changes[0].rule, "glide_i_j");
}

#[test]
fn glide_blocked_for_dual_forms() {
    // Dual endings are pragṛhya; the "!2" exclusion leaves them untouched.
    let features = SentenceFeatures::new(vec![number("2")]);
    let out = engine().apply_with_features("hari atra", &features);
    assert_eq!(out.text, "hari atra");
    assert!(out.changes.is_empty());
}

#[test]
fn unresolvable_condition_rejects_the_rule() {
    // Without a number feature the exclusion cannot be evaluated; the
    // conditioned rule is skipped rather than applied.
    let out = engine().apply("hari atra");
    assert_eq!(out.text, "hari atra");
    assert!(out.changes.is_empty());
}

#[test]
fn condition_reads_the_pair_first_word() {
    // Only the first word's features govern the rule; the second word
    // being dual is irrelevant.
    let mut features = SentenceFeatures::new(vec![number("1")]);
    features.set(1, number("2"));
    let out = engine().apply_with_features("hari atra", &features);
    assert_eq!(out.text, "harjatra");
}

#[test]
fn u_glide_behaves_like_i_glide() {
    let features = SentenceFeatures::new(vec![number("1")]);
    let out = engine().apply_with_features("sádhu atra", &features);
    assert_eq!(out.text, "sádhvatra");
    assert_eq!(out.changes[0].rule, "glide_u_v");
}

#[test]
fn final_e_drops_following_a() {
    let features = SentenceFeatures::new(vec![number("1")]);
    let out = engine().apply_with_features("vané atra", &features);
    assert_eq!(out.text, "vanéʼtra");
    assert_eq!(out.changes[0].rule, "avagraha_e_a");
}

#[test]
fn unconditioned_rules_ignore_features() {
    let features = SentenceFeatures::new(vec![number("2")]);
    let out = engine().apply_with_features("naraḥ gaččhati", &features);
    assert_eq!(out.text, "naró gaččhati");
}
