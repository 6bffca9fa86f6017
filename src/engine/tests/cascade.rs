use super::engine;

#[test]
fn rewritten_word_feeds_the_next_pair() {
    // Pair 0 fuses "naraḥ atra" into "naró" + "ʼtra"; pair 1 then sees
    // "ʼtra adja" and merges the vowels in turn.
    let out = engine().apply("naraḥ atra adja");
    assert_eq!(out.text, "naróʼtrádja");
    assert_eq!(out.changes.len(), 2);

    assert_eq!(out.changes[0].position, 0);
    assert_eq!(out.changes[0].rule, "visarga_ah_a");
    assert_eq!(out.changes[1].position, 1);
    assert_eq!(out.changes[1].rule, "vowel_a_a");
    assert_eq!(out.changes[1].before, "ʼtra adja");
    assert_eq!(out.changes[1].after, "ʼtrádja");
}

#[test]
fn change_records_trim_embedded_boundary_spaces() {
    // Pair 0 does not match, so "naraḥ" enters pair 1 carrying its
    // boundary space; the audit text must not show it.
    let out = engine().apply("gaččhati naraḥ atra");
    assert_eq!(out.text, "gaččhati naróʼtra");
    assert_eq!(out.changes.len(), 1);
    assert_eq!(out.changes[0].position, 1);
    assert_eq!(out.changes[0].before, "naraḥ atra");
    assert_eq!(out.changes[0].after, "naróʼtra");
}

#[test]
fn independent_pairs_rewrite_independently() {
    let out = engine().apply("naraḥ gaččhati aham gaččhati");
    assert_eq!(out.text, "naró gaččhati ahaṃ gaččhati");
    assert_eq!(out.changes.len(), 2);
    assert_eq!(out.changes[0].position, 0);
    assert_eq!(out.changes[1].position, 2);
}

#[test]
fn pairs_are_scanned_left_to_right_once() {
    // "atra adja" fuses at pair 0; pair 1 then pairs the fused tail "dja"
    // slot against "iti", which no rule matches, so it keeps its space.
    let out = engine().apply("atra adja iti");
    assert_eq!(out.text, "atrádja iti");
    assert_eq!(out.changes.len(), 1);
}
