use super::*;
use crate::normalize::DefaultNormalizer;

fn build(originals: &[&str]) -> (ReverseIndex, Vec<ConflictNotice>) {
    ReverseIndex::build(originals.iter().copied(), &DefaultNormalizer::new())
}

#[test]
fn test_resolve_maps_canonical_to_original() {
    let (index, conflicts) = build(&["The Lazy Dog"]);
    assert_eq!(index.resolve("doglazythe"), Some("The Lazy Dog"));
    assert!(conflicts.is_empty());
}

#[test]
fn test_resolve_absent_canonical_is_none() {
    let (index, _) = build(&["something"]);
    assert_eq!(index.resolve("missing"), None);
}

#[test]
fn test_conflict_keeps_first_seen_and_notices_once() {
    let (index, conflicts) = build(&["The Lazy Dog", "Lazy Dog The"]);

    assert_eq!(index.resolve("doglazythe"), Some("The Lazy Dog"));
    assert_eq!(
        conflicts,
        vec![ConflictNotice {
            canonical: "doglazythe".to_owned(),
            kept: "The Lazy Dog".to_owned(),
            discarded: "Lazy Dog The".to_owned(),
        }],
    );
    assert_eq!(index.len(), 1);
}

#[test]
fn test_identical_duplicates_are_silent() {
    let (index, conflicts) = build(&["same", "same"]);
    assert!(conflicts.is_empty());
    assert_eq!(index.len(), 1);
}

#[test]
fn test_canonicals_keep_first_seen_order() {
    let (index, _) = build(&["zeta", "alpha", "mid"]);
    let keys: Vec<&str> = index.canonicals().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_empty_input_builds_empty_index() {
    let (index, conflicts) = build(&[]);
    assert!(index.is_empty());
    assert!(conflicts.is_empty());
}
