#![allow(clippy::unwrap_used, clippy::expect_used)]

use docdiff_core::diff::compare::{compare_pair, try_compare_pair, PairComparator};
use docdiff_core::diff::{aggregate_with, AlignedPair, WordDiffOp, WordDiffer};
use docdiff_core::errors::{ExError, ExErrorKind, Result};
use docdiff_core::logging_facility::test_capture::init_test_capture;
use docdiff_core_types::schema::{EVENT_ANOMALY, FIELD_ERR_CODE, FIELD_PAIR_INDEX};
use proptest::prelude::*;

/// Differ that fails every call
struct BrokenDiffer;

impl WordDiffer for BrokenDiffer {
    fn diff(&self, _a: &str, _b: &str) -> Result<Vec<WordDiffOp>> {
        Err(ExError::new(ExErrorKind::ComparisonAnomaly).with_message("diff backend unavailable"))
    }
}

fn pair(a: &str, b: &str) -> AlignedPair {
    AlignedPair {
        text_a: a.into(),
        text_b: b.into(),
        source_index_a: 0,
        source_index_b: 0,
    }
}

#[test]
fn test_emptiness_is_symmetric() {
    let r = compare_pair("", "hello", 0);
    assert!(r.has_difference);
    assert_eq!((r.marked_a.as_str(), r.marked_b.as_str()), ("[EMPTY]", "hello"));

    let r = compare_pair("hello", "", 0);
    assert!(r.has_difference);
    assert_eq!((r.marked_a.as_str(), r.marked_b.as_str()), ("hello", "[EMPTY]"));
}

#[test]
fn test_whitespace_difference_is_not_a_change() {
    let r = compare_pair("a  b", "a b", 0);
    assert!(!r.has_difference);
    assert_eq!(r.marked_a, "a  b");
    assert_eq!(r.marked_b, "a b");
}

#[test]
fn test_try_compare_surfaces_anomaly() {
    let comparator = PairComparator::new().with_differ(BrokenDiffer);
    let err = comparator.try_compare("old", "new", 4).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ComparisonAnomaly);
    assert_eq!(err.op(), Some("compare_pair"));
    assert_eq!(err.pair_index(), Some(4));
}

#[test]
fn test_broken_differ_only_affects_step_five() {
    let comparator = PairComparator::new().with_differ(BrokenDiffer);
    assert!(comparator.try_compare("same", "same", 0).is_ok());
    assert!(comparator.try_compare("", "x", 0).is_ok());
    assert!(comparator.try_compare("a  b", "a b", 0).is_ok());
}

#[test]
fn test_anomaly_degrades_to_unmarked_pair_and_is_counted() {
    let capture = init_test_capture();
    let comparator = PairComparator::new().with_differ(BrokenDiffer);
    let pairs = vec![
        pair("anomaly-marker-alpha", "anomaly-marker-beta"),
        pair("same", "same"),
    ];

    let summary = aggregate_with(&pairs, &comparator);

    assert_eq!(summary.total_chunks, 2);
    assert_eq!(summary.anomaly_count, 1);
    assert_eq!(summary.difference_count, 0);
    assert_eq!(summary.results[0].marked_a, "anomaly-marker-alpha");
    assert_eq!(summary.results[0].marked_b, "anomaly-marker-beta");
    assert!(!summary.results[0].has_difference);

    let warnings = capture.count_events(|e| {
        e.event.as_deref() == Some(EVENT_ANOMALY)
            && e.field(FIELD_ERR_CODE) == Some("ERR_COMPARISON_ANOMALY")
            && e.field(FIELD_PAIR_INDEX) == Some("0")
            && e.field("error").is_some_and(|m| m.contains("diff backend unavailable"))
    });
    assert!(warnings >= 1, "anomaly should be logged");
}

#[test]
fn test_try_compare_pair_matches_compare_pair_when_ok() {
    let a = "The quick brown fox.";
    let b = "The slow brown fox.";
    assert_eq!(try_compare_pair(a, b, 1).unwrap(), compare_pair(a, b, 1));
}

proptest! {
    #[test]
    fn prop_comparing_text_with_itself_is_unchanged(x in "\\PC{0,80}", i in 0usize..100) {
        let r = compare_pair(&x, &x, i);
        prop_assert!(!r.has_difference);
        prop_assert_eq!(&r.marked_a, &x);
        prop_assert_eq!(&r.marked_b, &x);
        prop_assert_eq!(r.index, i);
    }

    #[test]
    fn prop_whitespace_reflow_is_unchanged(words in prop::collection::vec("[a-z]{1,6}", 1..10)) {
        let a = words.join(" ");
        let b = words.join(" \n\t ");
        let r = compare_pair(&a, &b, 0);
        prop_assert!(!r.has_difference);
        prop_assert_eq!(&r.marked_b, &b);
    }

    #[test]
    fn prop_marked_text_strips_back_to_normalized_input(
        a in "[a-d ]{1,40}",
        b in "[a-d ]{1,40}",
    ) {
        let r = compare_pair(&a, &b, 0);
        if r.has_difference && !r.spans_a.is_empty() {
            let plain_a: String = r.spans_a.iter().map(|s| s.text.as_str()).collect();
            let plain_b: String = r.spans_b.iter().map(|s| s.text.as_str()).collect();
            prop_assert_eq!(plain_a, docdiff_core::diff::compare::normalize_whitespace(&a));
            prop_assert_eq!(plain_b, docdiff_core::diff::compare::normalize_whitespace(&b));
        }
    }
}
