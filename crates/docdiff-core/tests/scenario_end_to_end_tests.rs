#![allow(clippy::unwrap_used, clippy::expect_used)]

use docdiff_core::chunking::chunk;
use docdiff_core::config::EngineConfig;
use docdiff_core::diff::align::align_chunks;
use docdiff_core::diff::{aggregate, compare_chunks, compare_texts, ComparisonSummary};
use proptest::prelude::*;

const DOC_A: &str = "The cat sat. It was warm.";
const DOC_B: &str = "The cat sat. It was cold outside.";

#[test]
fn test_cat_scenario() {
    let config = EngineConfig::default();
    let chunks_a = chunk(DOC_A, 1024).unwrap();
    let chunks_b = chunk(DOC_B, 1024).unwrap();

    // Both sentences fit under the limit, so each side packs into one chunk
    assert_eq!(chunks_a.len(), 1);
    assert_eq!(chunks_b.len(), 1);

    let pairs = align_chunks(&chunks_a, &chunks_b, &config).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].text_a, DOC_A);
    assert_eq!(pairs[0].text_b, DOC_B);

    let summary = aggregate(&pairs);
    assert_eq!(summary.total_chunks, 1);
    assert_eq!(summary.difference_count, 1);

    let result = &summary.results[0];
    assert!(result.has_difference);
    assert!(result.marked_b.contains("**cold outside**"));
    assert_eq!(result.marked_a, "The cat sat. It was ~~warm~~.");
    assert!(!result.marked_a.contains("cold"));
}

#[test]
fn test_cat_scenario_through_compare_texts() {
    let summary = compare_texts(DOC_A, DOC_B, &EngineConfig::default()).unwrap();
    assert_eq!(summary.total_chunks, 1);
    assert!(summary.has_differences());
}

#[test]
fn test_word_change_in_multi_paragraph_chunk_is_marked_on_both_sides() {
    let a = "Intro text here.\n\nThe quarterly revenue was high this year and costs stayed flat.";
    let b = "Intro text here.\n\nThe quarterly revenue was low this year and costs stayed flat.";
    let summary = compare_texts(a, b, &EngineConfig::default()).unwrap();

    assert_eq!(summary.difference_count, 1);
    let changed: Vec<_> = summary.results.iter().filter(|r| r.has_difference).collect();
    assert_eq!(changed.len(), 1);
    assert_eq!(
        changed[0].marked_a,
        "The quarterly revenue was ~~high~~ this year and costs stayed flat."
    );
    assert_eq!(
        changed[0].marked_b,
        "The quarterly revenue was **low** this year and costs stayed flat."
    );
}

#[test]
fn test_empty_documents_give_empty_summary() {
    let summary = compare_chunks(&[], &[], &EngineConfig::default()).unwrap();
    assert_eq!(summary.total_chunks, 0);
    assert_eq!(summary.difference_count, 0);
    assert!(summary.results.is_empty());
}

#[test]
fn test_one_side_empty_document() {
    let chunks_b = chunk("Brand new text.", 1024).unwrap();
    let summary = compare_chunks(&[], &chunks_b, &EngineConfig::default()).unwrap();
    assert_eq!(summary.total_chunks, 1);
    assert_eq!(summary.results[0].marked_a, "[EMPTY]");
    assert_eq!(summary.results[0].marked_b, "Brand new text.");
}

#[test]
fn test_summary_serializes_camel_case() {
    let summary = compare_texts(DOC_A, DOC_B, &EngineConfig::default()).unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["totalChunks"], 1);
    assert_eq!(json["differenceCount"], 1);
    assert_eq!(json["results"][0]["hasDifference"], true);

    let back: ComparisonSummary = serde_json::from_value(json).unwrap();
    assert_eq!(back, summary);
}

proptest! {
    #[test]
    fn prop_summary_counts_are_consistent(
        a in "[a-e .\n]{0,200}",
        b in "[a-e .\n]{0,200}",
        max in 5usize..80,
    ) {
        let config = EngineConfig::default().with_max_chunk_size(max);
        let summary = compare_texts(&a, &b, &config).unwrap();
        prop_assert_eq!(summary.total_chunks, summary.results.len());
        prop_assert_eq!(
            summary.difference_count,
            summary.results.iter().filter(|r| r.has_difference).count()
        );
        for (i, r) in summary.results.iter().enumerate() {
            prop_assert_eq!(r.index, i);
        }
        prop_assert_eq!(summary.anomaly_count, 0);
    }
}
