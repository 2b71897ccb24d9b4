//! Result aggregator.

use crate::diff::compare::PairComparator;
use crate::diff::model::{AlignedPair, ComparisonSummary};

/// Compare every pair in order with the default comparator.
pub fn aggregate(pairs: &[AlignedPair]) -> ComparisonSummary {
    aggregate_with(pairs, &PairComparator::default())
}

/// Compare every pair in order; result `i` has index `i`.
///
/// Pairs whose diff fails are kept as unmarked results and counted in
/// `anomaly_count`.
pub fn aggregate_with(pairs: &[AlignedPair], comparator: &PairComparator) -> ComparisonSummary {
    let mut anomaly_count = 0;
    let results = pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            comparator
                .try_compare(&pair.text_a, &pair.text_b, index)
                .unwrap_or_else(|err| {
                    anomaly_count += 1;
                    comparator.recover(&pair.text_a, &pair.text_b, index, &err)
                })
        })
        .collect();

    ComparisonSummary::from_results(results, anomaly_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str, i: usize) -> AlignedPair {
        AlignedPair {
            text_a: a.into(),
            text_b: b.into(),
            source_index_a: i,
            source_index_b: i,
        }
    }

    #[test]
    fn test_empty_input_gives_empty_summary() {
        assert_eq!(aggregate(&[]), ComparisonSummary::empty());
    }

    #[test]
    fn test_counts_and_indices() {
        let pairs = vec![
            pair("same", "same", 0),
            pair("old", "new", 1),
            pair("", "added", 2),
        ];
        let summary = aggregate(&pairs);

        assert_eq!(summary.total_chunks, 3);
        assert_eq!(summary.difference_count, 2);
        assert_eq!(summary.anomaly_count, 0);
        let indices: Vec<usize> = summary.results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
