//! Core entry points: align two chunk streams and aggregate the pairs.

use crate::chunking::{chunk_with_policy, Chunk};
use crate::config::EngineConfig;
use crate::diff::aggregate::aggregate_with;
use crate::diff::align::align_chunks_with;
use crate::diff::compare::PairComparator;
use crate::diff::model::ComparisonSummary;
use crate::errors::Result;

/// Align two chunk sequences and compare every pair.
///
/// # Errors
///
/// - `ConfigurationError`: invalid `config`
/// - `ComparisonAnomaly`: the full-document diff behind the alignment failed
pub fn compare_chunks(
    chunks_a: &[Chunk],
    chunks_b: &[Chunk],
    config: &EngineConfig,
) -> Result<ComparisonSummary> {
    let comparator = PairComparator::new().with_empty_sentinel(config.empty_sentinel.clone());
    compare_chunks_with(chunks_a, chunks_b, config, &comparator)
}

/// [`compare_chunks`] with an explicit pair comparator.
///
/// The comparator's word differ also drives the full-document alignment.
///
/// # Errors
///
/// Same as [`compare_chunks`].
pub fn compare_chunks_with(
    chunks_a: &[Chunk],
    chunks_b: &[Chunk],
    config: &EngineConfig,
    comparator: &PairComparator,
) -> Result<ComparisonSummary> {
    config.validate().map_err(|e| e.with_op("compare_chunks"))?;

    let pairs = align_chunks_with(chunks_a, chunks_b, config, comparator.differ())?;
    let summary = aggregate_with(&pairs, comparator);

    tracing::debug!(
        pairs = pairs.len(),
        differences = summary.difference_count,
        anomalies = summary.anomaly_count,
        "chunk streams compared"
    );
    Ok(summary)
}

/// Chunk two plain texts with the configured policy and compare them.
///
/// # Errors
///
/// - `ConfigurationError`: invalid `config`
/// - `ComparisonAnomaly`: the full-document diff failed
pub fn compare_texts(text_a: &str, text_b: &str, config: &EngineConfig) -> Result<ComparisonSummary> {
    let chunks_a = chunk_with_policy(text_a, config.chunk_policy, config.max_chunk_size)?;
    let chunks_b = chunk_with_policy(text_b, config.chunk_policy, config.max_chunk_size)?;
    compare_chunks(&chunks_a, &chunks_b, config)
}
