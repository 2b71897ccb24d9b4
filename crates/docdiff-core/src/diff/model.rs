//! Word diff and comparison output types.
//!
//! Records handed to renderers and the summary responder serialize with
//! camelCase keys (`markedA`, `hasDifference`, `totalChunks`, ...).

use serde::{Deserialize, Serialize};

/// One atomic operation of a word-level diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum WordDiffOp {
    /// Present on both sides
    Equal(String),
    /// Present only on side B
    Inserted(String),
    /// Present only on side A
    Deleted(String),
}

impl WordDiffOp {
    pub fn text(&self) -> &str {
        match self {
            WordDiffOp::Equal(t) | WordDiffOp::Inserted(t) | WordDiffOp::Deleted(t) => t,
        }
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            WordDiffOp::Equal(_) => SpanKind::Equal,
            WordDiffOp::Inserted(_) => SpanKind::Inserted,
            WordDiffOp::Deleted(_) => SpanKind::Deleted,
        }
    }

    /// True if this op contributes to side A
    pub fn in_a(&self) -> bool {
        !matches!(self, WordDiffOp::Inserted(_))
    }

    /// True if this op contributes to side B
    pub fn in_b(&self) -> bool {
        !matches!(self, WordDiffOp::Deleted(_))
    }
}

/// Tag of a marked span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Equal,
    Inserted,
    Deleted,
}

/// A run of text with its diff tag; renderers pick the encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedSpan {
    pub kind: SpanKind,
    pub text: String,
}

impl MarkedSpan {
    pub fn equal(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Equal,
            text: text.into(),
        }
    }
}

impl From<&WordDiffOp> for MarkedSpan {
    fn from(op: &WordDiffOp) -> Self {
        Self {
            kind: op.kind(),
            text: op.text().to_string(),
        }
    }
}

/// One reconciled unit of comparable text from both documents.
///
/// `source_index_a`/`source_index_b` name the source chunk in which each
/// side's text starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignedPair {
    pub text_a: String,
    pub text_b: String,
    pub source_index_a: usize,
    pub source_index_b: usize,
}

/// Comparator output for one aligned pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkComparisonResult {
    /// Position in the aligned sequence (0-based, no gaps)
    pub index: usize,
    pub marked_a: String,
    pub marked_b: String,
    pub has_difference: bool,
    /// Tagged spans behind `marked_a`
    #[serde(default)]
    pub spans_a: Vec<MarkedSpan>,
    /// Tagged spans behind `marked_b`
    #[serde(default)]
    pub spans_b: Vec<MarkedSpan>,
}

/// Ordered per-pair results plus counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub results: Vec<ChunkComparisonResult>,
    pub total_chunks: usize,
    pub difference_count: usize,
    /// Pairs that fell back to an unmarked result after a diff failure
    #[serde(default)]
    pub anomaly_count: usize,
}

impl ComparisonSummary {
    /// Build a summary whose counts are derived from `results`.
    pub fn from_results(results: Vec<ChunkComparisonResult>, anomaly_count: usize) -> Self {
        let difference_count = results.iter().filter(|r| r.has_difference).count();
        Self {
            total_chunks: results.len(),
            difference_count,
            anomaly_count,
            results,
        }
    }

    pub fn empty() -> Self {
        Self::from_results(Vec::new(), 0)
    }

    pub fn has_differences(&self) -> bool {
        self.difference_count > 0
    }
}
