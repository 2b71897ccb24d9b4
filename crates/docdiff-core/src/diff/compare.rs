//! Pairwise comparator.
//!
//! Decision ladder, first match wins:
//!
//! 1. both sides empty after trimming: no difference, originals returned
//! 2. exactly one side empty: difference, the empty side becomes the sentinel
//! 3. byte-equal: no difference
//! 4. equal after whitespace normalization: no difference, originals returned
//! 5. otherwise: word diff of the normalized strings, rendered with the
//!    configured [`MarkupStyle`]
//!
//! A failure in step 5 is a `ComparisonAnomaly`. [`PairComparator::compare`]
//! contains it: the pair is returned unmarked with no difference and a
//! warning is logged.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::EMPTY_SENTINEL;
use crate::core_types::schema::EVENT_ANOMALY;
use crate::diff::markup::{render_spans, MarkdownMarkup, MarkupStyle};
use crate::diff::model::{ChunkComparisonResult, MarkedSpan};
use crate::diff::words::{MyersWordDiffer, WordDiffer};
use crate::errors::{ExError, Result};

fn whitespace_run() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace pattern"))
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    whitespace_run().replace_all(text.trim(), " ").into_owned()
}

/// Compares aligned pairs with a fixed markup style and word differ.
pub struct PairComparator {
    style: Box<dyn MarkupStyle + Send + Sync>,
    differ: Box<dyn WordDiffer + Send + Sync>,
    empty_sentinel: String,
}

impl Default for PairComparator {
    fn default() -> Self {
        Self {
            style: Box::new(MarkdownMarkup),
            differ: Box::new(MyersWordDiffer),
            empty_sentinel: EMPTY_SENTINEL.to_string(),
        }
    }
}

impl std::fmt::Debug for PairComparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairComparator")
            .field("empty_sentinel", &self.empty_sentinel)
            .finish_non_exhaustive()
    }
}

impl PairComparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: impl MarkupStyle + Send + Sync + 'static) -> Self {
        self.style = Box::new(style);
        self
    }

    pub fn with_differ(mut self, differ: impl WordDiffer + Send + Sync + 'static) -> Self {
        self.differ = Box::new(differ);
        self
    }

    pub fn with_empty_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.empty_sentinel = sentinel.into();
        self
    }

    pub fn style(&self) -> &dyn MarkupStyle {
        self.style.as_ref()
    }

    /// Word differ shared by the stream aligner and step 5.
    pub fn differ(&self) -> &dyn WordDiffer {
        self.differ.as_ref()
    }

    /// Run the ladder, surfacing a diff failure as an error.
    ///
    /// # Errors
    ///
    /// - `ComparisonAnomaly`: the word diff of the normalized pair failed
    pub fn try_compare(
        &self,
        text_a: &str,
        text_b: &str,
        index: usize,
    ) -> Result<ChunkComparisonResult> {
        let empty_a = text_a.trim().is_empty();
        let empty_b = text_b.trim().is_empty();

        if empty_a && empty_b {
            return Ok(unmarked(text_a, text_b, index, false));
        }
        if empty_a {
            return Ok(unmarked(&self.empty_sentinel, text_b, index, true));
        }
        if empty_b {
            return Ok(unmarked(text_a, &self.empty_sentinel, index, true));
        }
        if text_a == text_b {
            return Ok(unmarked(text_a, text_b, index, false));
        }

        let norm_a = normalize_whitespace(text_a);
        let norm_b = normalize_whitespace(text_b);
        if norm_a == norm_b {
            return Ok(unmarked(text_a, text_b, index, false));
        }

        let ops = self
            .differ
            .diff(&norm_a, &norm_b)
            .map_err(|e| e.with_op("compare_pair").with_pair_index(index))?;

        let spans_a: Vec<MarkedSpan> = ops
            .iter()
            .filter(|op| op.in_a())
            .map(MarkedSpan::from)
            .collect();
        let spans_b: Vec<MarkedSpan> = ops
            .iter()
            .filter(|op| op.in_b())
            .map(MarkedSpan::from)
            .collect();

        Ok(ChunkComparisonResult {
            index,
            marked_a: render_spans(&spans_a, self.style()).trim().to_string(),
            marked_b: render_spans(&spans_b, self.style()).trim().to_string(),
            has_difference: true,
            spans_a,
            spans_b,
        })
    }

    /// Run the ladder; a diff failure degrades to the unmarked pair.
    pub fn compare(&self, text_a: &str, text_b: &str, index: usize) -> ChunkComparisonResult {
        self.try_compare(text_a, text_b, index)
            .unwrap_or_else(|err| self.recover(text_a, text_b, index, &err))
    }

    /// Fallback result for a pair whose diff failed.
    pub fn recover(
        &self,
        text_a: &str,
        text_b: &str,
        index: usize,
        err: &ExError,
    ) -> ChunkComparisonResult {
        tracing::warn!(
            event = EVENT_ANOMALY,
            pair_index = index,
            err.code = err.code(),
            error = %err,
            "pair comparison failed, returning unmarked texts"
        );
        unmarked(text_a, text_b, index, false)
    }
}

fn unmarked(text_a: &str, text_b: &str, index: usize, has_difference: bool) -> ChunkComparisonResult {
    ChunkComparisonResult {
        index,
        marked_a: text_a.to_string(),
        marked_b: text_b.to_string(),
        has_difference,
        spans_a: Vec::new(),
        spans_b: Vec::new(),
    }
}

/// Compare one aligned pair with the default comparator.
pub fn compare_pair(text_a: &str, text_b: &str, index: usize) -> ChunkComparisonResult {
    PairComparator::default().compare(text_a, text_b, index)
}

/// Fallible form of [`compare_pair`].
///
/// # Errors
///
/// - `ComparisonAnomaly`: the word diff of the normalized pair failed
pub fn try_compare_pair(text_a: &str, text_b: &str, index: usize) -> Result<ChunkComparisonResult> {
    PairComparator::default().try_compare(text_a, text_b, index)
}
