//! Alignment and word-diff engine.
//!
//! Takes two chunk sequences, re-aligns them through a full-document word
//! diff, and produces one marked comparison result per aligned pair.
//!
//! ## Entry point
//!
//! ```
//! use docdiff_core::chunking::chunk;
//! use docdiff_core::config::EngineConfig;
//! use docdiff_core::diff::{compare_chunks, render_human_summary};
//!
//! let a = chunk("The cat sat. It was warm.", 1024)?;
//! let b = chunk("The cat sat. It was cold outside.", 1024)?;
//! let summary = compare_chunks(&a, &b, &EngineConfig::default())?;
//! assert_eq!(summary.difference_count, 1);
//! let _review = render_human_summary(&summary);
//! # Ok::<(), docdiff_core::errors::ExError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical results.
//! - **Containment**: a failed pair diff never aborts the comparison; the pair
//!   is returned unmarked and counted in `anomaly_count`.
//! - **Whitespace insensitivity**: pairs differing only in whitespace are not
//!   reported as changed, and their original formatting is preserved.

pub mod aggregate;
pub mod align;
pub mod compare;
pub mod engine;
pub mod human_summary;
pub mod markup;
pub mod model;
pub mod tokenize;
pub mod words;

pub use aggregate::{aggregate, aggregate_with};
pub use align::{align_chunks, align_ops, AlignBounds, AlignState};
pub use compare::{compare_pair, try_compare_pair, PairComparator};
pub use engine::{compare_chunks, compare_texts};
pub use human_summary::render_human_summary;
pub use markup::{render_html_report, render_spans, HtmlMarkup, MarkdownMarkup, MarkupStyle};
pub use model::{
    AlignedPair, ChunkComparisonResult, ComparisonSummary, MarkedSpan, SpanKind, WordDiffOp,
};
pub use words::{diff_words, diff_words_checked, MyersWordDiffer, WordDiffer};
