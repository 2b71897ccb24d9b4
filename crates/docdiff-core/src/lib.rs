//! docdiff core - chunking, alignment and word-level diff of two documents
//!
//! This crate provides the pure comparison engine:
//! - Format-aware chunking of extracted text into bounded units
//! - A word-level differ over word/whitespace/punctuation tokens
//! - A stream aligner that re-pairs chunks after insertions and deletions
//! - A pairwise comparator producing marked text, and the result aggregator
//! - The error facility, logging facility and engine configuration
//!
//! The crate performs no IO; callers hand it plain strings.

pub mod chunking;
pub mod config;
pub mod diff;
pub mod errors;
pub mod format;
pub mod logging_facility;

pub use docdiff_core_types as core_types;

// Re-export commonly used types
pub use chunking::{chunk, chunk_document, Chunk};
pub use config::{ChunkPolicy, EngineConfig};
pub use diff::{compare_chunks, compare_pair, AlignedPair, ChunkComparisonResult, ComparisonSummary};
pub use errors::{DocDiffError, ExError, ExErrorKind, Result, Side};
pub use format::SourceFormat;
