//! docdiff engine - orchestration layer
//!
//! Turns raw document inputs into a [`ComparisonReport`]: decodes extracted
//! text, chunks each side according to its format, runs the core comparison
//! and owns the boundary logging for every command.

pub mod commands;
pub mod extract;

pub use commands::compare::{compare_documents, CompareRequest, ComparisonReport, DocumentInput};
pub use extract::{PlainTextExtractor, TextExtractor};
