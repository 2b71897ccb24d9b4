//! Tokenizer/Chunker.
//!
//! Turns one side's raw text into an ordered sequence of bounded [`Chunk`]s.
//! Every chunk is non-empty and trimmed, and indices run `0..N` with no gaps
//! regardless of which policy produced them.
//!
//! ```
//! use docdiff_core::chunking::chunk;
//!
//! let chunks = chunk("The cat sat. It was warm.", 1024)?;
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].index, 0);
//! # Ok::<(), docdiff_core::errors::ExError>(())
//! ```

mod paragraph;
mod sentence;

use serde::{Deserialize, Serialize};

use crate::config::{validate_max_chunk_size, ChunkPolicy, EngineConfig};
use crate::errors::{DocDiffError, ExError, Result};
use crate::format::{SourceFormat, PAGE_BREAK};

/// A bounded unit of one document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub index: usize,
}

impl Chunk {
    /// Character length of the chunk text
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Chunk `raw_text` with the default sentence policy.
///
/// # Errors
///
/// - `ConfigurationError`: `max_chunk_size == 0`
pub fn chunk(raw_text: &str, max_chunk_size: usize) -> Result<Vec<Chunk>> {
    chunk_with_policy(raw_text, ChunkPolicy::Sentence, max_chunk_size)
}

/// Chunk `raw_text` with an explicit policy.
///
/// # Errors
///
/// - `ConfigurationError`: `max_chunk_size == 0`, or a zero-word window
pub fn chunk_with_policy(
    raw_text: &str,
    policy: ChunkPolicy,
    max_chunk_size: usize,
) -> Result<Vec<Chunk>> {
    validate_max_chunk_size(max_chunk_size).map_err(|e| e.with_op("chunk"))?;
    Ok(index_chunks(texts_for_policy(raw_text, policy, max_chunk_size)?))
}

/// Chunk a document according to the way its format was linearized.
///
/// - `Pdf`: form-feed separated pages, each line-packed
/// - `Word`: newline-run separated paragraphs, each line-packed
/// - `Excel`: one row per line, each line-packed
/// - `Text`: `config.chunk_policy`
///
/// # Errors
///
/// - `ConfigurationError`: invalid `config`
pub fn chunk_document(
    format: SourceFormat,
    raw_text: &str,
    config: &EngineConfig,
) -> Result<Vec<Chunk>> {
    config.validate().map_err(|e| e.with_op("chunk_document"))?;
    let max = config.max_chunk_size;

    let texts = match format {
        SourceFormat::Pdf => raw_text
            .split(PAGE_BREAK)
            .flat_map(|page| paragraph::pack_lines(page, max))
            .collect(),
        SourceFormat::Word => raw_text
            .split('\n')
            .filter(|p| !p.is_empty())
            .flat_map(|p| paragraph::pack_lines(p, max))
            .collect(),
        SourceFormat::Excel => raw_text
            .lines()
            .flat_map(|row| paragraph::pack_lines(row, max))
            .collect(),
        SourceFormat::Text => texts_for_policy(raw_text, config.chunk_policy, max)?,
    };

    let chunks = index_chunks(texts);
    tracing::debug!(format = %format, chunks = chunks.len(), "document chunked");
    Ok(chunks)
}

fn texts_for_policy(raw_text: &str, policy: ChunkPolicy, max: usize) -> Result<Vec<String>> {
    Ok(match policy {
        ChunkPolicy::Sentence => sentence::pack_sentences(raw_text, max),
        ChunkPolicy::Paragraph => paragraph::pack_lines(raw_text, max),
        ChunkPolicy::WordWindow { words: 0 } => {
            return Err(ExError::from(DocDiffError::InvalidWordWindow { words: 0 }).with_op("chunk"))
        }
        ChunkPolicy::WordWindow { words } => word_windows(raw_text, words),
    })
}

fn word_windows(raw_text: &str, words: usize) -> Vec<String> {
    raw_text
        .split_whitespace()
        .collect::<Vec<_>>()
        .chunks(words)
        .map(|window| window.join(" "))
        .collect()
}

/// Drop blank texts and assign sequential indices.
fn index_chunks(texts: Vec<String>) -> Vec<Chunk> {
    texts
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(index, text)| Chunk { text, index })
        .collect()
}
