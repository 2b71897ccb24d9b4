//! Engine configuration.
//!
//! [`EngineConfig`] is plain data: it deserializes from any serde format
//! (the CLI reads TOML) with every field defaulted, and is validated once
//! before any chunking starts.

use serde::{Deserialize, Serialize};

use crate::errors::{DocDiffError, ExError, Result};

/// Default chunk size ceiling, in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1024;

/// Separator placed between chunks when a side is re-assembled for alignment.
pub const DEFAULT_CHUNK_SEPARATOR: &str = "\n\n";

/// Marked text used for a side that has no content in an aligned pair.
pub const EMPTY_SENTINEL: &str = "[EMPTY]";

/// How plain text is cut into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ChunkPolicy {
    /// Greedy packing of `.`/`!`/`?` delimited sentences
    #[default]
    Sentence,
    /// Line packing with hard slicing of over-long lines
    Paragraph,
    /// Fixed windows of whitespace-separated words
    WordWindow { words: usize },
}

/// Engine-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chunk size ceiling in characters; also the aligner's buffer ceiling
    pub max_chunk_size: usize,
    /// Chunking policy for `SourceFormat::Text`
    pub chunk_policy: ChunkPolicy,
    /// Separator used to join chunks before the full-document diff
    pub chunk_separator: String,
    /// Marked text for an empty side
    pub empty_sentinel: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            chunk_policy: ChunkPolicy::default(),
            chunk_separator: DEFAULT_CHUNK_SEPARATOR.to_string(),
            empty_sentinel: EMPTY_SENTINEL.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn with_max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    pub fn with_chunk_policy(mut self, policy: ChunkPolicy) -> Self {
        self.chunk_policy = policy;
        self
    }

    /// Check the configuration before use.
    ///
    /// # Errors
    ///
    /// - `ConfigurationError`: `max_chunk_size` is zero, or a word-window
    ///   policy asks for zero words per window
    pub fn validate(&self) -> Result<()> {
        validate_max_chunk_size(self.max_chunk_size)?;
        if let ChunkPolicy::WordWindow { words: 0 } = self.chunk_policy {
            return Err(ExError::from(DocDiffError::InvalidWordWindow { words: 0 })
                .with_op("validate_config"));
        }
        Ok(())
    }
}

/// Fail fast on a zero chunk size.
///
/// # Errors
///
/// - `ConfigurationError`: `max_chunk_size == 0`
pub fn validate_max_chunk_size(max_chunk_size: usize) -> Result<()> {
    if max_chunk_size == 0 {
        return Err(
            ExError::from(DocDiffError::InvalidMaxChunkSize {
                value: max_chunk_size,
            })
            .with_op("validate_config"),
        );
    }
    Ok(())
}
