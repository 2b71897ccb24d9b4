//! Stream aligner.
//!
//! Two documents chunked independently stop agreeing on chunk boundaries as
//! soon as text is inserted or removed, so pairing chunk `i` with chunk `i`
//! compares unrelated text. The aligner instead diffs the two re-assembled
//! documents once and cuts the resulting op stream into [`AlignedPair`]s.
//!
//! The cut is a fold over the op sequence ([`AlignState::step`]). Each op is
//! fed token by token into a pair of buffers, and after each token the
//! buffers are emitted as a pair when they hold content and
//!
//! - either buffer exceeds the size ceiling, or
//! - either buffer contains a paragraph break.
//!
//! Once one side's text is fully consumed, every further op (which can only
//! touch the other side) closes its own pair. Buffers holding only whitespace
//! are never emitted.

use crate::chunking::Chunk;
use crate::config::EngineConfig;
use crate::diff::model::{AlignedPair, WordDiffOp};
use crate::diff::tokenize::tokenize;
use crate::diff::words::WordDiffer;
use crate::errors::Result;

const PARAGRAPH_BREAK: &str = "\n\n";

/// Chunk layout of both joined documents and the size ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignBounds {
    /// Char offset in the joined text of A where each chunk ends
    pub ends_a: Vec<usize>,
    /// Char offset in the joined text of B where each chunk ends
    pub ends_b: Vec<usize>,
    /// Buffer length (chars) beyond which a split is forced
    pub ceiling: usize,
}

impl AlignBounds {
    /// Bounds for chunk streams joined with `separator`.
    pub fn from_chunks(
        chunks_a: &[Chunk],
        chunks_b: &[Chunk],
        separator: &str,
        ceiling: usize,
    ) -> Self {
        Self {
            ends_a: chunk_ends(chunks_a, separator),
            ends_b: chunk_ends(chunks_b, separator),
            ceiling,
        }
    }
}

fn chunk_ends(chunks: &[Chunk], separator: &str) -> Vec<usize> {
    let separator_chars = separator.chars().count();
    let mut offset = 0;
    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            if i > 0 {
                offset += separator_chars;
            }
            offset += chunk.text.chars().count();
            offset
        })
        .collect()
}

// Index of the chunk holding the text that follows `offset`.
fn chunk_at(ends: &[usize], offset: usize) -> usize {
    ends.partition_point(|&end| end <= offset)
        .min(ends.len().saturating_sub(1))
}

/// One side's growing buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct AlignBuffer {
    text: String,
    /// Offset (chars) of the buffer start in the joined text
    start: usize,
    chars: usize,
    has_content: bool,
    paragraph_break: bool,
}

impl AlignBuffer {
    fn push(&mut self, piece: &str) {
        if piece.is_empty() {
            return;
        }
        // Breaks ahead of any content are leading whitespace, not a boundary
        if self.has_content && !self.paragraph_break {
            self.paragraph_break = piece.contains(PARAGRAPH_BREAK)
                || (self.text.ends_with('\n') && piece.starts_with('\n'));
        }
        if !self.has_content {
            self.has_content = piece.chars().any(|c| !c.is_whitespace());
        }
        self.chars += piece.chars().count();
        self.text.push_str(piece);
    }

    fn consumed(&self) -> usize {
        self.start + self.chars
    }

    fn take_trimmed(&mut self) -> String {
        let text = self.text.trim().to_string();
        *self = AlignBuffer {
            start: self.consumed(),
            ..AlignBuffer::default()
        };
        text
    }
}

/// Fold state: both buffers, the chunk layout and the pairs emitted so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignState {
    bounds: AlignBounds,
    buf_a: AlignBuffer,
    buf_b: AlignBuffer,
    pairs: Vec<AlignedPair>,
}

impl AlignState {
    pub fn new(bounds: AlignBounds) -> Self {
        Self {
            bounds,
            buf_a: AlignBuffer::default(),
            buf_b: AlignBuffer::default(),
            pairs: Vec::new(),
        }
    }

    /// Consume one op, emitting pairs wherever a split is due.
    pub fn step(mut self, op: &WordDiffOp) -> Self {
        let exhausted = self.exhausted();

        for token in tokenize(op.text()) {
            match op {
                WordDiffOp::Equal(_) => {
                    self.buf_a.push(token);
                    self.buf_b.push(token);
                }
                WordDiffOp::Deleted(_) => self.buf_a.push(token),
                WordDiffOp::Inserted(_) => self.buf_b.push(token),
            }
            if self.has_content() && self.should_split() {
                self.emit();
            }
        }

        if exhausted && self.has_content() {
            self.emit();
        }
        self
    }

    /// Emit whatever content remains and return all pairs.
    pub fn finish(mut self) -> Vec<AlignedPair> {
        if self.has_content() {
            self.emit();
        }
        self.pairs
    }

    /// Pairs emitted so far
    pub fn pairs(&self) -> &[AlignedPair] {
        &self.pairs
    }

    fn has_content(&self) -> bool {
        self.buf_a.has_content || self.buf_b.has_content
    }

    // Either side has no text left to consume.
    fn exhausted(&self) -> bool {
        let total_a = self.bounds.ends_a.last().copied().unwrap_or(0);
        let total_b = self.bounds.ends_b.last().copied().unwrap_or(0);
        self.buf_a.consumed() >= total_a || self.buf_b.consumed() >= total_b
    }

    fn should_split(&self) -> bool {
        let oversized =
            self.buf_a.chars > self.bounds.ceiling || self.buf_b.chars > self.bounds.ceiling;
        let at_boundary = self.buf_a.paragraph_break || self.buf_b.paragraph_break;

        oversized || at_boundary
    }

    fn emit(&mut self) {
        let source_index_a = chunk_at(&self.bounds.ends_a, self.buf_a.start);
        let source_index_b = chunk_at(&self.bounds.ends_b, self.buf_b.start);
        self.pairs.push(AlignedPair {
            text_a: self.buf_a.take_trimmed(),
            text_b: self.buf_b.take_trimmed(),
            source_index_a,
            source_index_b,
        });
    }
}

/// Cut a fixed op sequence into aligned pairs.
pub fn align_ops(ops: &[WordDiffOp], bounds: AlignBounds) -> Vec<AlignedPair> {
    ops.iter()
        .fold(AlignState::new(bounds), |state, op| state.step(op))
        .finish()
}

/// Join chunk texts with `separator`.
pub fn full_text(chunks: &[Chunk], separator: &str) -> String {
    chunks
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Align two chunk streams using `differ` for the full-document diff.
///
/// # Errors
///
/// - `ComparisonAnomaly`: the full-document diff failed
pub fn align_chunks_with(
    chunks_a: &[Chunk],
    chunks_b: &[Chunk],
    config: &EngineConfig,
    differ: &dyn WordDiffer,
) -> Result<Vec<AlignedPair>> {
    let full_a = full_text(chunks_a, &config.chunk_separator);
    let full_b = full_text(chunks_b, &config.chunk_separator);

    let ops = differ
        .diff(&full_a, &full_b)
        .map_err(|e| e.with_op("align_chunks"))?;

    let bounds = AlignBounds::from_chunks(
        chunks_a,
        chunks_b,
        &config.chunk_separator,
        config.max_chunk_size,
    );
    let pairs = align_ops(&ops, bounds);

    tracing::debug!(
        chunks_a = chunks_a.len(),
        chunks_b = chunks_b.len(),
        ops = ops.len(),
        pairs = pairs.len(),
        "chunk streams aligned"
    );
    Ok(pairs)
}

/// Align two chunk streams with the default word differ.
///
/// # Errors
///
/// - `ComparisonAnomaly`: the full-document diff failed
pub fn align_chunks(
    chunks_a: &[Chunk],
    chunks_b: &[Chunk],
    config: &EngineConfig,
) -> Result<Vec<AlignedPair>> {
    align_chunks_with(chunks_a, chunks_b, config, &crate::diff::words::MyersWordDiffer)
}
