//! Sentence-packing chunker.
//!
//! Splits text after `.`, `!` or `?` when the mark is immediately followed
//! by whitespace, then greedily packs consecutive sentences into chunks of at
//! most `max_chunk_size` characters. Abbreviations such as "Dr. Smith" are
//! split too; the chunks stay contiguous so that costs nothing downstream.

use regex::Regex;
use std::sync::OnceLock;

static SENTENCE_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn sentence_boundary() -> &'static Regex {
    SENTENCE_BOUNDARY.get_or_init(|| {
        // Terminal mark plus the first whitespace char after it
        Regex::new(r"[.!?]\s").expect("Invalid sentence boundary pattern")
    })
}

/// Byte range of one trimmed sentence in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SentenceSpan {
    pub start: usize,
    pub end: usize,
}

/// Split `text` into trimmed, non-empty sentence spans in document order.
pub(crate) fn split_sentences(text: &str) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for mat in sentence_boundary().find_iter(text) {
        // Split right after the terminal mark
        let cut = mat.start() + 1;
        push_trimmed(text, last, cut, &mut spans);
        last = cut;
    }
    push_trimmed(text, last, text.len(), &mut spans);

    spans
}

fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<SentenceSpan>) {
    let piece = &text[start..end];
    let trimmed_start = piece.trim_start();
    if trimmed_start.is_empty() {
        return;
    }
    let lead = piece.len() - trimmed_start.len();
    let trimmed = trimmed_start.trim_end();
    spans.push(SentenceSpan {
        start: start + lead,
        end: start + lead + trimmed.len(),
    });
}

/// Pack sentences into chunk texts.
///
/// A chunk is the contiguous source slice from its first sentence to its
/// last one. The buffer is flushed when adding the next sentence would push
/// it past `max_chunk_size` characters; a sentence that alone exceeds the
/// limit becomes its own chunk unsplit.
pub(crate) fn pack_sentences(text: &str, max_chunk_size: usize) -> Vec<String> {
    let spans = split_sentences(text);
    let mut chunks = Vec::new();

    // (start, end, char length) of the open buffer
    let mut open: Option<(usize, usize, usize)> = None;

    for span in spans {
        let sentence_chars = text[span.start..span.end].chars().count();
        open = match open {
            None => Some((span.start, span.end, sentence_chars)),
            Some((start, end, chars)) => {
                let gap_chars = text[end..span.start].chars().count();
                let extended = chars + gap_chars + sentence_chars;
                if extended > max_chunk_size {
                    chunks.push(text[start..end].to_string());
                    Some((span.start, span.end, sentence_chars))
                } else {
                    Some((start, span.end, extended))
                }
            }
        };
    }

    if let Some((start, end, _)) = open {
        chunks.push(text[start..end].to_string());
    }

    chunks
}
