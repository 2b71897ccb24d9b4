//! Line-packing chunker for page- and row-oriented text.
//!
//! Lines are packed (newline-joined) while the buffer stays within
//! `max_chunk_size`; a line that alone exceeds the limit is hard-sliced into
//! `max_chunk_size`-character pieces.

/// Cut `text` into `max_chars`-character slices on char boundaries.
pub(crate) fn hard_slice(text: &str, max_chars: usize) -> Vec<&str> {
    let mut slices = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (offset, _) in text.char_indices() {
        if count == max_chars {
            slices.push(&text[start..offset]);
            start = offset;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        slices.push(&text[start..]);
    }

    slices
}

/// Pack the lines of `text` into trimmed chunk texts.
///
/// Chunks may come back empty after trimming; the caller drops them.
pub(crate) fn pack_lines(text: &str, max_chunk_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for line in text.split('\n') {
        let line_chars = line.chars().count();

        if current_chars + line_chars + 1 <= max_chunk_size {
            current.push_str(line);
            current.push('\n');
            current_chars += line_chars + 1;
            continue;
        }

        if !current.trim().is_empty() {
            chunks.push(current.trim().to_string());
        }

        if line_chars > max_chunk_size {
            chunks.extend(
                hard_slice(line, max_chunk_size)
                    .into_iter()
                    .map(|slice| slice.trim().to_string()),
            );
            current.clear();
            current_chars = 0;
        } else {
            current.clear();
            current.push_str(line);
            current.push('\n');
            current_chars = line_chars + 1;
        }
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}
