//! Text extraction seam.
//!
//! Binary document readers (PDF, Word, Excel) live outside this workspace and
//! plug in through [`TextExtractor`]. Whatever they produce must already be
//! linearized the way [`SourceFormat`] expects: pages joined with a form
//! feed, rows joined with newlines and cells with `" | "`.

use std::path::Path;

use docdiff_core::errors::{DocDiffError, ExError, ExErrorKind, Result, Side};
use docdiff_core::format::SourceFormat;

use crate::commands::compare::DocumentInput;

/// Produces the raw text of one document side.
pub trait TextExtractor {
    /// # Errors
    ///
    /// - `MalformedInput`: the bytes do not decode to text
    fn extract(&self, side: Side, bytes: &[u8]) -> Result<String>;
}

/// Extractor for documents that are already text: strict UTF-8 decoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, side: Side, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            ExError::from(DocDiffError::InvalidUtf8 {
                side,
                valid_up_to: e.valid_up_to(),
            })
            .with_op("extract")
        })?;
        // A leading byte-order mark is not document content
        Ok(text.strip_prefix('\u{FEFF}').unwrap_or(text).to_string())
    }
}

/// Read a file and extract its text into a [`DocumentInput`].
///
/// The document name is the file name.
///
/// # Errors
///
/// - `Io`: the file cannot be read
/// - `MalformedInput`: the extractor rejects the bytes
pub fn read_document(
    path: &Path,
    format: SourceFormat,
    side: Side,
    extractor: &dyn TextExtractor,
) -> Result<DocumentInput> {
    let bytes = std::fs::read(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_document")
            .with_side(side)
            .with_message(format!("{}: {}", path.display(), e))
    })?;
    let text = extractor.extract(side, &bytes)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(DocumentInput::new(name, format, text))
}
