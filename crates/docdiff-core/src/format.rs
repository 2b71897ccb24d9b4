//! Source formats and their text linearization.
//!
//! The engine never parses binary documents. Extractors hand it one string
//! per side, already flattened: PDF pages separated by form feeds, Word
//! paragraphs separated by newlines, spreadsheet rows one per line with
//! cells joined by [`CELL_SEPARATOR`].

use serde::{Deserialize, Serialize};

use crate::errors::{DocDiffError, Result};

/// Joins cells of one spreadsheet row.
pub const CELL_SEPARATOR: &str = " | ";

/// Page break in linearized PDF text.
pub const PAGE_BREAK: char = '\u{000C}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Pdf,
    Word,
    Excel,
    #[default]
    Text,
}

impl SourceFormat {
    /// Classify a MIME type.
    ///
    /// # Errors
    ///
    /// - `UnsupportedFormat`: images and other non-text content
    pub fn from_mime(mime: &str) -> Result<Self> {
        let lowered = mime.to_ascii_lowercase();
        if lowered.contains("pdf") {
            Ok(SourceFormat::Pdf)
        } else if lowered.contains("word") {
            Ok(SourceFormat::Word)
        } else if lowered.contains("spreadsheet") || lowered.contains("excel") {
            Ok(SourceFormat::Excel)
        } else if lowered.starts_with("text/") {
            Ok(SourceFormat::Text)
        } else {
            Err(DocDiffError::UnsupportedMime {
                mime: mime.to_string(),
            }
            .into())
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Pdf => "pdf",
            SourceFormat::Word => "word",
            SourceFormat::Excel => "excel",
            SourceFormat::Text => "text",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(SourceFormat::Pdf),
            "word" | "docx" => Ok(SourceFormat::Word),
            "excel" | "xlsx" => Ok(SourceFormat::Excel),
            "text" | "txt" => Ok(SourceFormat::Text),
            other => Err(format!("unknown format: {}", other)),
        }
    }
}

/// Flatten spreadsheet rows into one line per row.
pub fn linearize_rows<R, C>(rows: R) -> String
where
    R: IntoIterator<Item = C>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.as_ref().to_string())
                .collect::<Vec<_>>()
                .join(CELL_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flatten PDF pages into one string with form-feed page breaks.
pub fn linearize_pages<P: AsRef<str>>(pages: &[P]) -> String {
    pages
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(&PAGE_BREAK.to_string())
}
