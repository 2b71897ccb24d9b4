use docdiff_core_types::RequestId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using the canonical error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the HTTP layer, the
/// CLI, tests) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    /// A raw text input is missing or not valid text
    MalformedInput,
    /// The source format cannot be chunked (unknown MIME type, image, ...)
    UnsupportedFormat,

    // Configuration
    /// Invalid engine configuration (e.g. `max_chunk_size == 0`)
    ConfigurationError,

    // Computation
    /// A single pair's diff computation failed; recovered locally
    ComparisonAnomaly,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedInput => "ERR_MALFORMED_INPUT",
            ExErrorKind::UnsupportedFormat => "ERR_UNSUPPORTED_FORMAT",
            ExErrorKind::ConfigurationError => "ERR_CONFIGURATION",
            ExErrorKind::ComparisonAnomaly => "ERR_COMPARISON_ANOMALY",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// One of the two documents being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context fields. Built with
/// the `with_*` methods:
///
/// ```
/// use docdiff_core::errors::{ExError, ExErrorKind, Side};
///
/// let err = ExError::new(ExErrorKind::MalformedInput)
///     .with_op("compare_documents")
///     .with_side(Side::B)
///     .with_message("extractor returned no text");
/// assert_eq!(err.code(), "ERR_MALFORMED_INPUT");
/// ```
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    side: Option<Side>,
    pair_index: Option<usize>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            side: None,
            pair_index: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add document side context
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Add aligned pair index context
    pub fn with_pair_index(mut self, index: usize) -> Self {
        self.pair_index = Some(index);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn pair_index(&self) -> Option<usize> {
        self.pair_index
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(side) = self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some(index) = self.pair_index {
            write!(f, " (pair: {})", index)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by the chunking/diff engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocDiffError {
    /// `max_chunk_size` must be a positive integer
    #[error("Invalid max chunk size: {value} (must be > 0)")]
    InvalidMaxChunkSize { value: usize },

    /// Word-window chunking needs at least one word per window
    #[error("Invalid word window: {words} (must be > 0)")]
    InvalidWordWindow { words: usize },

    /// The extractor produced no text for a side
    #[error("No text extracted for document {side}")]
    MissingText { side: Side },

    /// Raw bytes for a side are not valid UTF-8
    #[error("Document {side} is not valid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 { side: Side, valid_up_to: usize },

    /// MIME type does not map to a chunkable format
    #[error("Unsupported document type: {mime}")]
    UnsupportedMime { mime: String },

    /// A word diff does not reconstruct one of its inputs
    #[error("Word diff does not reconstruct side {side}")]
    ReconstructionMismatch { side: Side },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<DocDiffError> for ExError {
    fn from(err: DocDiffError) -> Self {
        match err {
            DocDiffError::InvalidMaxChunkSize { value } => {
                ExError::new(ExErrorKind::ConfigurationError)
                    .with_message(format!("max_chunk_size must be > 0, got {}", value))
            }

            DocDiffError::InvalidWordWindow { words } => {
                ExError::new(ExErrorKind::ConfigurationError)
                    .with_message(format!("word window must be > 0, got {}", words))
            }

            DocDiffError::MissingText { side } => ExError::new(ExErrorKind::MalformedInput)
                .with_side(side)
                .with_message("No text extracted"),

            DocDiffError::InvalidUtf8 { side, valid_up_to } => {
                ExError::new(ExErrorKind::MalformedInput)
                    .with_side(side)
                    .with_message(format!("Invalid UTF-8 after byte {}", valid_up_to))
            }

            DocDiffError::UnsupportedMime { mime } => ExError::new(ExErrorKind::UnsupportedFormat)
                .with_message(format!("Unsupported document type: {}", mime)),

            DocDiffError::ReconstructionMismatch { side } => {
                ExError::new(ExErrorKind::ComparisonAnomaly)
                    .with_side(side)
                    .with_message("Word diff does not reconstruct its input")
            }

            DocDiffError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
