//! Document comparison command.
//!
//! ## Pipeline
//! 1. Validate the engine configuration (fail fast)
//! 2. Require text on both sides (a missing side is `MalformedInput`)
//! 3. Require both sides to share a format
//! 4. Chunk each side according to the format
//! 5. Align, compare and aggregate
//! 6. Render the human summary and assemble the report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docdiff_core::chunking::chunk_document;
use docdiff_core::config::EngineConfig;
use docdiff_core::diff::{compare_chunks, render_human_summary, ComparisonSummary};
use docdiff_core::errors::{DocDiffError, ExError, ExErrorKind, Result, Side};
use docdiff_core::format::SourceFormat;
use docdiff_core::{log_op_end, log_op_error, log_op_start};
use docdiff_core_types::{RequestContext, TraceId};

/// One document as handed over by the extraction layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Display name (usually the file name)
    pub name: String,
    pub format: SourceFormat,
    /// Extracted text; `None` when extraction produced nothing
    pub text: Option<String>,
}

impl DocumentInput {
    pub fn new(name: impl Into<String>, format: SourceFormat, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format,
            text: Some(text.into()),
        }
    }

    /// An input whose extraction yielded no text.
    pub fn missing(name: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            name: name.into(),
            format,
            text: None,
        }
    }

    pub(crate) fn require_text(&self, side: Side, op: &str) -> Result<&str> {
        self.text
            .as_deref()
            .ok_or_else(|| ExError::from(DocDiffError::MissingText { side }).with_op(op))
    }
}

/// Compare two documents.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub a: DocumentInput,
    pub b: DocumentInput,
    pub config: EngineConfig,
    pub context: RequestContext,
}

impl CompareRequest {
    /// Request with the default configuration and a fresh request id
    pub fn new(a: DocumentInput, b: DocumentInput) -> Self {
        Self {
            a,
            b,
            config: EngineConfig::default(),
            context: RequestContext::new(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }
}

/// Result of a document comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub request_id: String,
    /// Upstream trace id, when the caller supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    pub name_a: String,
    pub name_b: String,
    pub format: SourceFormat,
    /// Number of chunks produced for side A
    pub chunks_a: usize,
    /// Number of chunks produced for side B
    pub chunks_b: usize,
    pub summary: ComparisonSummary,
    /// Markdown review summary of `summary`
    pub human_summary: String,
    pub created_at: DateTime<Utc>,
}

/// Compare two documents and build a [`ComparisonReport`].
///
/// ## Errors
///
/// - `ConfigurationError`: invalid `max_chunk_size` or chunk policy
/// - `MalformedInput`: a side has no text, or the sides differ in format
/// - `ComparisonAnomaly`: the full-document diff behind the alignment failed
///
/// Per-pair diff failures are not errors; they are counted in
/// `summary.anomaly_count`.
pub fn compare_documents(request: CompareRequest) -> Result<ComparisonReport> {
    let request_id = request.context.request_id.clone();
    let trace_id = request.context.trace_id.as_ref().map(TraceId::as_str);
    log_op_start!(
        "compare_documents",
        request_id = %request_id,
        trace_id = trace_id,
        format = %request.a.format
    );
    let start = std::time::Instant::now();

    let report = compare_documents_impl(&request).map_err(|e| {
        let e = e.with_request_id(request_id.clone());
        log_op_error!(
            "compare_documents",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = %request_id,
            trace_id = trace_id
        );
        e
    })?;

    log_op_end!(
        "compare_documents",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %request_id,
        trace_id = trace_id,
        chunks_a = report.chunks_a,
        chunks_b = report.chunks_b,
        total_chunks = report.summary.total_chunks,
        difference_count = report.summary.difference_count,
        anomaly_count = report.summary.anomaly_count
    );

    Ok(report)
}

fn compare_documents_impl(request: &CompareRequest) -> Result<ComparisonReport> {
    let op = "compare_documents";
    request.config.validate().map_err(|e| e.with_op(op))?;

    let text_a = request.a.require_text(Side::A, op)?;
    let text_b = request.b.require_text(Side::B, op)?;

    if request.a.format != request.b.format {
        return Err(ExError::new(ExErrorKind::MalformedInput)
            .with_op(op)
            .with_message(format!(
                "documents must share a format, got {} and {}",
                request.a.format, request.b.format
            )));
    }
    let format = request.a.format;

    let chunks_a =
        chunk_document(format, text_a, &request.config).map_err(|e| e.with_side(Side::A))?;
    let chunks_b =
        chunk_document(format, text_b, &request.config).map_err(|e| e.with_side(Side::B))?;

    let summary = compare_chunks(&chunks_a, &chunks_b, &request.config)?;
    let human_summary = render_human_summary(&summary);

    Ok(ComparisonReport {
        request_id: request.context.request_id.to_string(),
        trace_id: request.context.trace_id.as_ref().map(TraceId::to_string),
        name_a: request.a.name.clone(),
        name_b: request.b.name.clone(),
        format,
        chunks_a: chunks_a.len(),
        chunks_b: chunks_b.len(),
        summary,
        human_summary,
        created_at: Utc::now(),
    })
}
