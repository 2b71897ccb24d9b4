#![allow(clippy::unwrap_used, clippy::expect_used)]

// Integration tests for the document comparison command.
// Covers the happy path, fail-fast input errors and boundary logging.

use docdiff_core::config::{ChunkPolicy, EngineConfig};
use docdiff_core::errors::{ExErrorKind, Side};
use docdiff_core::format::{linearize_pages, SourceFormat};
use docdiff_core::logging_facility::test_capture::init_test_capture;
use docdiff_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ANOMALY_COUNT, FIELD_CHUNKS_A,
    FIELD_CHUNKS_B, FIELD_DIFFERENCE_COUNT, FIELD_ERR_CODE, FIELD_FORMAT, FIELD_REQUEST_ID,
    FIELD_SIDE, FIELD_TOTAL_CHUNKS, FIELD_TRACE_ID,
};
use docdiff_core_types::{RequestContext, RequestId, TraceId};
use docdiff_engine::commands::chunk::chunk_input;
use docdiff_engine::{compare_documents, CompareRequest, DocumentInput};

fn text(name: &str, body: &str) -> DocumentInput {
    DocumentInput::new(name, SourceFormat::Text, body)
}

fn context(id: &str) -> RequestContext {
    RequestContext::with_request_id(RequestId::from_string(id.to_string()))
}

// ---------------------------------------------------------------------------
// compare_documents
// ---------------------------------------------------------------------------

#[test]
fn test_compare_documents_happy_path() {
    let request = CompareRequest::new(
        text("a.txt", "The cat sat. It was warm."),
        text("b.txt", "The cat sat. It was cold outside."),
    )
    .with_context(context("cmp-happy"));

    let report = compare_documents(request).unwrap();

    assert_eq!(report.request_id, "cmp-happy");
    assert_eq!(report.name_a, "a.txt");
    assert_eq!(report.name_b, "b.txt");
    assert_eq!(report.format, SourceFormat::Text);
    assert_eq!(report.chunks_a, 1);
    assert_eq!(report.chunks_b, 1);
    assert_eq!(report.summary.difference_count, 1);
    assert!(report.human_summary.contains("**cold outside**"));
}

#[test]
fn test_identical_documents_have_no_differences() {
    let body = "First paragraph.\n\nSecond paragraph.";
    let report = compare_documents(CompareRequest::new(text("a", body), text("b", body))).unwrap();
    assert_eq!(report.summary.difference_count, 0);
    assert!(report.human_summary.contains("_No differences detected._"));
}

#[test]
fn test_pdf_pages_are_compared() {
    let a = linearize_pages(&["Page one.", "Page two."]);
    let b = linearize_pages(&["Page one.", "Page 2."]);
    let request = CompareRequest::new(
        DocumentInput::new("a.pdf", SourceFormat::Pdf, a),
        DocumentInput::new("b.pdf", SourceFormat::Pdf, b),
    );

    let report = compare_documents(request).unwrap();
    assert_eq!(report.chunks_a, 2);
    assert_eq!(report.chunks_b, 2);
    assert!(report.summary.has_differences());
}

#[test]
fn test_missing_text_fails_fast() {
    let request = CompareRequest::new(
        text("a", "Some text."),
        DocumentInput::missing("b", SourceFormat::Text),
    );

    let err = compare_documents(request).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MalformedInput);
    assert_eq!(err.side(), Some(Side::B));
    assert_eq!(err.op(), Some("compare_documents"));
    assert!(err.request_id().is_some());
}

#[test]
fn test_format_mismatch_rejected() {
    let request = CompareRequest::new(
        text("a", "x"),
        DocumentInput::new("b", SourceFormat::Word, "x"),
    );
    let err = compare_documents(request).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MalformedInput);
    assert!(err.message().contains("share a format"));
}

#[test]
fn test_invalid_config_rejected_before_chunking() {
    let request = CompareRequest::new(text("a", "x"), DocumentInput::missing("b", SourceFormat::Text))
        .with_config(EngineConfig::default().with_max_chunk_size(0));

    let err = compare_documents(request).unwrap_err();
    // Configuration is checked before the inputs
    assert_eq!(err.kind(), ExErrorKind::ConfigurationError);
}

#[test]
fn test_report_json_shape() {
    let report = compare_documents(CompareRequest::new(text("a", "one"), text("b", "two"))).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["requestId"].is_string());
    assert_eq!(json["nameA"], "a");
    assert_eq!(json["format"], "text");
    assert!(json.get("traceId").is_none());
    assert_eq!(json["summary"]["totalChunks"], 1);
    assert!(json["createdAt"].is_string());
}

// ---------------------------------------------------------------------------
// boundary logging
// ---------------------------------------------------------------------------

#[test]
fn test_compare_documents_logs_start_and_end() {
    let capture = init_test_capture();
    let request = CompareRequest::new(text("a", "alpha"), text("b", "beta"))
        .with_context(context("cmp-log-ok"));

    compare_documents(request).unwrap();

    let ours = |event: &str| {
        capture.count_events(|e| {
            e.op.as_deref() == Some("compare_documents")
                && e.event.as_deref() == Some(event)
                && e.field(FIELD_REQUEST_ID) == Some("cmp-log-ok")
        })
    };
    assert_eq!(ours(EVENT_START), 1);
    assert_eq!(ours(EVENT_END), 1);
    assert_eq!(ours(EVENT_END_ERROR), 0);

    let end = capture
        .events_for_op("compare_documents")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END) && e.field(FIELD_REQUEST_ID) == Some("cmp-log-ok"))
        .unwrap();
    assert_eq!(end.field(FIELD_TOTAL_CHUNKS), Some("1"));
    assert_eq!(end.field(FIELD_DIFFERENCE_COUNT), Some("1"));
    assert_eq!(end.field(FIELD_CHUNKS_A), Some("1"));
    assert_eq!(end.field(FIELD_CHUNKS_B), Some("1"));
    assert_eq!(end.field(FIELD_ANOMALY_COUNT), Some("0"));
    assert_eq!(end.field(FIELD_TRACE_ID), None);
}

#[test]
fn test_compare_documents_propagates_trace_id() {
    let capture = init_test_capture();
    let context = context("cmp-log-trace")
        .with_trace_id(TraceId::from_string("trace-upstream-7".to_string()));
    let request = CompareRequest::new(text("a", "alpha"), text("b", "beta")).with_context(context);

    let report = compare_documents(request).unwrap();
    assert_eq!(report.trace_id.as_deref(), Some("trace-upstream-7"));

    let traced = |event: &str| {
        capture.count_events(|e| {
            e.op.as_deref() == Some("compare_documents")
                && e.event.as_deref() == Some(event)
                && e.field(FIELD_REQUEST_ID) == Some("cmp-log-trace")
                && e.field(FIELD_TRACE_ID) == Some("trace-upstream-7")
        })
    };
    assert_eq!(traced(EVENT_START), 1);
    assert_eq!(traced(EVENT_END), 1);

    let start = capture
        .events_for_op("compare_documents")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_START) && e.field(FIELD_REQUEST_ID) == Some("cmp-log-trace"))
        .unwrap();
    assert_eq!(start.field(FIELD_FORMAT), Some("text"));
}

#[test]
fn test_compare_documents_logs_error() {
    let capture = init_test_capture();
    let request = CompareRequest::new(text("a", "x"), DocumentInput::missing("b", SourceFormat::Text))
        .with_context(context("cmp-log-err"));

    compare_documents(request).unwrap_err();

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("compare_documents")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_REQUEST_ID) == Some("cmp-log-err")
            && e.field(FIELD_ERR_CODE) == Some("ERR_MALFORMED_INPUT")
            && e.field(FIELD_SIDE) == Some("B")
    });
    assert_eq!(errors, 1);
}

// ---------------------------------------------------------------------------
// chunk_input
// ---------------------------------------------------------------------------

#[test]
fn test_chunk_input_uses_policy() {
    let config = EngineConfig::default().with_chunk_policy(ChunkPolicy::WordWindow { words: 2 });
    let chunks = chunk_input(&text("a", "one two three"), &config, &RequestContext::new()).unwrap();
    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["one two", "three"]);
}

#[test]
fn test_chunk_input_missing_text() {
    let err = chunk_input(
        &DocumentInput::missing("a", SourceFormat::Text),
        &EngineConfig::default(),
        &RequestContext::new(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MalformedInput);
}
