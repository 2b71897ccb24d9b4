#![allow(clippy::unwrap_used, clippy::expect_used)]

use docdiff_core::errors::DocDiffError;
use docdiff_core::logging_facility::test_capture::init_test_capture;
use docdiff_core::logging_facility::Profile;
use docdiff_core::{log_op_end, log_op_error, log_op_start};
use docdiff_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_TOTAL_CHUNKS,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(start_events, 1, "Should have exactly one start event");
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, total_chunks = 3);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1);
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
    assert_eq!(end_events[0].field(FIELD_TOTAL_CHUNKS), Some("3"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = DocDiffError::InvalidMaxChunkSize { value: 0 };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_CONFIGURATION"));
    assert_eq!(
        error_events[0].field(FIELD_ERR_KIND),
        Some("ConfigurationError")
    );
}

#[test]
fn test_boundary_events_carry_component() {
    let capture = init_test_capture();
    let op_name = "test_boundary_component_unique_4";

    log_op_start!(op_name, request_id = "r-1");
    log_op_end!(op_name, duration_ms = 1);

    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);
    for event in capture.events_for_op(op_name) {
        assert_eq!(event.component.as_deref(), Some(module_path!()));
    }
}

#[test]
fn test_profile_parsing() {
    assert_eq!("dev".parse::<Profile>().unwrap(), Profile::Development);
    assert_eq!("json".parse::<Profile>().unwrap(), Profile::Production);
    assert_eq!("test".parse::<Profile>().unwrap(), Profile::Test);
    assert!("verbose".parse::<Profile>().is_err());
}
