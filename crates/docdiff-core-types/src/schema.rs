//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the logging macros,
//! the engine's boundary events and the tests that assert on them.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Document sides
pub const FIELD_SIDE: &str = "side";
pub const FIELD_FORMAT: &str = "format";

// Collection sizes
pub const FIELD_CHUNKS_A: &str = "chunks_a";
pub const FIELD_CHUNKS_B: &str = "chunks_b";
pub const FIELD_PAIR_INDEX: &str = "pair_index";
pub const FIELD_TOTAL_CHUNKS: &str = "total_chunks";
pub const FIELD_DIFFERENCE_COUNT: &str = "difference_count";
pub const FIELD_ANOMALY_COUNT: &str = "anomaly_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_ANOMALY: &str = "anomaly";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        let events = [EVENT_START, EVENT_END, EVENT_END_ERROR, EVENT_ANOMALY];
        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_error_fields_are_namespaced() {
        assert!(FIELD_ERR_KIND.starts_with("err."));
        assert!(FIELD_ERR_CODE.starts_with("err."));
    }
}
