//! Chunk preview command.

use docdiff_core::chunking::{chunk_document, Chunk};
use docdiff_core::config::EngineConfig;
use docdiff_core::errors::{Result, Side};
use docdiff_core::{log_op_end, log_op_error, log_op_start};
use docdiff_core_types::{RequestContext, TraceId};

use crate::commands::compare::DocumentInput;

/// Chunk a single document the way a comparison would.
///
/// ## Errors
///
/// - `ConfigurationError`: invalid configuration
/// - `MalformedInput`: the input has no text
pub fn chunk_input(
    input: &DocumentInput,
    config: &EngineConfig,
    context: &RequestContext,
) -> Result<Vec<Chunk>> {
    let request_id = &context.request_id;
    let trace_id = context.trace_id.as_ref().map(TraceId::as_str);
    log_op_start!(
        "chunk_input",
        request_id = %request_id,
        trace_id = trace_id,
        format = %input.format
    );
    let start = std::time::Instant::now();

    let chunks = input
        .require_text(Side::A, "chunk_input")
        .and_then(|text| chunk_document(input.format, text, config))
        .map_err(|e| {
            let e = e.with_request_id(request_id.clone());
            log_op_error!(
                "chunk_input",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %request_id,
                trace_id = trace_id
            );
            e
        })?;

    log_op_end!(
        "chunk_input",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %request_id,
        trace_id = trace_id,
        total_chunks = chunks.len()
    );

    Ok(chunks)
}
