//! Command orchestration layer.
//!
//! Each command validates its inputs, calls into `docdiff-core` and owns the
//! lifecycle logging for its operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The core layer uses only `tracing::debug!` and `tracing::warn!`.

pub mod chunk;
pub mod compare;
