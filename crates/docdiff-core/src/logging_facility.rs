//! Structured logging facility for docdiff
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use docdiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! The engine layer owns `start`/`end` boundary events; the core only emits
//! `tracing::debug!` details and `tracing::warn!` for contained anomalies.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
