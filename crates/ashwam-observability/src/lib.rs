//! # ashwam-observability
//!
//! Structured tracing for the monitor binary and the presentation layer that
//! turns raw invariant reports into the documented report file.

pub mod report;
pub mod tracing_setup;

pub use report::format_invariant_report;
pub use tracing_setup::{init_tracing, LogFormat};
