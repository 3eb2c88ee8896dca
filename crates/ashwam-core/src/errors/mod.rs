//! Error handling for the monitor.
//! One error enum per subsystem, `thiserror` only.
//!
//! Analyses themselves are infallible; errors only arise at the I/O seams
//! and in configuration.

pub mod monitor_error;
pub mod storage_error;

pub use monitor_error::{MonitorError, MonitorResult};
pub use storage_error::StorageError;
