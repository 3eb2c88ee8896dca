//! # ashwam-canary
//!
//! Compares a snapshot to a small labeled gold set. The check is deliberately
//! coarse: a record passes when the parser extracted *something* exactly when
//! gold has something, regardless of which items.

pub mod auditor;

pub use auditor::{run_canary, run_canary_with_threshold};
