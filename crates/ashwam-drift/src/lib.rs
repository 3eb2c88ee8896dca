//! # ashwam-drift
//!
//! Proxy drift detection between two time-separated snapshots of parser
//! output. No labels are needed: each snapshot is reduced to aggregate
//! statistics and the signals are directional deltas between them.
//!
//! Signals: extraction volume (relative), uncertainty rate, high-arousal rate,
//! and per-domain share.

pub mod domain_mix;
pub mod engine;
pub mod stats;

pub use domain_mix::compute_domain_drift;
pub use engine::{compute_drift, compute_drift_with};
pub use stats::snapshot_stats;
