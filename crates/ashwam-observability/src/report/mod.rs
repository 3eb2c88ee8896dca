//! Formatted invariant report: both snapshots plus static documentation.

mod explanations;

use ashwam_core::models::{ExerciseSummary, InvariantDocument, InvariantReport};

pub use explanations::invariant_explanations;

pub const EXERCISE: &str = "Production Monitoring Without Ground Truth";
pub const FOCUS: &str = "Safety and restraint over recall";
pub const CONSTRAINTS: &str = "No canonical labels for symptom, food, emotion, or mind";

pub fn exercise_summary() -> ExerciseSummary {
    ExerciseSummary {
        exercise: EXERCISE.to_string(),
        focus: FOCUS.to_string(),
        constraints: CONSTRAINTS.to_string(),
    }
}

/// Wrap the day0 and day1 invariant reports into the published document.
pub fn format_invariant_report(day0: InvariantReport, day1: InvariantReport) -> InvariantDocument {
    InvariantDocument {
        summary: exercise_summary(),
        day0_baseline: day0,
        day1_drift_breakage: day1,
        invariant_explanations: invariant_explanations(),
    }
}
