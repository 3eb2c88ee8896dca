use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::InvariantReport;

/// Presentation-ready invariant report for both snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvariantDocument {
    pub summary: ExerciseSummary,
    pub day0_baseline: InvariantReport,
    pub day1_drift_breakage: InvariantReport,
    pub invariant_explanations: BTreeMap<String, InvariantExplanation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub exercise: String,
    pub focus: String,
    pub constraints: String,
}

/// What an invariant measures, what it protects against, and what to do
/// when it fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantExplanation {
    pub definition: String,
    pub risk_mitigated: String,
    pub action_on_failure: String,
}
