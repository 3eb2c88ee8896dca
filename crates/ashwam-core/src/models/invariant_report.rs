use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structural and evidential health of one output snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvariantReport {
    pub total_records: usize,
    pub total_items: usize,
    pub schema_valid_count: usize,
    /// `schema_valid_count / total_records`, 0 for an empty snapshot.
    pub schema_valid_rate: f64,
    pub evidence_valid_count: usize,
    /// Normalized by item count (floor 1).
    pub evidence_valid_rate: f64,
    pub hallucination_count: usize,
    /// Normalized by item count (floor 1).
    pub hallucination_rate: f64,
    /// Total contradictory spans across all journals.
    pub contradiction_count: usize,
    /// `journalid → spans cited with more than one polarity`.
    pub contradictions_by_journal: BTreeMap<String, Vec<String>>,
    /// `defect kind → occurrences` over all schema-invalid records.
    pub schema_defect_counts: BTreeMap<String, usize>,
}
