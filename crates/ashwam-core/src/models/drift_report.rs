use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate statistics of a single output snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotStats {
    pub total_items: usize,
    /// Mean items per record, 0 for an empty snapshot.
    pub avg_extraction: f64,
    /// Items with polarity `unknown` or intensity bucket `unknown`.
    pub uncertainty_rate: f64,
    pub high_intensity_rate: f64,
    pub high_arousal_rate: f64,
    /// Item count per domain label; a missing domain is keyed `"null"`.
    pub domain_distribution: BTreeMap<String, usize>,
}

/// Share of one domain in each snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainShift {
    pub day0_pct: f64,
    pub day1_pct: f64,
    /// `day1_pct - day0_pct`.
    pub change: f64,
}

/// Directional signals comparing day1 to day0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftSignals {
    /// Relative change in average extraction count.
    pub extraction_volume_change: f64,
    /// `day1 - day0` uncertainty rate.
    pub uncertainty_rate_change: f64,
    /// `day1 - day0` high-arousal rate.
    pub arousal_drift: f64,
    pub domain_mix_change: BTreeMap<String, DomainShift>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    pub day0: SnapshotStats,
    pub day1: SnapshotStats,
    pub drift_signals: DriftSignals,
}
