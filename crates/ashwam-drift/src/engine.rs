//! Drift engine: snapshot statistics plus the four day-over-day signals.

use ashwam_core::config::DriftConfig;
use ashwam_core::models::{DriftReport, DriftSignals};
use ashwam_core::record::{ExtractionRecord, Journal};

use crate::domain_mix::compute_domain_drift;
use crate::stats::snapshot_stats;

/// Compute the drift report with the default configuration.
///
/// `journals` is accepted for contract parity with the other analyses; the
/// signals only depend on the two snapshots.
pub fn compute_drift(
    day0: &[ExtractionRecord],
    day1: &[ExtractionRecord],
    journals: &[Journal],
) -> DriftReport {
    compute_drift_with(day0, day1, journals, &DriftConfig::default())
}

/// Compute the drift report with an explicit configuration.
pub fn compute_drift_with(
    day0: &[ExtractionRecord],
    day1: &[ExtractionRecord],
    _journals: &[Journal],
    config: &DriftConfig,
) -> DriftReport {
    let day0_stats = snapshot_stats(day0);
    let day1_stats = snapshot_stats(day1);

    // Near-zero baselines give a large but finite relative change.
    let extraction_volume_change = (day1_stats.avg_extraction - day0_stats.avg_extraction)
        / day0_stats.avg_extraction.max(config.volume_change_floor);

    let drift_signals = DriftSignals {
        extraction_volume_change,
        uncertainty_rate_change: day1_stats.uncertainty_rate - day0_stats.uncertainty_rate,
        arousal_drift: day1_stats.high_arousal_rate - day0_stats.high_arousal_rate,
        domain_mix_change: compute_domain_drift(
            &day0_stats.domain_distribution,
            &day1_stats.domain_distribution,
        ),
    };

    tracing::info!(
        extraction_volume_change = drift_signals.extraction_volume_change,
        uncertainty_rate_change = drift_signals.uncertainty_rate_change,
        arousal_drift = drift_signals.arousal_drift,
        domains = drift_signals.domain_mix_change.len(),
        "drift computed"
    );

    DriftReport {
        day0: day0_stats,
        day1: day1_stats,
        drift_signals,
    }
}
