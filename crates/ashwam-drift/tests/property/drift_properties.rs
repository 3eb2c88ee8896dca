//! Property-based tests for the drift analyzer.

use ashwam_core::record::{Domain, ExtractionItem, ExtractionRecord, Polarity};
use ashwam_drift::compute_drift;
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = ExtractionItem> {
    (
        prop::sample::select(vec!["symptom", "food", "emotion", "mind", "sleep"]),
        prop::sample::select(vec!["present", "absent", "unknown"]),
        prop::option::of(prop::sample::select(vec!["low", "high", "unknown"])),
    )
        .prop_map(|(domain, polarity, bucket)| {
            let mut item = ExtractionItem::new(
                Domain::from_label(domain),
                "t",
                "t",
                Polarity::from_label(polarity),
                0.5,
            );
            item.intensity_bucket = bucket.map(str::to_string);
            item.arousal_bucket = bucket.map(str::to_string);
            item
        })
}

fn arb_snapshot() -> impl Strategy<Value = Vec<ExtractionRecord>> {
    prop::collection::vec(
        prop::collection::vec(arb_item(), 0..5)
            .prop_map(|items| ExtractionRecord::new("j", items)),
        0..8,
    )
}

proptest! {
    #[test]
    fn rates_stay_in_unit_interval(day0 in arb_snapshot(), day1 in arb_snapshot()) {
        let report = compute_drift(&day0, &day1, &[]);
        for stats in [&report.day0, &report.day1] {
            for rate in [stats.uncertainty_rate, stats.high_intensity_rate, stats.high_arousal_rate] {
                prop_assert!((0.0..=1.0).contains(&rate));
            }
        }
        prop_assert!(report.drift_signals.uncertainty_rate_change.abs() <= 1.0);
        prop_assert!(report.drift_signals.arousal_drift.abs() <= 1.0);
        prop_assert!(report.drift_signals.extraction_volume_change.is_finite());
    }

    #[test]
    fn domain_shares_sum_to_one_when_nonempty(day0 in arb_snapshot(), day1 in arb_snapshot()) {
        let report = compute_drift(&day0, &day1, &[]);
        let mix = &report.drift_signals.domain_mix_change;
        let sum0: f64 = mix.values().map(|s| s.day0_pct).sum();
        let sum1: f64 = mix.values().map(|s| s.day1_pct).sum();
        if report.day0.total_items > 0 {
            prop_assert!((sum0 - 1.0).abs() < 1e-9);
        } else {
            prop_assert_eq!(sum0, 0.0);
        }
        if report.day1.total_items > 0 {
            prop_assert!((sum1 - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn identical_snapshots_show_no_drift(snapshot in arb_snapshot()) {
        let report = compute_drift(&snapshot, &snapshot, &[]);
        prop_assert_eq!(report.drift_signals.extraction_volume_change, 0.0);
        prop_assert_eq!(report.drift_signals.uncertainty_rate_change, 0.0);
        prop_assert!(report.drift_signals.domain_mix_change.values().all(|s| s.change == 0.0));
    }
}
