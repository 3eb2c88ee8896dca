use ashwam_core::config::DriftConfig;
use ashwam_core::record::{Domain, ExtractionItem, ExtractionRecord, Polarity};
use ashwam_drift::{compute_domain_drift, compute_drift, compute_drift_with, snapshot_stats};
use std::collections::BTreeMap;

fn item(domain: Domain) -> ExtractionItem {
    ExtractionItem::new(domain, "t", "t", Polarity::Present, 0.9)
}

fn records_with(counts: &[usize]) -> Vec<ExtractionRecord> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            ExtractionRecord::new(format!("j{i}"), (0..n).map(|_| item(Domain::Food)).collect())
        })
        .collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn volume_change_is_relative_to_baseline() {
    let report = compute_drift(&records_with(&[1, 1]), &records_with(&[2, 2]), &[]);
    assert!(approx(report.drift_signals.extraction_volume_change, 1.0));
}

#[test]
fn zero_baseline_uses_floor() {
    let report = compute_drift(&records_with(&[0, 0]), &records_with(&[5, 5]), &[]);
    assert_eq!(report.day0.avg_extraction, 0.0);
    assert!(approx(report.drift_signals.extraction_volume_change, 5000.0));
}

#[test]
fn custom_floor_changes_zero_baseline_result() {
    let config = DriftConfig {
        volume_change_floor: 0.5,
    };
    let report = compute_drift_with(&records_with(&[0]), &records_with(&[1]), &[], &config);
    assert!(approx(report.drift_signals.extraction_volume_change, 2.0));
}

#[test]
fn both_snapshots_empty_is_flat() {
    let report = compute_drift(&[], &[], &[]);
    assert_eq!(report.drift_signals.extraction_volume_change, 0.0);
    assert_eq!(report.drift_signals.uncertainty_rate_change, 0.0);
    assert_eq!(report.drift_signals.arousal_drift, 0.0);
    assert!(report.drift_signals.domain_mix_change.is_empty());
}

#[test]
fn uncertainty_and_arousal_deltas_are_signed() {
    let day0 = vec![ExtractionRecord::new(
        "j",
        vec![
            ExtractionItem::new(Domain::Mind, "a", "a", Polarity::Unknown, 0.5).with_arousal("high"),
            item(Domain::Mind),
        ],
    )];
    let day1 = vec![ExtractionRecord::new("j", vec![item(Domain::Mind)])];
    let report = compute_drift(&day0, &day1, &[]);
    assert!(approx(report.drift_signals.uncertainty_rate_change, -0.5));
    assert!(approx(report.drift_signals.arousal_drift, -0.5));
}

#[test]
fn domain_appearing_only_on_day1_has_zero_baseline_share() {
    let day0 = BTreeMap::from([("food".to_string(), 2)]);
    let day1 = BTreeMap::from([("food".to_string(), 1), ("mind".to_string(), 1)]);
    let mix = compute_domain_drift(&day0, &day1);

    assert_eq!(mix.len(), 2);
    assert_eq!(mix["mind"].day0_pct, 0.0);
    assert_eq!(mix["mind"].day1_pct, 0.5);
    assert!(approx(mix["food"].change, -0.5));
}

#[test]
fn domain_counts_ignore_unknown_label_spelling() {
    let mut odd = item(Domain::Food);
    odd.domain = Some(Domain::from_label("sleep"));
    let stats = snapshot_stats(&[ExtractionRecord::new("j", vec![odd, item(Domain::Food)])]);
    assert_eq!(stats.domain_distribution.get("sleep"), Some(&1));
    assert_eq!(stats.domain_distribution.get("food"), Some(&1));
}

#[test]
fn records_without_items_still_count_toward_average() {
    let report = compute_drift(&records_with(&[2, 0]), &records_with(&[2]), &[]);
    assert_eq!(report.day0.avg_extraction, 1.0);
    assert_eq!(report.day1.avg_extraction, 2.0);
}
