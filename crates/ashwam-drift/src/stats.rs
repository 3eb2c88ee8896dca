//! Per-snapshot aggregate statistics.

use std::collections::BTreeMap;

use ashwam_core::constants::NULL_LABEL_KEY;
use ashwam_core::metrics::{floored_ratio, ratio};
use ashwam_core::models::SnapshotStats;
use ashwam_core::record::ExtractionRecord;

/// Reduce one snapshot to its drift-relevant statistics.
///
/// Item rates are normalized by `max(1, total_items)`; an item missing its
/// buckets is simply "not high".
pub fn snapshot_stats(outputs: &[ExtractionRecord]) -> SnapshotStats {
    let mut total_items = 0usize;
    let mut uncertain = 0usize;
    let mut high_intensity = 0usize;
    let mut high_arousal = 0usize;
    let mut domain_distribution: BTreeMap<String, usize> = BTreeMap::new();

    for item in outputs.iter().flat_map(|r| r.items.iter()) {
        total_items += 1;
        if item.is_uncertain() {
            uncertain += 1;
        }
        if item.is_high_intensity() {
            high_intensity += 1;
        }
        if item.is_high_arousal() {
            high_arousal += 1;
        }
        let key = item
            .domain
            .as_ref()
            .map_or(NULL_LABEL_KEY, |domain| domain.as_str());
        *domain_distribution.entry(key.to_string()).or_insert(0) += 1;
    }

    SnapshotStats {
        total_items,
        avg_extraction: ratio(total_items, outputs.len()),
        uncertainty_rate: floored_ratio(uncertain, total_items),
        high_intensity_rate: floored_ratio(high_intensity, total_items),
        high_arousal_rate: floored_ratio(high_arousal, total_items),
        domain_distribution,
    }
}
