//! Domain mix drift: per-domain share of each snapshot and its change.

use std::collections::{BTreeMap, BTreeSet};

use ashwam_core::metrics::ratio;
use ashwam_core::models::DomainShift;

/// Compare two domain distributions over the union of their keys.
///
/// A snapshot with zero items contributes a share of 0 for every domain.
pub fn compute_domain_drift(
    day0: &BTreeMap<String, usize>,
    day1: &BTreeMap<String, usize>,
) -> BTreeMap<String, DomainShift> {
    let total0: usize = day0.values().sum();
    let total1: usize = day1.values().sum();
    let domains: BTreeSet<&String> = day0.keys().chain(day1.keys()).collect();

    domains
        .into_iter()
        .map(|domain| {
            let day0_pct = ratio(day0.get(domain).copied().unwrap_or(0), total0);
            let day1_pct = ratio(day1.get(domain).copied().unwrap_or(0), total1);
            (
                domain.clone(),
                DomainShift {
                    day0_pct,
                    day1_pct,
                    change: day1_pct - day0_pct,
                },
            )
        })
        .collect()
}
