//! Contradiction dimension.
//!
//! Items of one record are grouped by their exact evidence span; a span
//! cited with more than one distinct polarity is a contradiction. The
//! grouping map is scoped to a single record and dropped afterwards, so
//! contradictions never cross journals.

use std::collections::{HashMap, HashSet};

use ashwam_core::record::ExtractionItem;

/// Spans of `items` cited with more than one polarity, in first-seen order.
///
/// Polarities compare by [`PolarityField::grouping_key`]: a missing polarity
/// equals the empty label and `null` is its own value. An absent span groups
/// as `""`.
///
/// [`PolarityField::grouping_key`]: ashwam_core::record::PolarityField::grouping_key
pub fn find_contradictions(items: &[ExtractionItem]) -> Vec<String> {
    let mut polarities_by_span: HashMap<&str, HashSet<Option<&str>>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for item in items {
        let span = item.span();
        polarities_by_span
            .entry(span)
            .or_insert_with(|| {
                order.push(span);
                HashSet::new()
            })
            .insert(item.polarity.grouping_key());
    }

    order
        .into_iter()
        .filter(|span| {
            polarities_by_span
                .get(span)
                .is_some_and(|polarities| polarities.len() > 1)
        })
        .map(str::to_string)
        .collect()
}
