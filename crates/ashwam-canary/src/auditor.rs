//! Canary auditor: gold lookup, per-record verdicts, thresholded status.

use std::collections::HashMap;

use ashwam_core::config::defaults::DEFAULT_CANARY_THRESHOLD;
use ashwam_core::models::{CanaryAlert, CanaryReport, CanaryStatus};
use ashwam_core::record::{ExtractionRecord, Journal, JournalIndex};

/// Audit `outputs` against `gold` with the default threshold.
pub fn run_canary(
    outputs: &[ExtractionRecord],
    gold: &[ExtractionRecord],
    journals: &[Journal],
) -> CanaryReport {
    run_canary_with_threshold(outputs, gold, journals, DEFAULT_CANARY_THRESHOLD)
}

/// Audit `outputs` against `gold`; `status` is `PASS` iff the pass rate is at
/// least `threshold`.
pub fn run_canary_with_threshold(
    outputs: &[ExtractionRecord],
    gold: &[ExtractionRecord],
    journals: &[Journal],
    threshold: f64,
) -> CanaryReport {
    // Later gold entries for the same id win. Records without an id share
    // the `None` key, so an id-less output is audited against id-less gold.
    let gold_by_id: HashMap<Option<&str>, &ExtractionRecord> = gold
        .iter()
        .map(|record| (record.journal_id.as_deref(), record))
        .collect();

    let index = JournalIndex::new(journals);
    let orphaned = gold_by_id
        .keys()
        .filter(|id| !id.is_some_and(|id| index.contains(id)))
        .count();
    if orphaned > 0 {
        tracing::debug!(orphaned, "gold entries without journal text");
    }

    let mut canary_passed = 0usize;
    let mut canary_failed = 0usize;
    let mut alerts = Vec::new();

    for output in outputs {
        let journal_id = output.journal_id.as_deref();
        let Some(expected) = gold_by_id.get(&journal_id) else {
            continue;
        };

        if output.has_items() == expected.has_items() {
            canary_passed += 1;
        } else {
            canary_failed += 1;
            let reason = format!(
                "Extraction mismatch: {} items found, {} expected",
                output.items.len(),
                expected.items.len()
            );
            tracing::warn!(journal_id = output.journal_key(), reason = %reason, "canary mismatch");
            alerts.push(CanaryAlert {
                journal_id: journal_id.map(str::to_string),
                reason,
            });
        }
    }

    let matched = canary_passed + canary_failed;
    let canary_pass_rate = if matched == 0 {
        1.0
    } else {
        canary_passed as f64 / matched as f64
    };
    let status = if canary_pass_rate >= threshold {
        CanaryStatus::Pass
    } else {
        CanaryStatus::Alert
    };

    tracing::info!(
        canary_passed,
        canary_failed,
        canary_pass_rate,
        threshold,
        status = ?status,
        "canary audit complete"
    );

    CanaryReport {
        canary_passed,
        canary_failed,
        canary_pass_rate,
        alerts,
        threshold,
        status,
    }
}
