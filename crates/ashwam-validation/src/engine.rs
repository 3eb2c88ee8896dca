//! Invariant engine: runs every dimension over a snapshot and aggregates
//! counts and rates into an [`InvariantReport`].

use ashwam_core::metrics::{floored_ratio, ratio};
use ashwam_core::models::InvariantReport;
use ashwam_core::record::{ExtractionRecord, Journal, JournalIndex};

use crate::dimensions::evidence::{GroundingText, SpanVerdict};
use crate::dimensions::{contradiction, schema};

/// Compute the invariant report for one snapshot.
///
/// Pure: malformed records are counted as schema-invalid and their items are
/// still checked with absent fields read as empty. A record whose journal id
/// is unknown is checked against empty text.
pub fn compute_invariants(outputs: &[ExtractionRecord], journals: &[Journal]) -> InvariantReport {
    let index = JournalIndex::new(journals);
    if index.is_empty() && !outputs.is_empty() {
        tracing::warn!(
            total_records = outputs.len(),
            "no journal text available; every non-empty evidence span will count as hallucinated"
        );
    }
    let mut report = InvariantReport {
        total_records: outputs.len(),
        ..InvariantReport::default()
    };

    for record in outputs {
        if schema::check(record, &mut report.schema_defect_counts) {
            report.schema_valid_count += 1;
        }

        let grounding = GroundingText::new(index.text_for(record.journal_id.as_deref()));
        for item in &record.items {
            report.total_items += 1;
            match grounding.classify(item.span()) {
                SpanVerdict::Grounded => report.evidence_valid_count += 1,
                SpanVerdict::Hallucinated => {
                    report.hallucination_count += 1;
                    tracing::debug!(
                        journal_id = %record.journal_key(),
                        span = %item.span(),
                        "evidence span not found in journal text"
                    );
                }
                SpanVerdict::Empty => {}
            }
        }

        let spans = contradiction::find_contradictions(&record.items);
        if !spans.is_empty() {
            tracing::warn!(
                event = "contradiction_detected",
                journal_id = %record.journal_key(),
                spans = ?spans,
                "contradictory polarity on shared evidence span"
            );
            report
                .contradictions_by_journal
                .entry(record.journal_key().to_string())
                .or_default()
                .extend(spans);
        }
    }

    report.contradiction_count = report.contradictions_by_journal.values().map(Vec::len).sum();
    report.schema_valid_rate = ratio(report.schema_valid_count, report.total_records);
    report.evidence_valid_rate = floored_ratio(report.evidence_valid_count, report.total_items);
    report.hallucination_rate = floored_ratio(report.hallucination_count, report.total_items);

    tracing::info!(
        total_records = report.total_records,
        total_items = report.total_items,
        journals = index.len(),
        schema_valid_rate = report.schema_valid_rate,
        hallucination_count = report.hallucination_count,
        contradiction_count = report.contradiction_count,
        "invariants computed"
    );

    report
}
