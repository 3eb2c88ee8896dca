use ashwam_core::record::{Domain, ExtractionItem, ExtractionRecord, Journal, Polarity};
use ashwam_validation::compute_invariants;
use ashwam_validation::dimensions::evidence::{classify, SpanVerdict};
use proptest::prelude::*;

fn arb_polarity() -> impl Strategy<Value = Polarity> {
    prop_oneof![
        Just(Polarity::Present),
        Just(Polarity::Absent),
        Just(Polarity::Unknown),
    ]
}

fn arb_item() -> impl Strategy<Value = ExtractionItem> {
    (
        "[a-z ]{0,8}",
        arb_polarity(),
        proptest::option::of(Just(())),
    )
        .prop_map(|(span, polarity, drop_confidence)| {
            let mut item = ExtractionItem::new(Domain::Symptom, "x", span, polarity, 0.5);
            if drop_confidence.is_some() {
                item.confidence = None;
            }
            item
        })
}

fn arb_snapshot() -> impl Strategy<Value = Vec<ExtractionRecord>> {
    proptest::collection::vec(
        ("j[0-3]", proptest::collection::vec(arb_item(), 0..6))
            .prop_map(|(id, items)| ExtractionRecord::new(id, items)),
        0..8,
    )
}

fn journals() -> Vec<Journal> {
    vec![
        Journal::new("j0", "abc def ghi"),
        Journal::new("j1", "the quick brown fox"),
        Journal::new("j2", ""),
    ]
}

// ── Schema rates stay in range ──────────────────────────────────────────────

proptest! {
    #[test]
    fn schema_valid_count_bounded(outputs in arb_snapshot()) {
        let report = compute_invariants(&outputs, &journals());
        prop_assert!(report.schema_valid_count <= report.total_records);
        prop_assert!((0.0..=1.0).contains(&report.schema_valid_rate));
    }

    #[test]
    fn evidence_and_hallucination_partition_non_empty_spans(outputs in arb_snapshot()) {
        let report = compute_invariants(&outputs, &journals());
        let non_empty = outputs
            .iter()
            .flat_map(|r| r.items.iter())
            .filter(|i| !i.span().is_empty())
            .count();
        prop_assert_eq!(report.evidence_valid_count + report.hallucination_count, non_empty);
        prop_assert!(report.evidence_valid_rate + report.hallucination_rate <= 1.0 + 1e-12);
    }

    #[test]
    fn verdicts_are_exclusive(span in "[a-zA-Z ]{0,10}", text in "[a-zA-Z ]{0,20}") {
        let verdict = classify(&span, &text);
        if span.is_empty() {
            prop_assert_eq!(verdict, SpanVerdict::Empty);
        } else {
            prop_assert_ne!(verdict, SpanVerdict::Empty);
        }
    }

    #[test]
    fn contradiction_count_matches_map(outputs in arb_snapshot()) {
        let report = compute_invariants(&outputs, &journals());
        let listed: usize = report.contradictions_by_journal.values().map(Vec::len).sum();
        prop_assert_eq!(report.contradiction_count, listed);
    }
}
