//! Tests for raw-to-validated record parsing.

use ashwam_core::record::{
    Domain, ExtractionItem, ExtractionRecord, Journal, JournalIndex, Polarity, PolarityField,
    RequiredItemField, SchemaDefect,
};
use serde_json::json;

fn full_item(span: &str) -> serde_json::Value {
    json!({
        "domain": "symptom",
        "text": "headache",
        "evidencespan": span,
        "polarity": "present",
        "confidence": 0.9
    })
}

// ─── Schema validity ───

#[test]
fn complete_record_is_schema_valid() {
    let rec = ExtractionRecord::from_value(&json!({
        "journalid": "j1",
        "items": [full_item("bad headache")]
    }));
    assert!(rec.is_schema_valid());
    assert!(rec.schema_check().is_ok());
    assert_eq!(rec.journal_id.as_deref(), Some("j1"));
    assert_eq!(rec.items.len(), 1);
    assert_eq!(rec.items[0].domain, Some(Domain::Symptom));
    assert_eq!(rec.items[0].polarity.label(), Some(&Polarity::Present));
    assert_eq!(rec.items[0].span(), "bad headache");
}

#[test]
fn one_missing_field_invalidates_whole_record() {
    let rec = ExtractionRecord::from_value(&json!({
        "journalid": "j1",
        "items": [
            full_item("a"),
            {"domain": "food", "text": "toast", "evidencespan": "toast", "polarity": "present"}
        ]
    }));
    assert!(!rec.is_schema_valid());
    assert_eq!(
        rec.schema_check().unwrap_err(),
        &[SchemaDefect::ItemMissingField {
            index: 1,
            field: RequiredItemField::Confidence
        }]
    );
    // The item is still parsed for analysis.
    assert_eq!(rec.items.len(), 2);
    assert_eq!(rec.items[1].confidence, None);
}

#[test]
fn missing_journalid_is_a_defect() {
    let rec = ExtractionRecord::from_value(&json!({"items": []}));
    assert_eq!(rec.defects, vec![SchemaDefect::MissingJournalId]);
    assert_eq!(rec.journal_key(), "null");
}

#[test]
fn null_journalid_counts_as_present() {
    let rec = ExtractionRecord::from_value(&json!({"journalid": null, "items": []}));
    assert!(rec.is_schema_valid());
    assert_eq!(rec.journal_id, None);
}

#[test]
fn numeric_journalid_uses_decimal_text() {
    let rec = ExtractionRecord::from_value(&json!({"journalid": 42, "items": []}));
    assert_eq!(rec.journal_id.as_deref(), Some("42"));
}

#[test]
fn absent_items_key_is_an_empty_valid_list() {
    let rec = ExtractionRecord::from_value(&json!({"journalid": "j1"}));
    assert!(rec.is_schema_valid());
    assert!(!rec.has_items());
}

#[test]
fn non_sequence_items_is_a_defect_with_no_items() {
    let rec = ExtractionRecord::from_value(&json!({"journalid": "j1", "items": "oops"}));
    assert_eq!(rec.defects, vec![SchemaDefect::ItemsNotSequence]);
    assert!(rec.items.is_empty());
}

#[test]
fn non_object_item_is_kept_as_an_empty_item() {
    let rec = ExtractionRecord::from_value(&json!({"journalid": "j1", "items": [7, full_item("x")]}));
    assert_eq!(rec.defects, vec![SchemaDefect::ItemNotObject { index: 0 }]);
    assert_eq!(rec.items.len(), 2);
    assert_eq!(rec.items[0], ExtractionItem::default());
    assert_eq!(rec.items[0].span(), "");
}

#[test]
fn non_object_record_is_a_defect() {
    let rec = ExtractionRecord::from_value(&json!(["not", "a", "record"]));
    assert_eq!(rec.defects, vec![SchemaDefect::NotAnObject]);
    assert!(rec.items.is_empty());
}

#[test]
fn null_field_counts_as_present_but_reads_as_absent() {
    let rec = ExtractionRecord::from_value(&json!({
        "journalid": "j1",
        "items": [{"domain": null, "text": null, "evidencespan": null, "polarity": null, "confidence": null}]
    }));
    assert!(rec.is_schema_valid());
    let item = &rec.items[0];
    assert_eq!(item.domain, None);
    assert_eq!(item.span(), "");
    assert_eq!(item.polarity, PolarityField::Null);
    assert_eq!(item.polarity.label(), None);
}

#[test]
fn absent_polarity_key_is_missing_not_null() {
    let rec = ExtractionRecord::from_value(&json!({
        "journalid": "j1",
        "items": [{"domain": "mind", "text": "fog", "evidencespan": "fog", "confidence": 0.5}]
    }));
    assert_eq!(
        rec.defects,
        vec![SchemaDefect::ItemMissingField { index: 0, field: RequiredItemField::Polarity }]
    );
    assert_eq!(rec.items[0].polarity, PolarityField::Missing);
    assert_eq!(rec.items[0].missing_fields(), vec![RequiredItemField::Polarity]);
}

#[test]
fn record_deserializes_through_serde() {
    let rec: ExtractionRecord =
        serde_json::from_str(r#"{"journalid":"j9","items":[{"domain":"mind"}]}"#).unwrap();
    assert_eq!(rec.journal_id.as_deref(), Some("j9"));
    assert_eq!(rec.defects.len(), 4);
    assert!(rec
        .defects
        .iter()
        .all(|d| d.kind() == "item_missing_field"));
}

#[test]
fn typed_construction_reports_none_fields_as_missing() {
    let complete = ExtractionItem::new(Domain::Food, "rice", "ate rice", Polarity::Present, 0.7);
    let partial = ExtractionItem {
        evidence_span: None,
        ..complete.clone()
    };
    assert!(ExtractionRecord::new("j1", vec![complete.clone()]).is_schema_valid());

    let rec = ExtractionRecord::new("j1", vec![complete, partial]);
    assert_eq!(
        rec.defects,
        vec![SchemaDefect::ItemMissingField {
            index: 1,
            field: RequiredItemField::EvidenceSpan
        }]
    );
}

// ─── Buckets ───

#[test]
fn bucket_predicates() {
    let item = ExtractionItem::new(Domain::Emotion, "anxious", "anxious", Polarity::Present, 0.5)
        .with_intensity("high")
        .with_arousal("low");
    assert!(item.is_high_intensity());
    assert!(!item.is_high_arousal());
    assert!(!item.is_uncertain());

    let hedged = item.clone().with_intensity("unknown");
    assert!(hedged.is_uncertain());

    let unknown_polarity =
        ExtractionItem::new(Domain::Mind, "foggy", "foggy", Polarity::Unknown, 0.5);
    assert!(unknown_polarity.is_uncertain());
}

// ─── Journals ───

#[test]
fn journal_parsing_is_lenient() {
    assert_eq!(
        Journal::from_value(&json!({"journalid": "j1", "text": "hello"})),
        Some(Journal::new("j1", "hello"))
    );
    assert_eq!(
        Journal::from_value(&json!({"journalid": "j2"})),
        Some(Journal::new("j2", ""))
    );
    assert_eq!(Journal::from_value(&json!({"text": "orphan"})), None);
    assert_eq!(Journal::from_value(&json!("j3")), None);
}

#[test]
fn journal_index_lookup() {
    let journals = vec![
        Journal::new("j1", "first"),
        Journal::new("j2", "second"),
        Journal::new("j1", "replaced"),
    ];
    let index = JournalIndex::new(&journals);
    assert_eq!(index.len(), 2);
    assert!(!index.is_empty());
    assert!(JournalIndex::new(&[]).is_empty());
    assert_eq!(index.text_for(Some("j1")), "replaced");
    assert_eq!(index.text_for(Some("missing")), "");
    assert_eq!(index.text_for(None), "");
    assert!(index.contains("j2"));
}
