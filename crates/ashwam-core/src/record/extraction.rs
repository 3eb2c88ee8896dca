use serde::Deserialize;
use serde_json::Value;

use super::defect::SchemaDefect;
use super::item::ExtractionItem;
use super::json_key;
use crate::constants::NULL_LABEL_KEY;

/// One parser output (or canary gold) record: the items extracted from a
/// single journal.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ExtractionRecord {
    pub journal_id: Option<String>,
    pub items: Vec<ExtractionItem>,
    /// Structural problems found while parsing. Empty means schema-valid.
    pub defects: Vec<SchemaDefect>,
}

impl ExtractionRecord {
    /// Build a record from typed items. A `None` required field on an item
    /// counts as a missing key.
    pub fn new(journal_id: impl Into<String>, items: Vec<ExtractionItem>) -> Self {
        let defects = items
            .iter()
            .enumerate()
            .flat_map(|(index, item)| {
                item.missing_fields()
                    .into_iter()
                    .map(move |field| SchemaDefect::ItemMissingField { index, field })
            })
            .collect();

        Self {
            journal_id: Some(journal_id.into()),
            items,
            defects,
        }
    }

    /// Parse a raw JSON record. Never fails.
    ///
    /// - `journalid` must be present (a `null` value counts as present, with no id).
    /// - An absent `items` key reads as an empty, valid list.
    /// - `items` of any other non-array type is a defect and reads as no items.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self {
                journal_id: None,
                items: Vec::new(),
                defects: vec![SchemaDefect::NotAnObject],
            };
        };

        let mut defects = Vec::new();

        let journal_id = match map.get("journalid") {
            Some(raw) => json_key(raw),
            None => {
                defects.push(SchemaDefect::MissingJournalId);
                None
            }
        };

        let items = match map.get("items") {
            None => Vec::new(),
            Some(Value::Array(raw_items)) => raw_items
                .iter()
                .enumerate()
                .map(|(index, raw)| ExtractionItem::from_value(index, raw, &mut defects))
                .collect(),
            Some(_) => {
                defects.push(SchemaDefect::ItemsNotSequence);
                Vec::new()
            }
        };

        Self {
            journal_id,
            items,
            defects,
        }
    }

    pub fn is_schema_valid(&self) -> bool {
        self.defects.is_empty()
    }

    /// The validated view: `Ok` for a schema-valid record, otherwise the defects.
    pub fn schema_check(&self) -> Result<(), &[SchemaDefect]> {
        if self.defects.is_empty() {
            Ok(())
        } else {
            Err(&self.defects)
        }
    }

    /// Journal id for report keys; `"null"` when the record has none.
    pub fn journal_key(&self) -> &str {
        self.journal_id.as_deref().unwrap_or(NULL_LABEL_KEY)
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

impl From<Value> for ExtractionRecord {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}
