//! Typed record model for parser outputs and journals.
//!
//! Raw JSON records enter through [`ExtractionRecord::from_value`], which never
//! fails: structural problems are collected as [`SchemaDefect`]s on the record
//! and every malformed field is read as absent.

pub mod defect;
pub mod extraction;
pub mod item;
pub mod journal;
pub mod labels;

pub use defect::{RequiredItemField, SchemaDefect};
pub use extraction::ExtractionRecord;
pub use item::ExtractionItem;
pub use journal::{Journal, JournalIndex};
pub use labels::{Domain, Polarity, PolarityField};

use serde_json::Value;

/// Read a journal id. Strings are used verbatim, numbers by their decimal text.
pub(crate) fn json_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
