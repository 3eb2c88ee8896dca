//! Structural defects found while parsing a raw output record.

use std::fmt;

/// The five fields every extraction item must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequiredItemField {
    Domain,
    Text,
    EvidenceSpan,
    Polarity,
    Confidence,
}

impl RequiredItemField {
    pub const ALL: [RequiredItemField; 5] = [
        RequiredItemField::Domain,
        RequiredItemField::Text,
        RequiredItemField::EvidenceSpan,
        RequiredItemField::Polarity,
        RequiredItemField::Confidence,
    ];

    /// JSON key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Text => "text",
            Self::EvidenceSpan => "evidencespan",
            Self::Polarity => "polarity",
            Self::Confidence => "confidence",
        }
    }
}

impl fmt::Display for RequiredItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One structural problem with a record. Any defect makes the whole record
/// schema-invalid, but the record is still analysed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaDefect {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("record has no journalid")]
    MissingJournalId,

    #[error("items is not a sequence")]
    ItemsNotSequence,

    #[error("item {index} is not a JSON object")]
    ItemNotObject { index: usize },

    #[error("item {index} is missing required field '{field}'")]
    ItemMissingField {
        index: usize,
        field: RequiredItemField,
    },
}

impl SchemaDefect {
    /// Stable label used when aggregating defects into report counts.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotAnObject => "not_an_object",
            Self::MissingJournalId => "missing_journal_id",
            Self::ItemsNotSequence => "items_not_sequence",
            Self::ItemNotObject { .. } => "item_not_object",
            Self::ItemMissingField { .. } => "item_missing_field",
        }
    }
}
