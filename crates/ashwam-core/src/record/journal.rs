use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::json_key;

/// A free-text journal entry the parser extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(rename = "journalid")]
    pub journal_id: String,
    pub text: String,
}

impl Journal {
    pub fn new(journal_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            journal_id: journal_id.into(),
            text: text.into(),
        }
    }

    /// Parse a raw journal line. Returns `None` when there is no usable id;
    /// a missing or non-string `text` reads as empty.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let journal_id = map.get("journalid").and_then(json_key)?;
        let text = map
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Some(Self { journal_id, text })
    }
}

/// Borrowed `journalid → text` lookup. Later journals with the same id win.
#[derive(Debug, Default)]
pub struct JournalIndex<'a> {
    texts: HashMap<&'a str, &'a str>,
}

impl<'a> JournalIndex<'a> {
    pub fn new(journals: &'a [Journal]) -> Self {
        let texts = journals
            .iter()
            .map(|j| (j.journal_id.as_str(), j.text.as_str()))
            .collect();
        Self { texts }
    }

    /// Source text for a journal id; empty when unknown or when there is no id.
    pub fn text_for(&self, journal_id: Option<&str>) -> &'a str {
        journal_id
            .and_then(|id| self.texts.get(id).copied())
            .unwrap_or("")
    }

    pub fn contains(&self, journal_id: &str) -> bool {
        self.texts.contains_key(journal_id)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
