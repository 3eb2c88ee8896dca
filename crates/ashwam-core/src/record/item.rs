use serde_json::{Map, Value};

use super::defect::{RequiredItemField, SchemaDefect};
use super::labels::{Domain, Polarity, PolarityField};
use crate::constants::{BUCKET_HIGH, BUCKET_UNKNOWN};

/// A single extracted observation.
///
/// Every field is optional: the parser may omit any of them, and values of
/// the wrong JSON type are read as absent. Whether the *key* was present is
/// tracked separately as [`SchemaDefect`]s on the owning record, except for
/// `polarity`, whose absent and `null` states both matter for contradictions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionItem {
    pub domain: Option<Domain>,
    pub text: Option<String>,
    pub evidence_span: Option<String>,
    pub polarity: PolarityField,
    pub confidence: Option<f64>,
    pub intensity_bucket: Option<String>,
    pub arousal_bucket: Option<String>,
}

impl ExtractionItem {
    /// Build an item carrying all five required fields.
    pub fn new(
        domain: Domain,
        text: impl Into<String>,
        evidence_span: impl Into<String>,
        polarity: Polarity,
        confidence: f64,
    ) -> Self {
        Self {
            domain: Some(domain),
            text: Some(text.into()),
            evidence_span: Some(evidence_span.into()),
            polarity: PolarityField::Label(polarity),
            confidence: Some(confidence),
            intensity_bucket: None,
            arousal_bucket: None,
        }
    }

    pub fn with_intensity(mut self, bucket: impl Into<String>) -> Self {
        self.intensity_bucket = Some(bucket.into());
        self
    }

    pub fn with_arousal(mut self, bucket: impl Into<String>) -> Self {
        self.arousal_bucket = Some(bucket.into());
        self
    }

    /// The evidence span, empty when absent.
    pub fn span(&self) -> &str {
        self.evidence_span.as_deref().unwrap_or("")
    }

    /// Polarity `unknown` or intensity bucket `unknown`.
    pub fn is_uncertain(&self) -> bool {
        self.polarity.label() == Some(&Polarity::Unknown)
            || self.intensity_bucket.as_deref() == Some(BUCKET_UNKNOWN)
    }

    pub fn is_high_intensity(&self) -> bool {
        self.intensity_bucket.as_deref() == Some(BUCKET_HIGH)
    }

    pub fn is_high_arousal(&self) -> bool {
        self.arousal_bucket.as_deref() == Some(BUCKET_HIGH)
    }

    /// Required fields that are `None` on a typed item.
    pub fn missing_fields(&self) -> Vec<RequiredItemField> {
        RequiredItemField::ALL
            .into_iter()
            .filter(|field| match field {
                RequiredItemField::Domain => self.domain.is_none(),
                RequiredItemField::Text => self.text.is_none(),
                RequiredItemField::EvidenceSpan => self.evidence_span.is_none(),
                RequiredItemField::Polarity => self.polarity.is_missing(),
                RequiredItemField::Confidence => self.confidence.is_none(),
            })
            .collect()
    }

    /// Parse the item at `index` of a raw record, appending defects.
    pub(crate) fn from_value(index: usize, value: &Value, defects: &mut Vec<SchemaDefect>) -> Self {
        let Some(map) = value.as_object() else {
            defects.push(SchemaDefect::ItemNotObject { index });
            return Self::default();
        };

        for field in RequiredItemField::ALL {
            if !map.contains_key(field.key()) {
                defects.push(SchemaDefect::ItemMissingField { index, field });
            }
        }

        Self {
            domain: map.get("domain").and_then(Domain::from_json),
            text: string_field(map, "text"),
            evidence_span: string_field(map, "evidencespan"),
            polarity: PolarityField::from_json(map.get("polarity")),
            confidence: map.get("confidence").and_then(Value::as_f64),
            intensity_bucket: string_field(map, "intensitybucket"),
            arousal_bucket: string_field(map, "arousalbucket"),
        }
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}
