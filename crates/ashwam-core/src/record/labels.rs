//! Domain and polarity labels.
//!
//! Known labels map to named variants; anything else the parser emitted is
//! kept verbatim in `Other` so distribution and contradiction logic see the
//! raw value.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Health-observation domain of an extraction item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Symptom,
    Food,
    Emotion,
    Mind,
    Other(String),
}

impl Domain {
    /// The four domains the parser is expected to emit.
    pub fn from_label(label: &str) -> Self {
        match label {
            "symptom" => Self::Symptom,
            "food" => Self::Food,
            "emotion" => Self::Emotion,
            "mind" => Self::Mind,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Symptom => "symptom",
            Self::Food => "food",
            Self::Emotion => "emotion",
            Self::Mind => "mind",
            Self::Other(label) => label,
        }
    }

    /// `null` reads as no domain; non-string labels keep their JSON text.
    pub(crate) fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::from_label(s)),
            other => Some(Self::Other(other.to_string())),
        }
    }
}

/// Whether an extraction asserts, denies, or hedges the observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Polarity {
    Present,
    Absent,
    Unknown,
    Other(String),
}

impl Polarity {
    pub fn from_label(label: &str) -> Self {
        match label {
            "present" => Self::Present,
            "absent" => Self::Absent,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Unknown => "unknown",
            Self::Other(label) => label,
        }
    }

    pub(crate) fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::from_label(s)),
            other => Some(Self::Other(other.to_string())),
        }
    }
}

macro_rules! label_serde {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                Ok(Self::from_label(&label))
            }
        }
    };
}

label_serde!(Domain);
label_serde!(Polarity);

/// The `polarity` slot of a raw item: absent key, explicit `null`, or a label.
///
/// An absent key and an explicit `null` are different values when grouping
/// for contradictions, so the slot keeps them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum PolarityField {
    #[default]
    Missing,
    Null,
    Label(Polarity),
}

impl PolarityField {
    pub(crate) fn from_json(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(raw) => Polarity::from_json(raw).map_or(Self::Null, Self::Label),
        }
    }

    /// The parsed label, if any.
    pub fn label(&self) -> Option<&Polarity> {
        match self {
            Self::Label(polarity) => Some(polarity),
            Self::Missing | Self::Null => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Value compared when grouping items by evidence span.
    ///
    /// A missing polarity reads as the empty label; `null` has no label.
    pub fn grouping_key(&self) -> Option<&str> {
        match self {
            Self::Missing => Some(""),
            Self::Null => None,
            Self::Label(polarity) => Some(polarity.as_str()),
        }
    }
}

impl From<Polarity> for PolarityField {
    fn from(polarity: Polarity) -> Self {
        Self::Label(polarity)
    }
}
