use serde::{Deserialize, Serialize};

use super::defaults;

/// Drift analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Denominator floor for the relative extraction-volume change.
    /// A near-zero baseline yields a large but finite signal.
    pub volume_change_floor: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            volume_change_floor: defaults::DEFAULT_VOLUME_CHANGE_FLOOR,
        }
    }
}
