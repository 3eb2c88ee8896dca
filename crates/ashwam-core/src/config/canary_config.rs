use serde::{Deserialize, Serialize};

use super::defaults;

/// Canary audit configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanaryConfig {
    /// Minimum pass rate for a `PASS` verdict (inclusive).
    pub threshold: f64,
}

impl Default for CanaryConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_CANARY_THRESHOLD,
        }
    }
}
