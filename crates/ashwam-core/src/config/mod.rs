//! Monitor configuration: analysis thresholds and their validation.

pub mod canary_config;
pub mod defaults;
pub mod drift_config;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use canary_config::CanaryConfig;
pub use drift_config::DriftConfig;
pub use validation::{validate, validate_or_error, ConfigValidationError};

/// Top-level monitor configuration.
///
/// The shipped binary always runs with [`MonitorConfig::default`]; the
/// struct exists so thresholds can be varied under test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub canary: CanaryConfig,
    pub drift: DriftConfig,
}
