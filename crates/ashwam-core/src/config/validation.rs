//! Config validation: reject out-of-range thresholds before any analysis runs.

use super::MonitorConfig;
use crate::errors::{MonitorError, MonitorResult};

/// Validation error for monitor configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Which field is invalid.
    pub field: String,
    /// Description of the problem.
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "config.{}: {}", self.field, self.message)
    }
}

/// Validate a MonitorConfig, returning all errors found.
pub fn validate(config: &MonitorConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    let threshold = config.canary.threshold;
    if threshold.is_nan() {
        errors.push(ConfigValidationError {
            field: "canary.threshold".to_string(),
            message: "must not be NaN".to_string(),
        });
    } else if !(0.0..=1.0).contains(&threshold) {
        errors.push(ConfigValidationError {
            field: "canary.threshold".to_string(),
            message: format!("must be in [0.0, 1.0], got {threshold}"),
        });
    }

    let floor = config.drift.volume_change_floor;
    if !floor.is_finite() || floor <= 0.0 {
        errors.push(ConfigValidationError {
            field: "drift.volume_change_floor".to_string(),
            message: format!("must be finite and > 0, got {floor}"),
        });
    }

    errors
}

/// Validate and return Ok(()) or Err with all validation errors combined.
pub fn validate_or_error(config: &MonitorConfig) -> MonitorResult<()> {
    let errors = validate(config);
    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        Err(MonitorError::Config(format!(
            "invalid monitor configuration: {}",
            messages.join("; ")
        )))
    }
}
