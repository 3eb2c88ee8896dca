use serde::{Deserialize, Serialize};

/// Final canary verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CanaryStatus {
    Pass,
    Alert,
}

impl CanaryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Alert => "ALERT",
        }
    }
}

/// A canary record whose extraction presence disagreed with gold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanaryAlert {
    /// `None` for a record without a usable journal id.
    pub journal_id: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanaryReport {
    pub canary_passed: usize,
    pub canary_failed: usize,
    /// `passed / (passed + failed)`, 1.0 when nothing matched.
    pub canary_pass_rate: f64,
    pub alerts: Vec<CanaryAlert>,
    pub threshold: f64,
    pub status: CanaryStatus,
}

impl CanaryReport {
    pub fn matched(&self) -> usize {
        self.canary_passed + self.canary_failed
    }
}
