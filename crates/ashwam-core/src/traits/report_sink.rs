use std::path::PathBuf;

use crate::errors::MonitorResult;

/// Persists a finished report under a file name, returning where it went.
pub trait IReportSink: Send + Sync {
    fn write_report(&self, name: &str, report: &serde_json::Value) -> MonitorResult<PathBuf>;
}
