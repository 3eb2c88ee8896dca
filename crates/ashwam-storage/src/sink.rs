//! Pretty-JSON report sink.

use std::fs;
use std::path::{Path, PathBuf};

use ashwam_core::errors::{MonitorResult, StorageError};
use ashwam_core::traits::IReportSink;
use ashwam_observability::tracing_setup::events;

/// Writes each report as `<out_dir>/<name>`, overwriting existing files.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    out_dir: PathBuf,
}

impl JsonFileSink {
    /// Create the sink, creating `out_dir` and its parents if needed.
    pub fn new(out_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir).map_err(|source| StorageError::CreateDir {
            path: out_dir.clone(),
            source,
        })?;
        Ok(Self { out_dir })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl IReportSink for JsonFileSink {
    fn write_report(&self, name: &str, report: &serde_json::Value) -> MonitorResult<PathBuf> {
        let path = self.out_dir.join(name);
        let mut bytes = serde_json::to_vec_pretty(report)?;
        bytes.push(b'\n');
        fs::write(&path, &bytes).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        events::report_written(name, &path, bytes.len());
        Ok(path)
    }
}
