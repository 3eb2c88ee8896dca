//! JSONL-backed record source.

use std::path::{Path, PathBuf};

use ashwam_core::constants::{
    CANARY_GOLD_FILE, DAY0_OUTPUTS_FILE, DAY1_OUTPUTS_FILE, JOURNALS_FILE,
};
use ashwam_core::errors::MonitorResult;
use ashwam_core::record::{ExtractionRecord, Journal};
use ashwam_core::traits::IRecordSource;
use ashwam_observability::tracing_setup::events;

use crate::jsonl::read_values;

/// Reads the four input collections from fixed file names in `data_dir`.
#[derive(Debug, Clone)]
pub struct JsonlRecordSource {
    data_dir: PathBuf,
}

impl JsonlRecordSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn records(&self, file: &str) -> MonitorResult<Vec<ExtractionRecord>> {
        let path = self.data_dir.join(file);
        let records: Vec<ExtractionRecord> = read_values(&path)?
            .iter()
            .map(ExtractionRecord::from_value)
            .collect();
        tracing::debug!(file, records = records.len(), "records loaded");
        Ok(records)
    }
}

impl IRecordSource for JsonlRecordSource {
    fn journals(&self) -> MonitorResult<Vec<Journal>> {
        let path = self.data_dir.join(JOURNALS_FILE);
        let values = read_values(&path)?;
        let mut journals = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            match Journal::from_value(value) {
                Some(journal) => journals.push(journal),
                None => events::line_skipped(&path, index + 1, "journal without journalid"),
            }
        }
        Ok(journals)
    }

    fn day0_outputs(&self) -> MonitorResult<Vec<ExtractionRecord>> {
        self.records(DAY0_OUTPUTS_FILE)
    }

    fn day1_outputs(&self) -> MonitorResult<Vec<ExtractionRecord>> {
        self.records(DAY1_OUTPUTS_FILE)
    }

    fn canary_gold(&self) -> MonitorResult<Vec<ExtractionRecord>> {
        self.records(CANARY_GOLD_FILE)
    }
}
