use crate::errors::MonitorResult;
use crate::record::{ExtractionRecord, Journal};

/// Supplies the four input collections of a monitoring run.
///
/// A missing collection is an empty `Vec`, not an error.
pub trait IRecordSource: Send + Sync {
    fn journals(&self) -> MonitorResult<Vec<Journal>>;

    /// Baseline snapshot.
    fn day0_outputs(&self) -> MonitorResult<Vec<ExtractionRecord>>;

    /// Later snapshot.
    fn day1_outputs(&self) -> MonitorResult<Vec<ExtractionRecord>>;

    /// Labeled canary subset.
    fn canary_gold(&self) -> MonitorResult<Vec<ExtractionRecord>>;
}
