mod canary_report;
mod drift_report;
mod invariant_document;
mod invariant_report;

pub use canary_report::{CanaryAlert, CanaryReport, CanaryStatus};
pub use drift_report::{DomainShift, DriftReport, DriftSignals, SnapshotStats};
pub use invariant_document::{ExerciseSummary, InvariantDocument, InvariantExplanation};
pub use invariant_report::InvariantReport;
