//! The monitoring pipeline: load, analyze in parallel, format, persist.

use std::fmt;
use std::path::PathBuf;

use ashwam_canary::run_canary_with_threshold;
use ashwam_core::config::{validate_or_error, MonitorConfig};
use ashwam_core::constants::{CANARY_REPORT_FILE, DRIFT_REPORT_FILE, INVARIANT_REPORT_FILE};
use ashwam_core::errors::MonitorResult;
use ashwam_core::models::{CanaryReport, DriftReport, InvariantDocument};
use ashwam_core::traits::{IRecordSource, IReportSink};
use ashwam_drift::compute_drift_with;
use ashwam_observability::format_invariant_report;
use ashwam_observability::tracing_setup::events;
use ashwam_validation::compute_invariants;

/// Everything a run produced, plus where the reports were written.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub invariants: InvariantDocument,
    pub drift: DriftReport,
    pub canary: CanaryReport,
    pub written: Vec<PathBuf>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day0 = &self.invariants.day0_baseline;
        let day1 = &self.invariants.day1_drift_breakage;
        writeln!(
            f,
            "  invariants: day0 {}/{} hallucinated, day1 {}/{} hallucinated, {} contradiction(s)",
            day0.hallucination_count,
            day0.total_items,
            day1.hallucination_count,
            day1.total_items,
            day1.contradiction_count
        )?;
        writeln!(
            f,
            "  drift: extraction volume {:+.1}%, uncertainty {:+.3}, arousal {:+.3}",
            self.drift.drift_signals.extraction_volume_change * 100.0,
            self.drift.drift_signals.uncertainty_rate_change,
            self.drift.drift_signals.arousal_drift
        )?;
        write!(
            f,
            "  canary: {} (pass rate {:.1}%, threshold {:.1}%)",
            self.canary.status.as_str(),
            self.canary.canary_pass_rate * 100.0,
            self.canary.threshold * 100.0
        )
    }
}

/// Run every analysis over `source` and write the three reports to `sink`.
///
/// Inputs are read sequentially; the four analyses are independent and run
/// on the rayon pool.
pub fn run_monitor(
    source: &dyn IRecordSource,
    sink: &dyn IReportSink,
    config: &MonitorConfig,
) -> MonitorResult<RunSummary> {
    validate_or_error(config)?;

    let journals = source.journals()?;
    let day0 = source.day0_outputs()?;
    let day1 = source.day1_outputs()?;
    let gold = source.canary_gold()?;
    events::inputs_loaded(journals.len(), day0.len(), day1.len(), gold.len());

    let ((invariants_day0, invariants_day1), (drift, canary)) = rayon::join(
        || {
            rayon::join(
                || compute_invariants(&day0, &journals),
                || compute_invariants(&day1, &journals),
            )
        },
        || {
            rayon::join(
                || compute_drift_with(&day0, &day1, &journals, &config.drift),
                || run_canary_with_threshold(&day1, &gold, &journals, config.canary.threshold),
            )
        },
    );

    let invariants = format_invariant_report(invariants_day0, invariants_day1);

    let written = vec![
        sink.write_report(INVARIANT_REPORT_FILE, &serde_json::to_value(&invariants)?)?,
        sink.write_report(DRIFT_REPORT_FILE, &serde_json::to_value(&drift)?)?,
        sink.write_report(CANARY_REPORT_FILE, &serde_json::to_value(&canary)?)?,
    ];

    Ok(RunSummary {
        invariants,
        drift,
        canary,
        written,
    })
}
