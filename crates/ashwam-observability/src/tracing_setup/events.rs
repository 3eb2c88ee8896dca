//! Structured log events for a monitoring run.
//!
//! Each function emits a `tracing` event with structured fields.

use std::path::Path;

use ashwam_core::constants::VERSION;

/// Log the start of a run.
pub fn run_started(data_dir: &Path, out_dir: &Path) {
    tracing::info!(
        event = "run_started",
        version = VERSION,
        data_dir = %data_dir.display(),
        out_dir = %out_dir.display(),
        "monitoring run started"
    );
}

/// Log the sizes of the loaded input collections.
pub fn inputs_loaded(journals: usize, day0: usize, day1: usize, gold: usize) {
    tracing::info!(
        event = "inputs_loaded",
        journals = journals,
        day0_records = day0,
        day1_records = day1,
        gold_records = gold,
        "inputs loaded"
    );
    if day0 == 0 || day1 == 0 {
        tracing::warn!(
            event = "empty_snapshot",
            day0_records = day0,
            day1_records = day1,
            "a snapshot is empty; drift signals will be degenerate"
        );
    }
}

/// Log a JSONL line that could not be used.
pub fn line_skipped(file: &Path, line: usize, reason: &str) {
    tracing::warn!(
        event = "line_skipped",
        file = %file.display(),
        line = line,
        reason = %reason,
        "skipping unreadable input line"
    );
}

/// Log a report written to disk.
pub fn report_written(name: &str, path: &Path, bytes: usize) {
    tracing::info!(
        event = "report_written",
        report = %name,
        path = %path.display(),
        bytes = bytes,
        "report written"
    );
}

/// Log run completion.
pub fn run_completed(elapsed_ms: u128, canary_status: &str) {
    tracing::info!(
        event = "run_completed",
        elapsed_ms = elapsed_ms as u64,
        canary_status = %canary_status,
        "monitoring run completed"
    );
}
