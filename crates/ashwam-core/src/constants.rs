/// Monitor version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Input files (newline-delimited JSON) ---
pub const JOURNALS_FILE: &str = "journals.jsonl";
pub const DAY0_OUTPUTS_FILE: &str = "parser_outputs_day0.jsonl";
pub const DAY1_OUTPUTS_FILE: &str = "parser_outputs_day1.jsonl";
pub const CANARY_GOLD_FILE: &str = "gold.jsonl";

// --- Output files (pretty JSON) ---
pub const INVARIANT_REPORT_FILE: &str = "out_invariant_report.json";
pub const DRIFT_REPORT_FILE: &str = "out_drift_report.json";
pub const CANARY_REPORT_FILE: &str = "out_canary_report.json";

/// Map key used for a missing journal id or a missing domain label.
pub const NULL_LABEL_KEY: &str = "null";

/// Bucket value counted by the high-intensity / high-arousal rates.
pub const BUCKET_HIGH: &str = "high";

/// Bucket value counted as uncertainty.
pub const BUCKET_UNKNOWN: &str = "unknown";
