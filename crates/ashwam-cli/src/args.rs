use std::path::PathBuf;

use ashwam_observability::LogFormat;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ashwam", version)]
#[command(about = "Label-free production monitor for journal parser output")]
pub struct Cli {
    /// Log output format: pretty or json.
    #[arg(long, global = true, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check invariants, compute drift, audit canaries, and write the reports.
    Run {
        /// Directory holding the JSONL inputs.
        #[arg(long)]
        data: PathBuf,
        /// Directory receiving the JSON reports; created if missing.
        #[arg(long)]
        out: PathBuf,
    },
}
