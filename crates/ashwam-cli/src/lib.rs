//! # ashwam-cli
//!
//! Argument parsing and the end-to-end monitoring pipeline behind the
//! `ashwam` binary.

pub mod args;
pub mod pipeline;

pub use args::{Cli, Command};
pub use pipeline::{run_monitor, RunSummary};
