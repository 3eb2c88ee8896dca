//! # ashwam-storage
//!
//! Filesystem implementations of the record source and report sink seams.
//! Inputs are JSONL files in a data directory; reports are pretty JSON files
//! in an output directory.

pub mod jsonl;
pub mod sink;
pub mod source;

pub use sink::JsonFileSink;
pub use source::JsonlRecordSource;
