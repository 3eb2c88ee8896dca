//! # ashwam-core
//!
//! Foundation crate for the Ashwam parser monitor.
//! Defines the typed record model (with its raw-to-validated parsing step),
//! report models, errors, config, constants, and the I/O seam traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod record;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MonitorConfig;
pub use errors::{MonitorError, MonitorResult};
pub use record::{
    Domain, ExtractionItem, ExtractionRecord, Journal, JournalIndex, Polarity, PolarityField,
    RequiredItemField, SchemaDefect,
};
