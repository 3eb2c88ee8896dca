//! # ashwam-validation
//!
//! Invariant checks over one snapshot of parser output.
//!
//! ## Dimensions
//! 1. **Schema**: journalid present, items a sequence, five required fields per item
//! 2. **Evidence**: evidence span found (case-insensitively) in the journal text
//! 3. **Hallucination**: non-empty span not found in the journal text
//! 4. **Contradiction**: same span cited with more than one polarity in one record

pub mod dimensions;
pub mod engine;

pub use engine::compute_invariants;
