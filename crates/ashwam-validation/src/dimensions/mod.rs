//! Per-record invariant dimensions. Each is a pure function over one record;
//! the engine aggregates them.

pub mod contradiction;
pub mod evidence;
pub mod schema;
