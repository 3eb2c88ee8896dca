// Single source of truth for all default values.

// --- Canary ---
pub const DEFAULT_CANARY_THRESHOLD: f64 = 0.8;

// --- Drift ---
pub const DEFAULT_VOLUME_CHANGE_FLOOR: f64 = 0.001;
