//! Division helpers shared by every rate in the reports.

/// `numerator / denominator`, or 0.0 when the denominator is zero.
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// `numerator / max(1, denominator)`, used for per-item rates.
pub fn floored_ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator.max(1) as f64
}
