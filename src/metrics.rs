pub fn clamp01(v: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// Rounds to two decimal places for external presentation.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
