#![deny(unsafe_code)]

/// Multiplier profile of the five-year evolution sparkline.
const SMOOTH_PROFILE: [f64; 8] = [0.98, 1.0, 1.02, 1.01, 1.04, 1.06, 1.07, 1.09];

/// Multiplier profile of the small paired bars (births/deaths cards).
const SPARK_PROFILE: [f64; 5] = [0.7, 0.9, 1.1, 1.05, 1.2];

/// Synthetic gently-rising series anchored on a headline value.
///
/// The dataset has no history; the dashboard fakes a plausible trend from
/// the value's magnitude (log10, floored at 1 so tiny anchors still draw).
pub fn smooth_series(anchor: f64) -> Vec<f64> {
    let base = anchor.max(1.0).log10().max(1.0);
    SMOOTH_PROFILE.iter().map(|x| x * base).collect()
}

/// Synthetic mini-bar series scaled directly by the anchor.
pub fn spark_series(anchor: f64) -> Vec<f64> {
    let base = anchor.max(1.0);
    SPARK_PROFILE.iter().map(|x| x * base).collect()
}
