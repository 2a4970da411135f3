//! Formatting helpers for temperatures and variances.

pub fn format_temperature(value: f64) -> String {
    format!("{value:.2}℃")
}

pub fn format_variance(value: f64) -> String {
    format!("{value:+.2}℃")
}

/// One-decimal label for legend thresholds.
pub fn format_threshold(value: f64) -> String {
    format!("{value:.1}")
}
