//! Canonical decimal rendering of the sorted values

use itertools::Itertools;

/// Render one value in canonical decimal form.
///
/// Every finite value with a zero fractional part keeps one fractional
/// digit (`5` -> `"5.0"`); all other values use the shortest decimal form
/// that round-trips.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Render the whole sequence as a single space-joined line
pub fn render_line(values: &[f64]) -> String {
    values.iter().map(|v| format_value(*v)).join(" ")
}
