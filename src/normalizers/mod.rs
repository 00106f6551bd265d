pub mod complexity;
pub mod coverage;
pub mod lint;
pub mod platform;
pub mod scorecard;
pub mod security;

use serde_json::Value;

/// Clamp a raw score onto the 0–100 norm scale.
pub(crate) fn clamp100(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Numeric value of a JSON leaf, accepting numbers and numeric strings.
///
/// Platform metric exports and hand-authored scorecards both quote numbers
/// as strings often enough that rejecting them would be a footgun.
pub(crate) fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
