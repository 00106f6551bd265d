use serde_json::Value;

/// Severity-tiered penalty over security-scan findings.
///
/// Findings come from a `results` array, or from the artifact itself when
/// the scanner emits a bare array. Severity is read from `extra.severity`,
/// falling back to a top-level `severity` field; a missing or unknown
/// severity is treated as INFO. Starting from 100, each CRITICAL or HIGH
/// finding costs 30, each MEDIUM 10, and everything else 2, floored at 0.
///
/// An absent scan scores 100.
pub fn normalize(artifact: Option<&Value>) -> f64 {
    let Some(value) = artifact else {
        return 100.0;
    };
    let findings = value
        .get("results")
        .and_then(Value::as_array)
        .or_else(|| value.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut score: f64 = 100.0;
    for finding in findings {
        let severity = finding
            .pointer("/extra/severity")
            .or_else(|| finding.get("severity"))
            .and_then(Value::as_str)
            .unwrap_or("INFO")
            .to_ascii_uppercase();
        score -= match severity.as_str() {
            "CRITICAL" | "HIGH" => 30.0,
            "MEDIUM" => 10.0,
            _ => 2.0,
        };
    }
    score.max(0.0)
}
