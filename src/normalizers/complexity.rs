use super::clamp100;
use serde_json::Value;

/// Average cyclomatic complexity mapped onto 0–100.
///
/// Complexity reports have no stable schema across tools, so the artifact
/// is walked as a plain JSON tree: every numeric leaf whose key matches the
/// predicate (default: contains "cyclomatic", case-insensitive) is sampled,
/// wherever it sits. The samples are averaged (1 when none are found, the
/// complexity of trivially simple code) and an average of `c` scores
/// `100 - 5*(c - 1)`, clamped and rounded.
///
/// An absent report scores 100.
pub fn normalize(artifact: Option<&Value>) -> f64 {
    normalize_with(artifact, &default_predicate)
}

/// [`normalize`] with a caller-supplied key predicate.
pub fn normalize_with(artifact: Option<&Value>, key_matches: &dyn Fn(&str) -> bool) -> f64 {
    let Some(value) = artifact else {
        return 100.0;
    };
    let mut samples = Vec::new();
    collect_samples(value, key_matches, &mut samples);
    let avg = if samples.is_empty() {
        1.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    };
    clamp100(100.0 - 5.0 * (avg - 1.0)).round()
}

fn default_predicate(key: &str) -> bool {
    key.to_ascii_lowercase().contains("cyclomatic")
}

fn collect_samples(value: &Value, key_matches: &dyn Fn(&str) -> bool, out: &mut Vec<f64>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key_matches(key) {
                    if let Some(n) = child.as_f64() {
                        out.push(n);
                        continue;
                    }
                }
                collect_samples(child, key_matches, out);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_samples(child, key_matches, out);
            }
        }
        _ => {}
    }
}
