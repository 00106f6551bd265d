use super::clamp100;
use serde_json::Value;

/// Line-coverage percentage from a coverage summary artifact.
///
/// Reads `total.lines.pct`, falling back to `total.lines.percentage`
/// (summary formats disagree on the key name). Clamped to [0,100] and
/// rounded to the nearest integer. Any extraction failure — absent
/// artifact, missing keys, wrong shape — scores 0: untracked coverage is
/// a correctness penalty, not an unknown.
pub fn normalize(artifact: Option<&Value>) -> f64 {
    let pct = artifact
        .and_then(|v| {
            v.pointer("/total/lines/pct")
                .or_else(|| v.pointer("/total/lines/percentage"))
        })
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    clamp100(pct).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_pct() {
        let cov = json!({"total": {"lines": {"pct": 83.4}}});
        assert_eq!(normalize(Some(&cov)), 83.0);
    }

    #[test]
    fn falls_back_to_percentage_key() {
        let cov = json!({"total": {"lines": {"percentage": 91.6}}});
        assert_eq!(normalize(Some(&cov)), 92.0);
    }

    #[test]
    fn absent_artifact_scores_zero() {
        assert_eq!(normalize(None), 0.0);
    }

    #[test]
    fn wrong_shape_scores_zero() {
        assert_eq!(normalize(Some(&json!({"total": {"branches": {}}}))), 0.0);
        assert_eq!(normalize(Some(&json!([1, 2, 3]))), 0.0);
        assert_eq!(normalize(Some(&json!({"total": {"lines": {"pct": "high"}}}))), 0.0);
    }

    #[test]
    fn output_is_clamped_integer() {
        for pct in [-20.0, 0.0, 33.3, 99.99, 140.0] {
            let cov = json!({"total": {"lines": {"pct": pct}}});
            let norm = normalize(Some(&cov));
            assert!((0.0..=100.0).contains(&norm));
            assert_eq!(norm, norm.round());
        }
        let over = json!({"total": {"lines": {"pct": 140.0}}});
        assert_eq!(normalize(Some(&over)), 100.0);
    }
}
