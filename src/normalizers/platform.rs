use super::{clamp100, numeric};
use crate::report::NormTable;
use serde_json::Value;
use std::collections::BTreeMap;

/// Flatten a platform metrics export into a metric → value map.
///
/// The export shape is `{component: {measures: [{metric, value}, ...]}}`.
/// Values arrive as numbers or as quoted numeric strings depending on the
/// export endpoint; entries that are neither are dropped.
pub fn measures(artifact: &Value) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();
    let Some(entries) = artifact.pointer("/component/measures").and_then(Value::as_array) else {
        eprintln!("codescore: warning: platform export has no component.measures; ignoring");
        return out;
    };
    for entry in entries {
        let Some(metric) = entry.get("metric").and_then(Value::as_str) else {
            continue;
        };
        let Some(value) = entry.get("value").and_then(numeric) else {
            continue;
        };
        out.insert(metric.to_string(), value);
    }
    out
}

/// Derive norms from platform measures.
///
/// Each key is computed independently; a measure missing from the map reads
/// as 0 inside these formulas (no penalty, or a perfect rating offset),
/// never as the norm-table "unavailable" sentinel.
///
/// `smell_penalty` is the cost of one code smell against maintainability —
/// a tunable, not a constant, since its calibration has a history of
/// changing.
pub fn derive_norms(measures: &BTreeMap<String, f64>, smell_penalty: f64) -> NormTable {
    let get = |metric: &str| measures.get(metric).copied().unwrap_or(0.0);
    let mut norms = NormTable::new();

    // sqale_index is the platform's technical debt estimate, in minutes.
    let maintainability =
        (100.0 - smell_penalty * get("code_smells") - 0.2 * get("sqale_index")).max(0.0);
    norms.insert("maintainability".into(), maintainability);

    // The complexity measure is a project-wide total, not a per-function
    // average, hence the direct subtraction.
    norms.insert("performance".into(), (100.0 - get("complexity")).max(0.0));

    norms.insert(
        "duplication".into(),
        (100.0 - get("duplicated_lines_density")).round().max(0.0),
    );

    // Ratings are 1 (best) to 5 (worst); invert linearly so 1 -> 100, 5 -> 0.
    norms.insert("reliability".into(), invert_rating(get("reliability_rating")));
    norms.insert("security".into(), invert_rating(get("security_rating")));

    norms
}

fn invert_rating(rating: f64) -> f64 {
    clamp100((5.0 - rating) / 4.0 * 100.0)
}
