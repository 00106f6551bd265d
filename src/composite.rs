use crate::report::{is_unavailable, NormTable, WeightTable};

/// Weighted sum of norms over the weight table's keys, rounded to two
/// decimals.
///
/// Each weight divides by 100 — not by the table's sum. A weight table
/// whose values do not add up to 100 therefore yields a composite that is
/// not bounded to [0,100]. That is the scale downstream consumers have
/// always read, so it is preserved rather than renormalized.
///
/// Keys missing from the norm table contribute 0, as do "unavailable"
/// sentinels and non-finite values.
pub fn composite(norms: &NormTable, weights: &WeightTable) -> f64 {
    let sum: f64 = weights
        .iter()
        .map(|(key, weight)| contribution(norms, key) * weight / 100.0)
        .sum();
    (sum * 100.0).round() / 100.0
}

fn contribution(norms: &NormTable, key: &str) -> f64 {
    match norms.get(key) {
        Some(&value) if value.is_finite() && !is_unavailable(value) => value,
        _ => 0.0,
    }
}

/// Norm values restricted to weighted keys, for the breakdown artifact.
///
/// Absent keys show as 0 (mirroring their composite contribution);
/// sentinels stay visible as -1 so a reader can tell "not computed" from
/// "scored zero".
pub fn breakdown(norms: &NormTable, weights: &WeightTable) -> NormTable {
    weights
        .keys()
        .map(|key| (key.clone(), norms.get(key).copied().unwrap_or(0.0)))
        .collect()
}
