use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Norm table: quality dimension name → score, normally in [0,100].
///
/// The key set is open-ended; different runs populate different subsets
/// depending on which tool artifacts were present.
pub type NormTable = BTreeMap<String, f64>;

/// Weight table: quality dimension name → non-negative weight.
pub type WeightTable = BTreeMap<String, f64>;

/// Sentinel meaning "not computed this run".
///
/// A norm carrying this value is excluded from the weighted composite and
/// never averaged against; see [`crate::blend::blend`] and
/// [`crate::composite::composite`].
pub const UNAVAILABLE: f64 = -1.0;

/// Whether a norm value is the [`UNAVAILABLE`] sentinel.
pub fn is_unavailable(value: f64) -> bool {
    value == UNAVAILABLE
}

/// The full result of one scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Weighted composite score, rounded to two decimals.
    pub score: f64,
    /// Every norm computed this run.
    pub norms: NormTable,
    /// The weight table the composite was computed with.
    pub weights: WeightTable,
    /// Norm values restricted to weighted keys.
    pub breakdown: NormTable,
    /// When the run completed.
    pub timestamp: DateTime<Utc>,
}
