use crate::report::{is_unavailable, NormTable};
use serde::{Deserialize, Serialize};

/// How two sources' values for the same norm key are merged.
///
/// An explicit configuration choice, not hidden behavior: averaging suits
/// two sources of comparable trust, override suits an authoritative one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Rounded midpoint of the existing and incoming values.
    #[default]
    Average,
    /// The incoming value replaces the existing one.
    Override,
}

/// Merge an incoming norm into an existing one.
///
/// A non-finite incoming value leaves the existing one untouched. An
/// existing "unavailable" sentinel is replaced outright regardless of mode,
/// so an average is never taken against -1.
pub fn blend(existing: f64, incoming: f64, mode: BlendMode) -> f64 {
    if !incoming.is_finite() {
        return existing;
    }
    if is_unavailable(existing) {
        return incoming;
    }
    match mode {
        BlendMode::Average => ((existing + incoming) / 2.0).round(),
        BlendMode::Override => incoming,
    }
}

/// Blend every entry of `incoming` into `norms`; keys new to the table are
/// inserted as-is.
pub fn merge_into(norms: &mut NormTable, incoming: &NormTable, mode: BlendMode) {
    for (key, &value) in incoming {
        let merged = match norms.get(key) {
            Some(&existing) => blend(existing, value, mode),
            None => value,
        };
        norms.insert(key.clone(), merged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::UNAVAILABLE;

    #[test]
    fn averaging_rounds_midpoint() {
        assert_eq!(blend(50.0, 80.0, BlendMode::Average), 65.0);
        assert_eq!(blend(50.0, 81.0, BlendMode::Average), 66.0);
    }

    #[test]
    fn override_takes_incoming() {
        assert_eq!(blend(50.0, 80.0, BlendMode::Override), 80.0);
    }

    #[test]
    fn non_finite_incoming_keeps_existing() {
        for mode in [BlendMode::Average, BlendMode::Override] {
            assert_eq!(blend(50.0, f64::NAN, mode), 50.0);
            assert_eq!(blend(50.0, f64::INFINITY, mode), 50.0);
        }
    }

    #[test]
    fn sentinel_existing_is_replaced_not_averaged() {
        assert_eq!(blend(UNAVAILABLE, 80.0, BlendMode::Average), 80.0);
        assert_eq!(blend(UNAVAILABLE, 80.0, BlendMode::Override), 80.0);
    }

    #[test]
    fn merge_inserts_new_keys_and_blends_shared_ones() {
        let mut norms = NormTable::new();
        norms.insert("security".into(), 50.0);
        let mut incoming = NormTable::new();
        incoming.insert("security".into(), 80.0);
        incoming.insert("duplication".into(), 97.0);
        merge_into(&mut norms, &incoming, BlendMode::Average);
        assert_eq!(norms["security"], 65.0);
        assert_eq!(norms["duplication"], 97.0);
    }
}
