use super::numeric;
use crate::report::NormTable;
use serde_json::Value;

/// Copy the numeric fields of an externally authored scorecard verbatim.
///
/// The scorecard is a flat JSON object maintained outside the engine
/// (fields like `issuesFound`, `issuesFixed`, `fixAttempts`, `compilable`)
/// and is treated as authoritative: its values are merged into the norm
/// table in override mode, replacing anything computed locally. Values are
/// not rescaled or clamped here — the file is trusted as written.
///
/// Non-numeric fields are skipped with a warning, never an error.
pub fn passthrough(artifact: &Value) -> NormTable {
    let mut out = NormTable::new();
    let Some(fields) = artifact.as_object() else {
        eprintln!("codescore: warning: scorecard is not a JSON object; ignoring");
        return out;
    };
    for (key, value) in fields {
        match numeric(value) {
            Some(n) => {
                out.insert(key.clone(), n);
            }
            None => {
                eprintln!("codescore: warning: scorecard field {key:?} is not numeric; skipping");
            }
        }
    }
    out
}
