use serde_json::Value;
use std::path::Path;

/// Read and parse a JSON artifact left on disk by an external tool.
///
/// A missing file is an expected state (the tool did not run, or does not
/// apply to this project) and returns `None` silently. An unreadable or
/// unparsable file also returns `None`, after a warning naming the path and
/// the error: one corrupt artifact degrades the run to defaults, it never
/// aborts it.
pub fn read_artifact(path: &Path) -> Option<Value> {
    if !path.exists() {
        return None;
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn(path, &err.to_string());
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn(path, &err.to_string());
            None
        }
    }
}

fn warn(path: &Path, err: &str) {
    eprintln!("codescore: warning: failed to read {}: {err}", path.display());
}
