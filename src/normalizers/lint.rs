use super::clamp100;
use serde_json::Value;

/// Penalty per diagnostic per thousand lines of code.
const PENALTY_PER_ISSUE_PER_KLOC: f64 = 8.0;

/// Diagnostic density per KLOC mapped onto 0–100.
///
/// The artifact is an array of per-file entries, each with a `messages`
/// array. Total message count is divided by the project's KLOC (floored at
/// 0.001 so an unknown line count cannot divide by zero), scaled by
/// [`PENALTY_PER_ISSUE_PER_KLOC`], and subtracted from 100.
///
/// An absent report scores 100: a project that never ran the linter is
/// assumed clean. This is the deliberate optimistic counterpart of the
/// coverage policy.
pub fn normalize(artifact: Option<&Value>, total_lines: u64) -> f64 {
    let Some(value) = artifact else {
        return 100.0;
    };
    let entries = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
    let total_messages: usize = entries
        .iter()
        .filter_map(|entry| entry.get("messages").and_then(Value::as_array))
        .map(Vec::len)
        .sum();
    let kloc = (total_lines as f64 / 1000.0).max(0.001);
    let issues_per_kloc = total_messages as f64 / kloc;
    clamp100(100.0 - issues_per_kloc * PENALTY_PER_ISSUE_PER_KLOC).round()
}
