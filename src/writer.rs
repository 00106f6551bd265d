use anyhow::{Context, Result};
use std::path::Path;

use crate::config::OutputPaths;
use crate::report::ScoreReport;

/// Persist the run's artifacts.
///
/// Only the primary norms artifact may fail the run. The secondary
/// artifacts (composite text, breakdown, full report) warn and continue on
/// a write error — a legacy mirror file on a read-only mount must not cost
/// a CI run its norms.
pub fn write_artifacts(report: &ScoreReport, outputs: &OutputPaths) -> Result<()> {
    let norms_json = serde_json::to_string_pretty(&report.norms)?;
    std::fs::write(&outputs.norms, norms_json)
        .with_context(|| format!("failed to write norms artifact {}", outputs.norms.display()))?;

    if let Some(path) = &outputs.composite {
        write_secondary(path, &report.score.to_string());
    }
    if let Some(path) = &outputs.breakdown {
        match serde_json::to_string_pretty(&report.breakdown) {
            Ok(json) => write_secondary(path, &json),
            Err(err) => warn(path, &err.to_string()),
        }
    }
    if let Some(path) = &outputs.report {
        match serde_json::to_string_pretty(report) {
            Ok(json) => write_secondary(path, &json),
            Err(err) => warn(path, &err.to_string()),
        }
    }
    Ok(())
}

fn write_secondary(path: &Path, contents: &str) {
    if let Err(err) = std::fs::write(path, contents) {
        warn(path, &err.to_string());
    }
}

fn warn(path: &Path, err: &str) {
    eprintln!("codescore: warning: failed to write {}: {err}", path.display());
}
