pub mod artifact;
pub mod blend;
pub mod composite;
pub mod config;
pub mod loc;
pub mod normalizers;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod writer;

use std::path::Path;

use anyhow::Result;
use config::ScoreConfig;
use report::ScoreReport;

/// Run one scoring pass with the given configuration and write the
/// configured artifacts.
pub fn score(config: &ScoreConfig) -> Result<ScoreReport> {
    let report = pipeline::run(config)?;
    writer::write_artifacts(&report, &config.outputs)?;
    Ok(report)
}

/// Run a scoring pass rooted at `base_dir`, picking up `codescore.json`
/// there when present and resolving all relative paths against it.
pub fn score_in(base_dir: &Path) -> Result<ScoreReport> {
    let mut config = ScoreConfig::load_or_default(base_dir);
    config.rebase(base_dir);
    score(&config)
}
