use anyhow::Result;
use chrono::Utc;
use serde_json::Value;

use crate::artifact::read_artifact;
use crate::blend::{self, BlendMode};
use crate::composite;
use crate::config::ScoreConfig;
use crate::loc;
use crate::normalizers::{complexity, coverage, lint, platform, scorecard, security};
use crate::report::ScoreReport;

/// One synchronous scoring pass: read every artifact, normalize, blend,
/// and compute the composite. Writing the result is [`crate::writer`]'s
/// job.
///
/// Missing and corrupt inputs degrade to per-normalizer defaults rather
/// than failing the run.
pub fn run(config: &ScoreConfig) -> Result<ScoreReport> {
    let inputs = &config.inputs;
    let coverage_artifact = read_artifact(&inputs.coverage);
    let lint_artifact = read_artifact(&inputs.lint);
    let security_artifact = read_artifact(&inputs.security);
    let complexity_artifact = read_artifact(&inputs.complexity);
    let files_info = read_artifact(&inputs.files_info);
    let platform_artifact = read_artifact(&inputs.platform);
    let scorecard_artifact = read_artifact(&inputs.scorecard);

    let total_lines = total_lines(files_info.as_ref(), config);

    let mut norms = config.baselines.clone();
    norms.insert(
        "correctness".into(),
        coverage::normalize(coverage_artifact.as_ref()),
    );
    norms.insert(
        "security".into(),
        security::normalize(security_artifact.as_ref()),
    );
    norms.insert(
        "maintainability".into(),
        complexity::normalize(complexity_artifact.as_ref()),
    );
    norms.insert(
        "readability".into(),
        lint::normalize(lint_artifact.as_ref(), total_lines),
    );

    if let Some(export) = platform_artifact.as_ref() {
        let measures = platform::measures(export);
        let derived = platform::derive_norms(&measures, config.smell_penalty);
        blend::merge_into(&mut norms, &derived, config.blend_mode);
    }

    // The scorecard is authoritative; it always overrides, whatever the
    // configured platform blend mode is.
    if let Some(card) = scorecard_artifact.as_ref() {
        let external = scorecard::passthrough(card);
        blend::merge_into(&mut norms, &external, BlendMode::Override);
    }

    let score = composite::composite(&norms, &config.weights);
    let breakdown = composite::breakdown(&norms, &config.weights);

    Ok(ScoreReport {
        score,
        norms,
        weights: config.weights.clone(),
        breakdown,
        timestamp: Utc::now(),
    })
}

fn total_lines(files_info: Option<&Value>, config: &ScoreConfig) -> u64 {
    if let Some(lines) = files_info
        .and_then(|info| info.get("total_lines"))
        .and_then(Value::as_u64)
    {
        return lines;
    }
    match &config.source_root {
        Some(root) => loc::count_source_lines(root),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoreConfig;
    use std::path::Path;

    fn config_in(dir: &Path) -> ScoreConfig {
        let mut config = ScoreConfig::default();
        config.rebase(dir);
        config
    }

    #[test]
    fn empty_directory_yields_documented_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let report = run(&config_in(dir.path())).unwrap();
        assert_eq!(report.norms["correctness"], 0.0);
        assert_eq!(report.norms["readability"], 100.0);
        assert_eq!(report.norms["security"], 100.0);
        assert_eq!(report.norms["maintainability"], 100.0);
        // Baselines survive untouched.
        assert_eq!(report.norms["robustness"], 90.0);
    }

    #[test]
    fn platform_export_blends_by_average_by_default() {
        let dir = tempfile::tempdir().unwrap();
        // No complexity report -> maintainability baseline of 100; platform
        // smells pull it down by the average blend.
        std::fs::write(
            dir.path().join("platform_metrics.json"),
            r#"{"component": {"measures": [
                {"metric": "code_smells", "value": 40},
                {"metric": "security_rating", "value": "1"}
            ]}}"#,
        )
        .unwrap();
        let report = run(&config_in(dir.path())).unwrap();
        // (100 + 60) / 2
        assert_eq!(report.norms["maintainability"], 80.0);
        // (100 + 100) / 2
        assert_eq!(report.norms["security"], 100.0);
    }

    #[test]
    fn override_mode_takes_platform_values() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("platform_metrics.json"),
            r#"{"component": {"measures": [{"metric": "code_smells", "value": 40}]}}"#,
        )
        .unwrap();
        let mut config = ScoreConfig {
            blend_mode: BlendMode::Override,
            ..ScoreConfig::default()
        };
        config.rebase(dir.path());
        let report = run(&config).unwrap();
        assert_eq!(report.norms["maintainability"], 60.0);
    }

    #[test]
    fn scorecard_overrides_everything() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("scorecard.json"),
            r#"{"issuesFound": 3, "security": 42}"#,
        )
        .unwrap();
        let report = run(&config_in(dir.path())).unwrap();
        assert_eq!(report.norms["issuesFound"], 3.0);
        // Local security default was 100; the scorecard wins.
        assert_eq!(report.norms["security"], 42.0);
    }

    #[test]
    fn files_info_drives_lint_density() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("files_info.json"), r#"{"total_lines": 2000}"#).unwrap();
        std::fs::write(
            dir.path().join("lint_report.json"),
            r#"[{"messages": [1, 2, 3, 4]}]"#,
        )
        .unwrap();
        let report = run(&config_in(dir.path())).unwrap();
        // 4 issues / 2 KLOC * 8 = 16 off 100
        assert_eq!(report.norms["readability"], 84.0);
    }

    #[test]
    fn source_root_fallback_counts_lines() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        // 1000 lines, so 8 messages cost exactly 64 points.
        std::fs::write(src.join("app.ts"), "x\n".repeat(1000)).unwrap();
        std::fs::write(
            dir.path().join("lint_report.json"),
            r#"[{"messages": [1, 2, 3, 4, 5, 6, 7, 8]}]"#,
        )
        .unwrap();
        let mut config = ScoreConfig {
            source_root: Some("src".into()),
            ..ScoreConfig::default()
        };
        config.rebase(dir.path());
        let report = run(&config).unwrap();
        assert_eq!(report.norms["readability"], 36.0);
    }

    #[test]
    fn composite_uses_configured_weights() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("scorecard.json"),
            r#"{"correctness": 80, "security": 60}"#,
        )
        .unwrap();
        let mut config = ScoreConfig {
            weights: [("correctness", 50.0), ("security", 50.0)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            ..ScoreConfig::default()
        };
        config.rebase(dir.path());
        let report = run(&config).unwrap();
        assert_eq!(report.score, 70.0);
        assert_eq!(report.breakdown.len(), 2);
    }
}
