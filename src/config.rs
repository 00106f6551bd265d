use crate::blend::BlendMode;
use crate::report::{NormTable, WeightTable};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the engine looks for each input artifact.
///
/// Every input is optional on disk; these are just the paths probed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    pub coverage: PathBuf,
    pub lint: PathBuf,
    pub security: PathBuf,
    pub complexity: PathBuf,
    pub files_info: PathBuf,
    pub platform: PathBuf,
    pub scorecard: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            coverage: "coverage/coverage-summary.json".into(),
            lint: "lint_report.json".into(),
            security: "security_scan.json".into(),
            complexity: "complexity_report.json".into(),
            files_info: "files_info.json".into(),
            platform: "platform_metrics.json".into(),
            scorecard: "scorecard.json".into(),
        }
    }
}

/// Which output artifacts a run emits.
///
/// The norms artifact is the primary output and always written; the rest
/// are secondary and can be disabled by setting them to null in the config
/// file. Exactly which secondaries a pipeline wants has varied over time,
/// so it is a configuration choice, not a contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub norms: PathBuf,
    pub composite: Option<PathBuf>,
    pub breakdown: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            norms: "norms.json".into(),
            composite: Some("composite_score.txt".into()),
            breakdown: Some("breakdown.json".into()),
            report: Some("score_report.json".into()),
        }
    }
}

/// Full configuration for one scoring run.
///
/// Loaded from a JSON file with per-field defaults, so a config that sets
/// only `{"blend_mode": "override"}` is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub inputs: InputPaths,
    pub outputs: OutputPaths,
    /// Weight table for the composite.
    pub weights: WeightTable,
    /// Norm entries seeded before any tool artifact is consulted. Holds the
    /// dimensions no local tool measures yet.
    pub baselines: NormTable,
    /// How platform-derived norms merge with locally computed ones.
    pub blend_mode: BlendMode,
    /// Maintainability cost of one platform code smell.
    pub smell_penalty: f64,
    /// Source tree to count lines from when the file-metadata artifact is
    /// absent.
    pub source_root: Option<PathBuf>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            inputs: InputPaths::default(),
            outputs: OutputPaths::default(),
            weights: default_weights(),
            baselines: default_baselines(),
            blend_mode: BlendMode::Average,
            smell_penalty: 1.0,
            source_root: None,
        }
    }
}

fn table(entries: &[(&str, f64)]) -> NormTable {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Default composite weights. They sum to 100, but nothing enforces that;
/// see [`crate::composite::composite`] for what happens when they don't.
pub fn default_weights() -> WeightTable {
    table(&[
        ("correctness", 25.0),
        ("security", 20.0),
        ("maintainability", 15.0),
        ("readability", 10.0),
        ("robustness", 10.0),
        ("duplication", 6.0),
        ("performance", 6.0),
        ("consistency", 8.0),
    ])
}

/// Default baseline norms for dimensions with no local normalizer.
pub fn default_baselines() -> NormTable {
    table(&[
        ("robustness", 90.0),
        ("duplication", 95.0),
        ("performance", 85.0),
        ("consistency", 90.0),
    ])
}

impl ScoreConfig {
    /// File probed by [`ScoreConfig::load_or_default`].
    pub const FILE_NAME: &'static str = "codescore.json";

    /// Load a config file, failing on a missing or malformed file. For an
    /// explicitly named config, silence would hide a broken setup.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Load `codescore.json` from `dir` if present, falling back to
    /// defaults (with a warning) when it does not parse.
    pub fn load_or_default(dir: &Path) -> Self {
        let path = dir.join(Self::FILE_NAME);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(_) => {
                eprintln!(
                    "codescore: warning: failed to parse {}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Resolve every relative input/output path against `base`.
    pub fn rebase(&mut self, base: &Path) {
        let inputs = &mut self.inputs;
        for path in [
            &mut inputs.coverage,
            &mut inputs.lint,
            &mut inputs.security,
            &mut inputs.complexity,
            &mut inputs.files_info,
            &mut inputs.platform,
            &mut inputs.scorecard,
            &mut self.outputs.norms,
        ] {
            rebase_path(path, base);
        }
        let outputs = &mut self.outputs;
        for path in [&mut outputs.composite, &mut outputs.breakdown, &mut outputs.report]
            .into_iter()
            .flatten()
        {
            rebase_path(path, base);
        }
        if let Some(root) = &mut self.source_root {
            rebase_path(root, base);
        }
    }
}

fn rebase_path(path: &mut PathBuf, base: &Path) {
    if path.is_relative() {
        *path = base.join(&*path);
    }
}
