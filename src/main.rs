use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use codescore::config::ScoreConfig;
use codescore::output::{self, OutputFormat};

#[derive(Parser)]
#[command(
    name = "codescore",
    about = "Composite code-quality scoring over static-analysis artifacts"
)]
struct Cli {
    /// Directory holding the tool artifacts (and receiving the outputs).
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Config file to use instead of <base-dir>/codescore.json.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: pretty, text, or json.
    #[arg(long, default_value = "pretty")]
    format: String,
}

fn parse_format(s: &str) -> Result<OutputFormat> {
    match s {
        "pretty" => Ok(OutputFormat::Pretty),
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("unknown format: {other} (expected pretty, text, or json)"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let fmt = parse_format(&cli.format)?;

    let mut config = match &cli.config {
        Some(path) => ScoreConfig::load(path).context("failed to load config")?,
        None => ScoreConfig::load_or_default(&cli.base_dir),
    };
    config.rebase(&cli.base_dir);

    let report = codescore::score(&config).context("scoring run failed")?;

    let summary = match fmt {
        OutputFormat::Json => output::format_json(&report),
        OutputFormat::Text => output::format_text(&report),
        OutputFormat::Pretty => output::format_pretty(&report),
    };
    println!("{summary}");

    Ok(())
}
