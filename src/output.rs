use crate::report::{is_unavailable, ScoreReport};

/// Output format for the console summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Text,
    Json,
}

/// Format a report as JSON.
pub fn format_json(report: &ScoreReport) -> String {
    serde_json::to_string_pretty(report).expect("report should be serializable")
}

/// Format a report as plain text (no colors).
pub fn format_text(report: &ScoreReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Composite score: {}\n", report.score));
    out.push_str(&format!("Computed at: {}\n", report.timestamp.to_rfc3339()));

    out.push_str("\nNorms:\n");
    for (key, value) in &report.norms {
        if is_unavailable(*value) {
            out.push_str(&format!("  {key:<16} n/a\n"));
        } else {
            out.push_str(&format!("  {key:<16} {value}\n"));
        }
    }

    out.push_str("\nBreakdown (weighted):\n");
    for (key, value) in &report.breakdown {
        let weight = report.weights.get(key).copied().unwrap_or(0.0);
        out.push_str(&format!("  {key:<16} {value:>6} x {weight}%\n"));
    }

    out
}

/// Format a report with terminal colors and score bars.
#[cfg(feature = "cli")]
pub fn format_pretty(report: &ScoreReport) -> String {
    use colored::Colorize;

    let mut out = String::new();

    let score_str = format!("{}", report.score);
    out.push_str(&format!(
        "{} {}\n",
        "Composite score:".bold(),
        colorize(report.score, &score_str).bold()
    ));
    out.push_str(&format!(
        "{} {}\n",
        "Computed at:".dimmed(),
        report.timestamp.to_rfc3339()
    ));

    out.push_str(&format!("\n{}\n", "Norms:".bold()));
    for (key, value) in &report.norms {
        if is_unavailable(*value) {
            out.push_str(&format!("  {:<16} {}\n", key, "n/a".dimmed()));
            continue;
        }
        let bar_len = (value.clamp(0.0, 100.0) / 100.0 * 30.0) as usize;
        let bar = "█".repeat(bar_len);
        out.push_str(&format!(
            "  {:<16} {} {}\n",
            key,
            colorize(*value, &bar),
            value
        ));
    }

    out.push_str(&format!("\n{}\n", "Breakdown (weighted):".bold()));
    for (key, value) in &report.breakdown {
        let weight = report.weights.get(key).copied().unwrap_or(0.0);
        out.push_str(&format!(
            "  {:<16} {:>6} {} {}%\n",
            key,
            value,
            "x".dimmed(),
            weight
        ));
    }

    out
}

#[cfg(feature = "cli")]
fn colorize(value: f64, text: &str) -> colored::ColoredString {
    use colored::Colorize;
    if value >= 80.0 {
        text.green()
    } else if value >= 50.0 {
        text.yellow()
    } else {
        text.red()
    }
}
