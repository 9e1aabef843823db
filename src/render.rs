//! Output rendering
//!
//! Text output is built into a `String` so commands only print once. JSON and
//! YAML go through `serde_json::Value`, whose map is key-sorted.

use colored::*;
use eyre::{Context, Result};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::profile::DesignProfile;
use crate::scorer::{Grade, ScoreResult};

/// Render a value of any serializable shape in a structured format
pub fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let value = serde_json::to_value(value).context("Failed to serialize output")?;
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(&value).context("Failed to render YAML"),
        OutputFormat::Json | OutputFormat::Text => {
            serde_json::to_string_pretty(&value).context("Failed to render JSON")
        }
    }
}

/// Render a score result in the requested format
pub fn render_score(result: &ScoreResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_score_text(result)),
        OutputFormat::Json | OutputFormat::Yaml => render_structured(result, format),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn colored_grade(grade: Grade) -> ColoredString {
    match grade {
        Grade::HighAssurance => grade.as_str().green().bold(),
        Grade::Balanced => grade.as_str().cyan().bold(),
        Grade::Prototype => grade.as_str().yellow().bold(),
        Grade::Experimental => grade.as_str().red().bold(),
    }
}

/// Human-readable score report
pub fn render_score_text(result: &ScoreResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "🔍 Web3 Design Score".bold()));
    out.push_str(&format!("Base Style   : {} ({})\n", result.profile_name, result.profile));
    out.push_str(&format!("Description  : {}\n", result.description));
    out.push('\n');

    out.push_str(&format!("{}\n", "Features:".cyan()));
    out.push_str(&format!("  Uses ZK proofs       : {}\n", yes_no(result.uses_zk)));
    out.push_str(&format!("  Uses FHE             : {}\n", yes_no(result.uses_fhe)));
    out.push_str(&format!("  Formal verification  : {}\n", yes_no(result.formal_proofs)));
    out.push_str(&format!("  Public audit         : {}\n", yes_no(result.public_audit)));
    out.push_str(&format!("  Chain type           : {}\n", result.chain_type));
    out.push('\n');

    out.push_str(&format!("{}\n", "Scores (0–1):".cyan()));
    out.push_str(&format!("  Privacy              : {:.3}\n", result.privacy_score));
    out.push_str(&format!("  Soundness            : {:.3}\n", result.soundness_score));
    out.push_str(&format!("  Performance          : {:.3}\n", result.performance_score));
    out.push('\n');

    out.push_str(&format!("Overall Score          : {:.3}\n", result.overall_score));
    out.push_str(&format!("Design Grade           : {}\n", colored_grade(result.grade)));

    out
}

/// Registry listing row
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRow {
    pub key: &'static str,
    pub name: &'static str,
    pub base_privacy: f64,
    pub base_soundness: f64,
    pub base_performance: f64,
    pub description: &'static str,
}

impl From<&DesignProfile> for StyleRow {
    fn from(p: &DesignProfile) -> Self {
        Self {
            key: p.key,
            name: p.name,
            base_privacy: p.base_privacy,
            base_soundness: p.base_soundness,
            base_performance: p.base_performance,
            description: p.description,
        }
    }
}

/// Render the profile registry in the requested format
pub fn render_styles(rows: &[StyleRow], format: OutputFormat) -> Result<String> {
    if format != OutputFormat::Text {
        return render_structured(&rows, format);
    }

    let key_width = rows.iter().map(|r| r.key.len()).max().unwrap_or(3).max(3);
    let mut out = String::new();
    out.push_str(&format!(
        "{:<key_width$}  {:>7}  {:>9}  {:>11}  {}\n",
        "KEY".bold(),
        "PRIVACY".bold(),
        "SOUNDNESS".bold(),
        "PERFORMANCE".bold(),
        "NAME".bold(),
        key_width = key_width,
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<key_width$}  {:>7.2}  {:>9.2}  {:>11.2}  {}\n",
            row.key.cyan(),
            row.base_privacy,
            row.base_soundness,
            row.base_performance,
            row.name,
            key_width = key_width,
        ));
        out.push_str(&format!("{:indent$}{}\n", "", row.description.dimmed(), indent = key_width + 2));
    }
    Ok(out)
}
