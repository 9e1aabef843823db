//! Styles command
//!
//! Lists the fixed base profiles.

use eyre::Result;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::profile::Style;
use crate::render::{StyleRow, render_styles};

pub fn run(json: bool, format: Option<OutputFormat>, config: &Config) -> Result<()> {
    let format = OutputFormat::resolve(json, format, config.defaults.format);
    let rows: Vec<StyleRow> = Style::ALL.iter().map(|s| StyleRow::from(s.profile())).collect();

    let rendered = render_styles(&rows, format)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}
