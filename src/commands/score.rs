//! Score command
//!
//! Merges CLI flags over config defaults, scores, and prints the report.

use eyre::Result;
use log::info;

use crate::cli::{OutputFormat, ScoreArgs};
use crate::config::Config;
use crate::render::render_score;
use crate::scorer::{ScoreInput, score};

/// Build the scoring input; CLI flags win over config defaults
pub fn build_input(args: &ScoreArgs, config: &Config) -> ScoreInput {
    let style = args.style.unwrap_or(config.defaults.style);
    let chain_type = args.chain_type.unwrap_or(config.defaults.chain_type);

    let mut input = ScoreInput::new(style.profile(), chain_type);
    input.uses_zk = args.zk;
    input.uses_fhe = args.fhe;
    input.formal_proofs = args.formal;
    input.public_audit = args.audit;
    input
}

pub fn run(args: &ScoreArgs, config: &Config) -> Result<()> {
    let input = build_input(args, config);
    let format = OutputFormat::resolve(args.json, args.format, config.defaults.format);

    info!(
        "Scoring style={} zk={} fhe={} formal={} audit={} chain_type={} format={:?}",
        input.profile.key,
        input.uses_zk,
        input.uses_fhe,
        input.formal_proofs,
        input.public_audit,
        input.chain_type,
        format
    );

    let result = score(&input);
    info!("Overall score {} graded {}", result.overall_score, result.grade);

    let rendered = render_score(&result, format)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}
