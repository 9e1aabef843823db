use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{info, warn};
use std::fs;

mod cli;
mod commands;
mod config;
mod profile;
mod render;
mod scorer;

use cli::{Cli, Commands};
use config::Config;

fn setup_logging(cli: &Cli, config: &Config) -> Result<()> {
    let log_dir = Config::log_dir();
    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("web3-design-scorer.log");

    // Logs go to a file so stdout carries only the report
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder = env_logger::Builder::new();

    // RUST_LOG env var takes precedence, then --verbose, then config log_level
    let source = if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
        "RUST_LOG env"
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
        "--verbose"
    } else {
        builder.filter_level(config.log_level.as_filter());
        "config"
    };

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!("Log level from {}", source);
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        None => commands::score::run(&cli.score, &config),
        Some(Commands::Styles { json, format }) => commands::styles::run(json, format, &config),
        Some(Commands::Completions { shell }) => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first; invalid enum values exit here
    let cli = Cli::parse();

    // Load configuration first; it decides the log level
    let (config, skipped) = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // File logging is best-effort; the report must still print
    if let Err(e) = setup_logging(&cli, &config) {
        eprintln!("{} File logging disabled: {:#}", "warning:".yellow(), e);
    }

    for message in &skipped {
        eprintln!("{} {}", "warning:".yellow(), message);
        warn!("{}", message);
    }

    info!("Starting web3-design-scorer with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
