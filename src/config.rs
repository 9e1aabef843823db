use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::profile::Style;
use crate::scorer::ChainType;

const APP_NAME: &str = "web3-design-scorer";

/// Log verbosity from config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub defaults: DefaultsConfig,
}

/// Values used when the matching CLI flag is omitted
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub style: Style,
    pub chain_type: ChainType,
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Returns the config plus one message per source that existed but failed
    /// to load. Those are returned rather than logged because logging is set up
    /// from the loaded config.
    pub fn load(config_path: Option<&PathBuf>) -> Result<(Self, Vec<String>)> {
        // An explicit path must load
        if let Some(path) = config_path {
            let path = Self::expand_path(path);
            let config =
                Self::load_from_file(&path).context(format!("Failed to load config from {}", path.display()))?;
            return Ok((config, Vec::new()));
        }

        let mut candidates = Vec::new();

        // WEB3_SCORER_CONFIG env var
        if let Ok(env_path) = std::env::var("WEB3_SCORER_CONFIG") {
            candidates.push(Self::expand_path(Path::new(&env_path)));
        }

        // ~/.config/web3-design-scorer/config.yaml
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(APP_NAME).join("config.yaml"));
        }

        // ./web3-design-scorer.yaml (for development)
        candidates.push(PathBuf::from(format!("{}.yaml", APP_NAME)));

        let mut skipped = Vec::new();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return Ok((config, skipped)),
                Err(e) => skipped.push(format!("Ignoring config {}: {:#}", path.display(), e)),
            }
        }

        Ok((Self::default(), skipped))
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        serde_yaml::from_str(&content).context("Failed to parse config file")
    }

    /// Directory holding the log file
    pub fn log_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join("logs")
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}
