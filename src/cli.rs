use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::profile::Style;
use crate::scorer::ChainType;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// `--json` wins, then `--format`, then the configured default.
    pub fn resolve(json: bool, user_choice: Option<OutputFormat>, fallback: OutputFormat) -> OutputFormat {
        if json {
            return OutputFormat::Json;
        }
        user_choice.unwrap_or(fallback)
    }
}

#[derive(Parser)]
#[command(
    name = "web3-design-scorer",
    about = "Score a Web3 design along privacy, soundness, and performance dimensions, \
             inspired by Aztec, Zama, and soundness-focused labs.",
    version,
    args_conflicts_with_subcommands = true,
    after_help = "Logs are written to: ~/.local/share/web3-design-scorer/logs/web3-design-scorer.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config.yaml")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Log at debug level")]
    pub verbose: bool,

    #[command(flatten)]
    pub score: ScoreArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScoreArgs {
    /// Base design style (aztec, zama, soundness)
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Project uses zero-knowledge proofs for core logic
    #[arg(long)]
    pub zk: bool,

    /// Project uses fully homomorphic encryption (FHE)
    #[arg(long)]
    pub fhe: bool,

    /// Project relies on formal verification / machine-checked proofs
    #[arg(long)]
    pub formal: bool,

    /// Project has a public, independent audit
    #[arg(long)]
    pub audit: bool,

    /// Deployment model (rollup, sidechain, appchain, other)
    #[arg(long, value_enum)]
    pub chain_type: Option<ChainType>,

    /// Print JSON instead of human-readable text
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Output format
    #[arg(long, short = 'o', value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available base design styles
    Styles {
        /// Print JSON instead of human-readable text
        #[arg(long, conflicts_with = "format")]
        json: bool,

        /// Output format
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
