//! Base design profiles
//!
//! The registry is a fixed table: three named starting points, each supplying
//! initial privacy, soundness, and performance values.

use clap::ValueEnum;
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named starting point for scoring
#[derive(Debug, Clone, PartialEq)]
pub struct DesignProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub base_privacy: f64,
    pub base_soundness: f64,
    pub base_performance: f64,
    pub description: &'static str,
}

pub static PROFILES: [DesignProfile; 3] = [
    DesignProfile {
        key: "aztec",
        name: "Aztec-style zk Rollup",
        base_privacy: 0.92,
        base_soundness: 0.82,
        base_performance: 0.60,
        description: "Privacy-first zk rollup with encrypted state and zk proofs.",
    },
    DesignProfile {
        key: "zama",
        name: "Zama-style FHE Layer",
        base_privacy: 0.88,
        base_soundness: 0.87,
        base_performance: 0.45,
        description: "FHE compute stack where data and logic remain encrypted.",
    },
    DesignProfile {
        key: "soundness",
        name: "Soundness-First Protocol Lab",
        base_privacy: 0.55,
        base_soundness: 0.98,
        base_performance: 0.70,
        description: "Specification-driven engineering with strong formal proofs.",
    },
];

/// Base design style, selectable on the command line and in config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Style {
    /// Privacy-first zk rollup
    #[default]
    Aztec,
    /// FHE compute layer
    Zama,
    /// Soundness-first protocol lab
    Soundness,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Aztec, Style::Zama, Style::Soundness];

    /// Get the base profile for this style
    pub fn profile(self) -> &'static DesignProfile {
        match self {
            Style::Aztec => &PROFILES[0],
            Style::Zama => &PROFILES[1],
            Style::Soundness => &PROFILES[2],
        }
    }

    pub fn key(self) -> &'static str {
        self.profile().key
    }
}

impl TryFrom<String> for Style {
    type Error = eyre::Report;

    fn try_from(key: String) -> Result<Self> {
        let profile = lookup(&key)?;
        Style::ALL
            .into_iter()
            .find(|s| s.key() == profile.key)
            .ok_or_else(|| eyre::eyre!("Unknown style: {}", key))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Look up a profile by its style key
pub fn lookup(key: &str) -> Result<&'static DesignProfile> {
    PROFILES
        .iter()
        .find(|p| p.key == key)
        .ok_or_else(|| eyre::eyre!("Unknown style: {}", key))
}
