//! Design scoring
//!
//! Starts from a base profile, applies fixed additive deltas for each selected
//! feature and the deployment model, clamps every dimension to [0, 1], then
//! weights the clamped values into an overall score and a grade.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::DesignProfile;

const SOUNDNESS_WEIGHT: f64 = 0.45;
const PRIVACY_WEIGHT: f64 = 0.35;
const PERFORMANCE_WEIGHT: f64 = 0.20;

/// Deployment model of the design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    #[default]
    Rollup,
    Sidechain,
    Appchain,
    /// Anything else; contributes no delta
    #[serde(other)]
    Other,
}

impl ChainType {
    pub fn as_str(self) -> &'static str {
        match self {
            ChainType::Rollup => "rollup",
            ChainType::Sidechain => "sidechain",
            ChainType::Appchain => "appchain",
            ChainType::Other => "other",
        }
    }

    fn delta(self) -> Delta {
        match self {
            ChainType::Rollup => Delta::new(0.0, 0.02, 0.05),
            ChainType::Sidechain => Delta::new(0.0, -0.03, 0.08),
            ChainType::Appchain => Delta::new(0.0, 0.0, 0.04),
            ChainType::Other => Delta::ZERO,
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete label derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "experimental")]
    Experimental,
    #[serde(rename = "prototype")]
    Prototype,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "high assurance")]
    HighAssurance,
}

impl Grade {
    /// Grade an unrounded overall score; lower bounds are inclusive
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 0.80 {
            Grade::HighAssurance
        } else if overall >= 0.65 {
            Grade::Balanced
        } else if overall >= 0.50 {
            Grade::Prototype
        } else {
            Grade::Experimental
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::Experimental => "experimental",
            Grade::Prototype => "prototype",
            Grade::Balanced => "balanced",
            Grade::HighAssurance => "high assurance",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additive adjustment to the three dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
struct Delta {
    privacy: f64,
    soundness: f64,
    performance: f64,
}

impl Delta {
    const ZERO: Delta = Delta::new(0.0, 0.0, 0.0);
    const ZK: Delta = Delta::new(0.07, 0.03, -0.03);
    const FHE: Delta = Delta::new(0.05, 0.04, -0.10);
    const FORMAL_PROOFS: Delta = Delta::new(0.0, 0.12, -0.02);
    const PUBLIC_AUDIT: Delta = Delta::new(0.0, 0.08, 0.0);

    const fn new(privacy: f64, soundness: f64, performance: f64) -> Self {
        Self {
            privacy,
            soundness,
            performance,
        }
    }
}

/// Per-invocation scoring input
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput {
    pub profile: &'static DesignProfile,
    pub uses_zk: bool,
    pub uses_fhe: bool,
    pub formal_proofs: bool,
    pub public_audit: bool,
    pub chain_type: ChainType,
}

impl ScoreInput {
    /// Input with no features selected
    pub fn new(profile: &'static DesignProfile, chain_type: ChainType) -> Self {
        Self {
            profile,
            uses_zk: false,
            uses_fhe: false,
            formal_proofs: false,
            public_audit: false,
            chain_type,
        }
    }
}

/// Scoring output; the four scores are rounded to 3 decimals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub profile: &'static str,
    pub profile_name: &'static str,
    pub description: &'static str,
    pub uses_zk: bool,
    pub uses_fhe: bool,
    pub formal_proofs: bool,
    pub public_audit: bool,
    pub chain_type: ChainType,
    pub privacy_score: f64,
    pub soundness_score: f64,
    pub performance_score: f64,
    pub overall_score: f64,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy)]
struct Dimensions {
    privacy: f64,
    soundness: f64,
    performance: f64,
}

impl Dimensions {
    fn apply(&mut self, label: &str, delta: Delta) {
        debug!(
            "Applying {} delta: privacy {:+}, soundness {:+}, performance {:+}",
            label, delta.privacy, delta.soundness, delta.performance
        );
        self.privacy += delta.privacy;
        self.soundness += delta.soundness;
        self.performance += delta.performance;
    }

    fn clamped(self) -> Self {
        Self {
            privacy: clamp(self.privacy),
            soundness: clamp(self.soundness),
            performance: clamp(self.performance),
        }
    }

    fn overall(&self) -> f64 {
        clamp(SOUNDNESS_WEIGHT * self.soundness + PRIVACY_WEIGHT * self.privacy + PERFORMANCE_WEIGHT * self.performance)
    }
}

/// Score a design
pub fn score(input: &ScoreInput) -> ScoreResult {
    let profile = input.profile;
    let mut dims = Dimensions {
        privacy: profile.base_privacy,
        soundness: profile.base_soundness,
        performance: profile.base_performance,
    };

    // Order matters for floating point reproducibility
    if input.uses_zk {
        dims.apply("zk", Delta::ZK);
    }
    if input.uses_fhe {
        dims.apply("fhe", Delta::FHE);
    }
    if input.formal_proofs {
        dims.apply("formal proofs", Delta::FORMAL_PROOFS);
    }
    if input.public_audit {
        dims.apply("public audit", Delta::PUBLIC_AUDIT);
    }
    dims.apply(input.chain_type.as_str(), input.chain_type.delta());

    let dims = dims.clamped();
    let overall = dims.overall();
    // Grade before rounding
    let grade = Grade::from_overall(overall);

    debug!(
        "Scored {}: privacy={} soundness={} performance={} overall={} grade={}",
        profile.key, dims.privacy, dims.soundness, dims.performance, overall, grade
    );

    ScoreResult {
        profile: profile.key,
        profile_name: profile.name,
        description: profile.description,
        uses_zk: input.uses_zk,
        uses_fhe: input.uses_fhe,
        formal_proofs: input.formal_proofs,
        public_audit: input.public_audit,
        chain_type: input.chain_type,
        privacy_score: round3(dims.privacy),
        soundness_score: round3(dims.soundness),
        performance_score: round3(dims.performance),
        overall_score: round3(overall),
        grade,
    }
}

fn clamp(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Round to 3 decimals, ties to even on the exact binary value
fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}
