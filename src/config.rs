//! Agent configuration.
//!
//! An agent is built from an [`AgentConfig`]: which search algorithm to run,
//! which evaluation function to call at the leaves, and how many full agent
//! rounds to look ahead. Configurations can be assembled in code, parsed from
//! the string pair `(evaluator, depth)`, or loaded from a TOML file with
//! environment variable overrides.

use super::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::num::NonZeroU32;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Environment variable overriding [`AgentConfig::depth`].
pub const DEPTH_ENV: &str = "MULTIMINIMAX_DEPTH";
/// Environment variable overriding [`AgentConfig::algorithm`].
pub const ALGORITHM_ENV: &str = "MULTIMINIMAX_ALGORITHM";
/// Environment variable overriding [`AgentConfig::evaluator`].
pub const EVALUATOR_ENV: &str = "MULTIMINIMAX_EVALUATOR";

/// Number of full agent rounds to look ahead. Never zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u32")]
pub struct Depth(NonZeroU32);

impl Depth {
    pub fn new(depth: u32) -> Result<Self, ConfigError> {
        NonZeroU32::new(depth)
            .map(Depth)
            .ok_or_else(|| ConfigError::InvalidDepth(depth.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

const DEFAULT_DEPTH: NonZeroU32 = match NonZeroU32::new(2) {
    Some(d) => d,
    None => unreachable!(),
};

impl Default for Depth {
    fn default() -> Self {
        Depth(DEFAULT_DEPTH)
    }
}

impl TryFrom<u32> for Depth {
    type Error = ConfigError;

    fn try_from(depth: u32) -> Result<Self, Self::Error> {
        Depth::new(depth)
    }
}

impl FromStr for Depth {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .map(Depth)
            .ok_or_else(|| ConfigError::InvalidDepth(s.to_string()))
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The reduction applied at adversary nodes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Algorithm {
    /// Adversaries pick the worst outcome for the maximizer.
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning. Same values, fewer nodes.
    AlphaBeta,
    /// Adversaries pick uniformly at random among their legal actions.
    Expectimax,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
            Algorithm::Expectimax => "expectimax",
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Algorithm::AlphaBeta),
            "expectimax" => Ok(Algorithm::Expectimax),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which evaluation function to call at the leaves of the search.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum EvaluatorKind {
    /// The state's intrinsic score and nothing else.
    #[default]
    Score,
    /// Weighted score plus proximity terms, for deeper searches.
    Better,
    /// Unweighted score plus proximity terms, for one-ply reflex agents.
    Reflex,
}

impl EvaluatorKind {
    pub fn name(self) -> &'static str {
        match self {
            EvaluatorKind::Score => "score",
            EvaluatorKind::Better => "better",
            EvaluatorKind::Reflex => "reflex",
        }
    }
}

impl FromStr for EvaluatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "score" => Ok(EvaluatorKind::Score),
            "better" => Ok(EvaluatorKind::Better),
            "reflex" => Ok(EvaluatorKind::Reflex),
            _ => Err(ConfigError::UnknownEvaluator(s.to_string())),
        }
    }
}

impl TryFrom<String> for EvaluatorKind {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tunable constants of the proximity heuristics.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProximityWeights {
    /// Multiplier on the intrinsic score.
    pub score_weight: f64,
    /// Numerator of the nearest-item bonus.
    pub item_weight: f64,
    /// Distance used when no items are left.
    pub missing_item_distance: u32,
    /// A threat at this Manhattan distance or closer triggers the penalty.
    pub threat_radius: u32,
    /// Subtracted when a threat is within `threat_radius`.
    pub threat_penalty: f64,
}

impl ProximityWeights {
    /// Weights of the `better` evaluator.
    pub fn better() -> Self {
        Self { score_weight: 5.0, ..Self::reflex() }
    }

    /// Weights of the `reflex` evaluator.
    pub fn reflex() -> Self {
        Self {
            score_weight: 1.0,
            item_weight: 1.0,
            missing_item_distance: 10_000,
            threat_radius: 1,
            threat_penalty: 500.0,
        }
    }
}

impl Default for ProximityWeights {
    fn default() -> Self {
        Self::better()
    }
}

/// Everything needed to construct a search agent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub algorithm: Algorithm,
    pub evaluator: EvaluatorKind,
    pub depth: Depth,
    /// Only read by the proximity evaluators. `None` picks the preset that
    /// matches `evaluator`.
    pub weights: Option<ProximityWeights>,
}

impl AgentConfig {
    /// Build a configuration from an evaluator name and a textual depth.
    ///
    /// Malformed depths are rejected here rather than during search.
    pub fn from_args(evaluator: &str, depth: &str) -> Result<Self, ConfigError> {
        Ok(Self { evaluator: evaluator.parse()?, depth: depth.parse()?, ..Self::default() })
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file, then apply environment variable overrides.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        info!("Loading agent config from {}", path.display());
        Self::from_toml_str(&content)?.apply_env_overrides()
    }

    /// Apply `MULTIMINIMAX_*` environment variable overrides.
    pub fn apply_env_overrides(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by variable name.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(DEPTH_ENV) {
            debug!("{}={} overrides depth {}", DEPTH_ENV, v, self.depth);
            self.depth = v.parse()?;
        }
        if let Some(v) = lookup(ALGORITHM_ENV) {
            debug!("{}={} overrides algorithm {}", ALGORITHM_ENV, v, self.algorithm);
            self.algorithm = v.parse()?;
        }
        if let Some(v) = lookup(EVALUATOR_ENV) {
            debug!("{}={} overrides evaluator {}", EVALUATOR_ENV, v, self.evaluator);
            self.evaluator = v.parse()?;
        }
        Ok(self)
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_weights(mut self, weights: ProximityWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// The proximity weights in effect for this configuration.
    pub fn proximity_weights(&self) -> ProximityWeights {
        self.weights.unwrap_or(match self.evaluator {
            EvaluatorKind::Reflex => ProximityWeights::reflex(),
            _ => ProximityWeights::better(),
        })
    }
}
