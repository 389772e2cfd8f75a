//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building an agent from its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid depth {0:?}: expected a positive integer")]
    InvalidDepth(String),

    #[error("Unknown evaluator: {0}")]
    UnknownEvaluator(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors that can occur while choosing an action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The agent was asked to move in a state where it has no moves.
    #[error("No legal actions available")]
    NoLegalActions,

    /// A game was started without exactly one strategy per agent.
    #[error("Game has {agents} agents but {strategies} strategies were given")]
    AgentCountMismatch { agents: usize, strategies: usize },
}
