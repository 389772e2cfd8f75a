//! Depth-limited adversarial search for games with one maximizing agent and
//! any number of minimizing or random adversaries.
//!
//! Implement [`GameState`] for your game, pick an [`Algorithm`], an evaluator
//! and a [`Depth`], and ask an [`AdversarialSearch`] for an action:
//!
//! ```rust,ignore
//! use multiminimax::{AdversarialSearch, AgentConfig, Strategy};
//!
//! let config = AgentConfig::from_args("better", "3")?;
//! let mut agent = AdversarialSearch::from_config(&config);
//! let action = agent.choose_action(&state)?;
//! ```

pub mod choosers;
pub mod config;
pub mod error;
pub mod evaluators;
pub mod interface;
pub mod strategies;
pub mod util;

pub use choosers::{Deterministic, Random};
pub use config::{AgentConfig, Algorithm, Depth, EvaluatorKind, ProximityWeights};
pub use error::{ConfigError, SearchError};
pub use evaluators::{manhattan_distance, Heuristic, ProximityEvaluator, ScoreEvaluator};
pub use interface::{
    AgentIndex, Chooser, Evaluator, GameState, Grade, Grader, Outcome, Position, Score, Spatial,
    Strategy, BEST_SCORE, MAXIMIZER, WORST_SCORE,
};
pub use strategies::adversarial::AdversarialSearch;
pub use strategies::random::RandomAgent;
pub use strategies::reflex::ReflexAgent;
pub use strategies::search::{Search, SearchStats, Window};
pub use util::{play_episode, Episode};
