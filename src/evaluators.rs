//! Leaf evaluation functions.
//!
//! [`ScoreEvaluator`] works on any [`GameState`]. [`ProximityEvaluator`]
//! reads the state's [`Spatial`] view, when it has one, and adds a bonus for
//! being close to an item and a flat penalty for standing next to a threat. [`Heuristic`] is
//! the evaluator picked by name from an [`AgentConfig`].

use super::config::{AgentConfig, EvaluatorKind, ProximityWeights};
use super::interface::*;

/// Manhattan (taxicab) distance between two cells.
pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Returns the intrinsic score of the state.
#[derive(Debug, Copy, Clone, Default)]
pub struct ScoreEvaluator;

impl<S: GameState> Evaluator<S> for ScoreEvaluator {
    fn evaluate(&self, s: &S) -> Score {
        s.score()
    }
}

/// Weighted score, plus the reciprocal distance to the nearest item, minus a
/// penalty when a threat is within reach.
#[derive(Debug, Copy, Clone)]
pub struct ProximityEvaluator {
    weights: ProximityWeights,
}

impl ProximityEvaluator {
    pub fn new(weights: ProximityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ProximityWeights {
        &self.weights
    }
}

impl ProximityEvaluator {
    /// Reciprocal item distance minus the threat penalty.
    fn proximity(&self, grid: Option<&dyn Spatial>) -> Score {
        let w = &self.weights;
        let grid = match grid {
            Some(grid) => grid,
            None => return w.item_weight / f64::from(w.missing_item_distance.max(1)),
        };
        let me = grid.agent_position();
        let nearest_item = grid
            .item_positions()
            .into_iter()
            .map(|p| manhattan_distance(me, p))
            .min()
            .unwrap_or(w.missing_item_distance)
            // An item underfoot is eaten on arrival; never divide by zero.
            .max(1);
        let threatened = grid
            .threat_positions()
            .into_iter()
            .any(|p| manhattan_distance(me, p) <= w.threat_radius);
        let penalty = if threatened { w.threat_penalty } else { 0.0 };
        w.item_weight / f64::from(nearest_item) - penalty
    }
}

impl<S: GameState> Evaluator<S> for ProximityEvaluator {
    fn evaluate(&self, s: &S) -> Score {
        self.weights.score_weight * s.score() + self.proximity(s.spatial())
    }
}

/// An evaluator selected by [`EvaluatorKind`].
#[derive(Debug, Copy, Clone)]
pub enum Heuristic {
    Score(ScoreEvaluator),
    Proximity(ProximityEvaluator),
}

impl Heuristic {
    pub fn new(kind: EvaluatorKind, weights: ProximityWeights) -> Self {
        match kind {
            EvaluatorKind::Score => Heuristic::Score(ScoreEvaluator),
            EvaluatorKind::Better | EvaluatorKind::Reflex => {
                Heuristic::Proximity(ProximityEvaluator::new(weights))
            }
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(config.evaluator, config.proximity_weights())
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Score(ScoreEvaluator)
    }
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn evaluate(&self, s: &S) -> Score {
        match self {
            Heuristic::Score(e) => e.evaluate(s),
            Heuristic::Proximity(e) => e.evaluate(s),
        }
    }
}
