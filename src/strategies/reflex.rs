//! A one-ply reflex agent.
//!
//! Evaluates the state right after each of the maximizer's actions and picks
//! randomly among the best ones. No adversary moves are considered.

use super::super::choosers::Random;
use super::super::config::ProximityWeights;
use super::super::error::SearchError;
use super::super::evaluators::ProximityEvaluator;
use super::super::interface::*;
use super::util::*;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

pub struct ReflexAgent<E, R> {
    evaluator: E,
    chooser: Random<R>,
}

impl<E, R: Rng> ReflexAgent<E, R> {
    pub fn new(evaluator: E, rng: R) -> Self {
        ReflexAgent { evaluator, chooser: Random::new(rng) }
    }
}

impl ReflexAgent<ProximityEvaluator, ThreadRng> {
    /// A reflex agent with the stock proximity heuristic.
    pub fn with_thread_rng() -> Self {
        Self::new(ProximityEvaluator::new(ProximityWeights::reflex()), rand::thread_rng())
    }
}

impl<S, E, R> Grader<S> for ReflexAgent<E, R>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn grade(&mut self, s: &S) -> Vec<Grade<S::Action>> {
        legal_actions(s, MAXIMIZER)
            .into_iter()
            .map(|play| {
                let value = self.evaluator.evaluate(&s.successor(MAXIMIZER, play));
                Grade { value, play }
            })
            .collect()
    }
}

impl<S, E, R> Strategy<S> for ReflexAgent<E, R>
where
    S: GameState,
    E: Evaluator<S>,
    R: Rng,
{
    fn choose_action(&mut self, s: &S) -> Result<S::Action, SearchError> {
        let graded = self.grade(s);
        let best = self.chooser.choose(&graded).ok_or(SearchError::NoLegalActions)?;
        debug!(action = ?best, value = best_value(&graded), "reflex chose action");
        Ok(best)
    }
}
