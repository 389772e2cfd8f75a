//! The top-level action selector for minimax, alpha-beta and expectimax.
//!
//! Plays one real move for the maximizer: every legal action is graded by
//! searching the resulting state with the first adversary to move, and the
//! first action with the strictly highest value wins.

use super::super::choosers::Deterministic;
use super::super::config::{AgentConfig, Algorithm, Depth};
use super::super::error::SearchError;
use super::super::evaluators::Heuristic;
use super::super::interface::*;
use super::search::{Search, SearchStats, Window};
use super::util::*;
use tracing::{debug, trace};

pub struct AdversarialSearch<E> {
    algorithm: Algorithm,
    depth: Depth,
    evaluator: E,
    stats: SearchStats,
    prev_value: Score,
}

impl<E> AdversarialSearch<E> {
    pub fn new(algorithm: Algorithm, evaluator: E, depth: Depth) -> Self {
        AdversarialSearch {
            algorithm,
            depth,
            evaluator,
            stats: SearchStats::default(),
            prev_value: WORST_SCORE,
        }
    }

    pub fn minimax(evaluator: E, depth: Depth) -> Self {
        Self::new(Algorithm::Minimax, evaluator, depth)
    }

    pub fn alpha_beta(evaluator: E, depth: Depth) -> Self {
        Self::new(Algorithm::AlphaBeta, evaluator, depth)
    }

    pub fn expectimax(evaluator: E, depth: Depth) -> Self {
        Self::new(Algorithm::Expectimax, evaluator, depth)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn set_depth(&mut self, depth: Depth) {
        self.depth = depth;
    }

    /// Counters from the most recent grading.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Value of the action chosen by the most recent search.
    pub fn root_value(&self) -> Score {
        self.prev_value
    }
}

impl AdversarialSearch<Heuristic> {
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(config.algorithm, Heuristic::from_config(config), config.depth)
    }
}

impl<S, E> Grader<S> for AdversarialSearch<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    /// Grades every maximizer action. With alpha-beta, an action that cannot
    /// beat an earlier one may be graded with an upper bound of its value.
    fn grade(&mut self, s: &S) -> Vec<Grade<S::Action>> {
        let (next, depth) = next_turn(MAXIMIZER, self.depth.get(), s.num_agents());
        let mut search = Search::new(self.algorithm, &self.evaluator);
        let mut window = Window::full();
        let mut graded = Vec::new();
        for play in legal_actions(s, MAXIMIZER) {
            let child = s.successor(MAXIMIZER, play);
            let value = search.search(&child, depth, next, window);
            trace!(action = ?play, value, "graded");
            if self.algorithm == Algorithm::AlphaBeta {
                window.alpha = window.alpha.max(value);
            }
            graded.push(Grade { value, play });
        }
        self.stats = search.stats();
        graded
    }
}

impl<S, E> Strategy<S> for AdversarialSearch<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_action(&mut self, s: &S) -> Result<S::Action, SearchError> {
        let graded = self.grade(s);
        let best = Deterministic.choose(&graded).ok_or(SearchError::NoLegalActions)?;
        self.prev_value = best_value(&graded);
        debug!(
            algorithm = %self.algorithm,
            depth = self.depth.get(),
            action = ?best,
            value = self.prev_value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "chose action"
        );
        Ok(best)
    }
}
