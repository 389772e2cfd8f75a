//! The recursion shared by minimax, alpha-beta and expectimax.
//!
//! All three walk the tree depth first, cycling through the agents in index
//! order and losing one unit of depth each time the turn wraps back to the
//! maximizer. They only differ in how an adversary's children are reduced:
//! minimum, minimum with pruning, or mean.

use super::super::config::Algorithm;
use super::super::interface::*;
use super::util::*;
use tracing::trace;

/// The pruning window: the best value the maximizer (alpha) and the
/// minimizers (beta) are already guaranteed along the current path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Window {
    pub alpha: Score,
    pub beta: Score,
}

impl Window {
    /// The window of a fresh search: nothing is guaranteed yet.
    pub fn full() -> Self {
        Window { alpha: WORST_SCORE, beta: BEST_SCORE }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::full()
    }
}

/// Counters collected over one search.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every state the search was called on.
    pub nodes: u64,
    /// States handed to the evaluator.
    pub leaves: u64,
    /// Alpha and beta cutoffs.
    pub cutoffs: u64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Role {
    Maximizer,
    Minimizer,
    Chance,
}

/// A depth-limited tree search bound to one algorithm and one evaluator.
pub struct Search<'a, E> {
    algorithm: Algorithm,
    evaluator: &'a E,
    stats: SearchStats,
}

impl<'a, E> Search<'a, E> {
    pub fn new(algorithm: Algorithm, evaluator: &'a E) -> Self {
        Search { algorithm, evaluator, stats: SearchStats::default() }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn role(&self, agent: AgentIndex) -> Role {
        if agent == MAXIMIZER {
            Role::Maximizer
        } else if self.algorithm == Algorithm::Expectimax {
            Role::Chance
        } else {
            Role::Minimizer
        }
    }

    fn pruning(&self) -> bool {
        self.algorithm == Algorithm::AlphaBeta
    }

    /// Value of `s` with `agent` to move and `depth` rounds left.
    pub fn value<S>(&mut self, s: &S, depth: u32, agent: AgentIndex) -> Score
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.search(s, depth, agent, Window::full())
    }

    /// Value of `s` searched inside `window`.
    ///
    /// With alpha-beta, a result outside the window is only a bound: above
    /// beta it is a lower bound, below alpha an upper bound. Results inside
    /// the window are exact.
    pub fn search<S>(&mut self, s: &S, depth: u32, agent: AgentIndex, mut window: Window) -> Score
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.nodes += 1;
        if depth == 0 || s.is_win() || s.is_lose() {
            return self.leaf(s);
        }
        let actions = legal_actions(s, agent);
        if actions.is_empty() {
            // Stuck agents end the line like a terminal state.
            return self.leaf(s);
        }
        let (next, next_depth) = next_turn(agent, depth, s.num_agents());

        match self.role(agent) {
            Role::Maximizer => {
                let mut value = WORST_SCORE;
                for a in actions {
                    let child = s.successor(agent, a);
                    value = value.max(self.search(&child, next_depth, next, window));
                    if self.pruning() {
                        if value > window.beta {
                            self.cutoff(agent, depth, value, window);
                            return value;
                        }
                        window.alpha = window.alpha.max(value);
                    }
                }
                value
            }
            Role::Minimizer => {
                let mut value = BEST_SCORE;
                for a in actions {
                    let child = s.successor(agent, a);
                    value = value.min(self.search(&child, next_depth, next, window));
                    if self.pruning() {
                        if value < window.alpha {
                            self.cutoff(agent, depth, value, window);
                            return value;
                        }
                        window.beta = window.beta.min(value);
                    }
                }
                value
            }
            Role::Chance => {
                let n = actions.len();
                let mut total = 0.0;
                for a in actions {
                    let child = s.successor(agent, a);
                    total += self.search(&child, next_depth, next, window);
                }
                total / n as Score
            }
        }
    }

    fn leaf<S>(&mut self, s: &S) -> Score
    where
        E: Evaluator<S>,
    {
        self.stats.leaves += 1;
        let value = self.evaluator.evaluate(s);
        debug_assert!(!value.is_nan(), "evaluator returned NaN");
        value
    }

    fn cutoff(&mut self, agent: AgentIndex, depth: u32, value: Score, window: Window) {
        self.stats.cutoffs += 1;
        trace!(agent, depth, value, alpha = window.alpha, beta = window.beta, "cutoff");
    }
}
