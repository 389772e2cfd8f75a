//! The common structures and traits.

use super::error::SearchError;

/// An assessment of a game state from the perspective of the maximizing agent.
/// Higher values mean a more favorable state.
///
/// Scores must never be NaN; the search compares them with plain `<` and `>`.
pub type Score = f64;

/// Index of an agent within a game. Agent 0 is always the maximizer.
pub type AgentIndex = usize;

/// The agent whose action is ultimately selected.
pub const MAXIMIZER: AgentIndex = 0;

/// Lower than any real score. Starting value of a maximizer node.
pub const WORST_SCORE: Score = f64::NEG_INFINITY;
/// Higher than any real score. Starting value of a minimizer node.
pub const BEST_SCORE: Score = f64::INFINITY;

/// How a finished game ended, from the maximizer's point of view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Defines the rules for a game with one maximizer and any number of
/// adversaries.
///
/// States are values: `successor` builds a new state and never touches the
/// receiver, so a state can be expanded as many times as needed.
pub trait GameState: Sized {
    /// The type of game moves. Opaque to the search.
    type Action: Copy + Eq + std::fmt::Debug;

    /// Append the legal actions of `agent` at this state to `actions`.
    ///
    /// The order is significant: the root keeps the first of several equally
    /// good actions, so callers needing reproducible tie-breaks must generate
    /// actions in a stable order.
    fn legal_actions(&self, agent: AgentIndex, actions: &mut Vec<Self::Action>);

    /// The state after `agent` plays `action`.
    fn successor(&self, agent: AgentIndex, action: Self::Action) -> Self;

    /// Number of agents taking turns, including the maximizer. At least 1.
    fn num_agents(&self) -> usize;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// The intrinsic score of the state, e.g. the game score.
    fn score(&self) -> Score;

    /// Returns `Some` if the state is terminal.
    fn outcome(&self) -> Option<Outcome> {
        if self.is_win() {
            Some(Outcome::Win)
        } else if self.is_lose() {
            Some(Outcome::Lose)
        } else {
            None
        }
    }

    /// The grid view of this state, for games that have one.
    fn spatial(&self) -> Option<&dyn Spatial> {
        None
    }
}

/// A cell on a two-dimensional board.
pub type Position = (i32, i32);

/// An optional trait for game state types that live on a grid.
///
/// Heuristics that reward proximity to items and punish proximity to threats
/// read it through [`GameState::spatial`]. States without one are scored as if
/// no item or threat were on the board.
pub trait Spatial {
    /// Where the maximizer currently stands.
    fn agent_position(&self) -> Position;
    /// Positions of every item the maximizer wants to consume.
    fn item_positions(&self) -> Vec<Position>;
    /// Positions of every adversary.
    fn threat_positions(&self) -> Vec<Position>;
}

/// Evaluates a game's positions.
///
/// Evaluators must be deterministic and free of side effects.
pub trait Evaluator<S> {
    fn evaluate(&self, s: &S) -> Score;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> Score,
{
    fn evaluate(&self, s: &S) -> Score {
        self(s)
    }
}

/// The value of playing a particular action.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grade<M> {
    pub value: Score,
    pub play: M,
}

/// Assigns a value to every action available to an agent.
pub trait Grader<S: GameState> {
    fn grade(&mut self, s: &S) -> Vec<Grade<S::Action>>;
}

/// Picks one action out of a set of graded actions.
pub trait Chooser<M> {
    fn choose(&mut self, graded: &[Grade<M>]) -> Option<M>;
}

/// Defines a method of choosing an action for one agent.
pub trait Strategy<S: GameState> {
    fn choose_action(&mut self, s: &S) -> Result<S::Action, SearchError>;
}
