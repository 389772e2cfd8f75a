//! A strategy that randomly chooses an action, for modeling chance agents.

use super::super::error::SearchError;
use super::super::interface::*;
use super::util::*;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub struct RandomAgent<R> {
    agent: AgentIndex,
    rng: R,
}

impl<R: Rng> RandomAgent<R> {
    /// Plays uniformly random actions for `agent`.
    pub fn new(agent: AgentIndex, rng: R) -> Self {
        RandomAgent { agent, rng }
    }

    pub fn agent(&self) -> AgentIndex {
        self.agent
    }
}

impl RandomAgent<ThreadRng> {
    pub fn with_thread_rng(agent: AgentIndex) -> Self {
        Self::new(agent, rand::thread_rng())
    }
}

impl<S: GameState, R: Rng> Strategy<S> for RandomAgent<R> {
    fn choose_action(&mut self, s: &S) -> Result<S::Action, SearchError> {
        legal_actions(s, self.agent)
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoLegalActions)
    }
}
