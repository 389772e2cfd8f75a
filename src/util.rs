//! Utility functions for playing games, and tests.

use super::error::SearchError;
use super::interface::{GameState, Outcome, Strategy, MAXIMIZER};
use tracing::debug;

/// How a played game went.
#[derive(Debug, Clone)]
pub struct Episode<S> {
    /// The state the game stopped in.
    pub state: S,
    /// `None` if the turn limit was hit first.
    pub outcome: Option<Outcome>,
    /// Full rounds started.
    pub rounds: usize,
}

/// Play a game from `state`, with agent `i` driven by `strategies[i]`, for at
/// most `max_rounds` full rounds.
///
/// An adversary without legal actions passes its turn. The maximizer running
/// out of actions in a non-terminal state is an error, and so is a strategy
/// count that does not match the number of agents.
pub fn play_episode<S: GameState>(
    mut state: S, strategies: &mut [&mut dyn Strategy<S>], max_rounds: usize,
) -> Result<Episode<S>, SearchError> {
    if strategies.len() != state.num_agents() {
        return Err(SearchError::AgentCountMismatch {
            agents: state.num_agents(),
            strategies: strategies.len(),
        });
    }
    let mut rounds = 0;
    while state.outcome().is_none() && rounds < max_rounds {
        rounds += 1;
        for agent in 0..strategies.len() {
            if state.outcome().is_some() {
                break;
            }
            match strategies[agent].choose_action(&state) {
                Ok(action) => state = state.successor(agent, action),
                Err(SearchError::NoLegalActions) if agent != MAXIMIZER => {
                    debug!(agent, "no legal actions, passing");
                }
                Err(e) => return Err(e),
            }
        }
    }
    let outcome = state.outcome();
    debug!(rounds, ?outcome, "episode finished");
    Ok(Episode { state, outcome, rounds })
}

