use super::super::interface::*;

// The agent to move after `agent`, and the depth it moves at. Depth drops by
// one only when the last agent of a round hands the turn back to the
// maximizer. Callers guarantee depth > 0.
pub(super) fn next_turn(agent: AgentIndex, depth: u32, num_agents: usize) -> (AgentIndex, u32) {
    debug_assert!(depth > 0);
    if agent + 1 >= num_agents {
        (MAXIMIZER, depth - 1)
    } else {
        (agent + 1, depth)
    }
}

// Highest value among the grades, or WORST_SCORE if there are none.
pub(super) fn best_value<M>(graded: &[Grade<M>]) -> Score {
    graded.iter().map(|g| g.value).fold(WORST_SCORE, Score::max)
}

pub(super) fn legal_actions<S: GameState>(s: &S, agent: AgentIndex) -> Vec<S::Action> {
    let mut actions = Vec::new();
    s.legal_actions(agent, &mut actions);
    actions
}
