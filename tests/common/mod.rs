//! Hand-built game trees with known values.
//!
//! Every edge is one agent's move and agents take turns in index order, so
//! with `n` agents a search of depth `d` reaches `d * n` plies. Leaves are
//! terminal; inner nodes carry a static value that the evaluator reports when
//! the search runs out of depth above the leaves.
#![allow(dead_code)]

use multiminimax::{AgentIndex, GameState, Score};
use rand::Rng;
use std::rc::Rc;

#[derive(Debug)]
pub enum Node {
    Leaf(Score),
    Branch(Score, Vec<Rc<Node>>),
}

pub fn leaf(value: Score) -> Rc<Node> {
    Rc::new(Node::Leaf(value))
}

pub fn branch(children: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node::Branch(0.0, children))
}

/// An inner node whose static evaluation is `value`.
pub fn valued(value: Score, children: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node::Branch(value, children))
}

#[derive(Clone, Debug)]
pub struct Tree {
    node: Rc<Node>,
    agents: usize,
    to_move: AgentIndex,
}

impl Tree {
    pub fn new(root: Rc<Node>, agents: usize) -> Self {
        Tree { node: root, agents, to_move: 0 }
    }

    /// The same tree with `agent` to move at the root.
    pub fn at_agent(root: Rc<Node>, agents: usize, agent: AgentIndex) -> Self {
        Tree { node: root, agents, to_move: agent }
    }

    fn children(&self) -> &[Rc<Node>] {
        match &*self.node {
            Node::Leaf(_) => &[],
            Node::Branch(_, children) => children,
        }
    }
}

impl GameState for Tree {
    type Action = usize;

    fn legal_actions(&self, agent: AgentIndex, actions: &mut Vec<usize>) {
        assert_eq!(agent, self.to_move, "agents must move in turn");
        actions.extend(0..self.children().len());
    }

    fn successor(&self, agent: AgentIndex, action: usize) -> Self {
        assert_eq!(agent, self.to_move, "agents must move in turn");
        Tree {
            node: self.children()[action].clone(),
            agents: self.agents,
            to_move: (agent + 1) % self.agents,
        }
    }

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn is_win(&self) -> bool {
        matches!(*self.node, Node::Leaf(_))
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn score(&self) -> Score {
        match *self.node {
            Node::Leaf(v) | Node::Branch(v, _) => v,
        }
    }
}

pub fn score(t: &Tree) -> Score {
    t.score()
}

/// A complete tree of `plies` levels, every inner node with `branching`
/// children. Values are small integers so that ties happen.
pub fn random_tree<R: Rng>(rng: &mut R, plies: usize, branching: usize) -> Rc<Node> {
    if plies == 0 {
        return leaf(rng.gen_range(-20..=20) as Score);
    }
    let children = (0..branching).map(|_| random_tree(rng, plies - 1, branching)).collect();
    valued(rng.gen_range(-20..=20) as Score, children)
}

/// Number of nodes in a complete tree.
pub fn complete_size(plies: usize, branching: usize) -> u64 {
    (0..=plies as u32).map(|k| (branching as u64).pow(k)).sum()
}

/// Exact game value with minimizing adversaries, searched to the leaves.
pub fn true_value(node: &Node, agent: AgentIndex, agents: usize) -> Score {
    match node {
        Node::Leaf(v) => *v,
        Node::Branch(v, children) if children.is_empty() => *v,
        Node::Branch(_, children) => {
            let values = children.iter().map(|c| true_value(c, (agent + 1) % agents, agents));
            if agent == 0 {
                values.fold(Score::NEG_INFINITY, Score::max)
            } else {
                values.fold(Score::INFINITY, Score::min)
            }
        }
    }
}
