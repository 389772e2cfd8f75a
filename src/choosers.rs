//! Basic graded action choosers.

use super::interface::*;
use rand::Rng;

// Every action sharing the highest value, in grading order.
fn best_candidates<M: Copy>(graded: &[Grade<M>]) -> Vec<M> {
    let mut best = WORST_SCORE;
    let mut candidates = Vec::new();
    for &Grade { value, play } in graded.iter() {
        debug_assert!(!value.is_nan());
        if value > best || candidates.is_empty() {
            candidates.clear();
            candidates.push(play);
            best = value;
        } else if value == best {
            candidates.push(play);
        }
    }
    candidates
}

/// Always chooses the first, best action from a set.
#[derive(Debug, Copy, Clone, Default)]
pub struct Deterministic;

impl<M: Copy> Chooser<M> for Deterministic {
    fn choose(&mut self, graded: &[Grade<M>]) -> Option<M> {
        best_candidates(graded).into_iter().next()
    }
}

/// Chooses uniformly at random from the best actions of a set.
pub struct Random<R> {
    rng: R,
}

impl<R: Rng> Random<R> {
    pub fn new(rng: R) -> Self {
        Random { rng }
    }
}

impl<M: Copy, R: Rng> Chooser<M> for Random<R> {
    fn choose(&mut self, graded: &[Grade<M>]) -> Option<M> {
        let candidates = best_candidates(graded);
        if candidates.is_empty() {
            None
        } else {
            Some(candidates[self.rng.gen_range(0..candidates.len())])
        }
    }
}
