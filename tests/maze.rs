extern crate multiminimax;
extern crate rand;

#[path = "../demos/maze.rs"]
mod maze;

use maze::{Direction, Maze};
use multiminimax::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Eater between two pellets with a ghost right next to it.
const CORNERED: &str = "\
%%%%%%%
%. PG.%
%%%%%%%";

const LAST_BITE: &str = "\
%%%%%
%P.G%
%%%%%";

fn depth(d: u32) -> Depth {
    Depth::new(d).unwrap()
}

fn spawn_ghosts(maze: &Maze, seed: u64) -> Vec<RandomAgent<StdRng>> {
    (1..maze.num_agents())
        .map(|i| RandomAgent::new(i, StdRng::seed_from_u64(seed + i as u64)))
        .collect()
}

#[test]
fn every_agent_steps_away_from_the_ghost() {
    let maze = Maze::parse(CORNERED);
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Expectimax] {
        let mut s = AdversarialSearch::new(algorithm, ScoreEvaluator, depth(1));
        assert_eq!(s.choose_action(&maze), Ok(Direction::West), "{}", algorithm);
    }
    let config = AgentConfig::from_args("better", "2").unwrap();
    let mut s = AdversarialSearch::from_config(&config);
    assert_eq!(s.choose_action(&maze), Ok(Direction::West));
}

#[test]
fn takes_the_winning_bite() {
    let maze = Maze::parse(LAST_BITE);
    let mut s = AdversarialSearch::alpha_beta(ScoreEvaluator, depth(2));
    assert_eq!(s.choose_action(&maze), Ok(Direction::East));
    assert_eq!(s.root_value(), 509.0);
    let after = maze.successor(0, Direction::East);
    assert!(after.is_win());
    assert_eq!(after.outcome(), Some(Outcome::Win));
}

#[test]
fn reflex_agent_avoids_the_ghost() {
    let maze = Maze::parse(CORNERED);
    let weights = ProximityWeights::reflex();
    let mut reflex = ReflexAgent::new(ProximityEvaluator::new(weights), StdRng::seed_from_u64(3));
    for _ in 0..20 {
        assert_eq!(reflex.choose_action(&maze), Ok(Direction::West));
    }
}

#[test]
fn pruning_agrees_during_play() {
    let mut maze = Maze::parse(maze::CLASSIC);
    let mut walkers: Vec<RandomAgent<StdRng>> = (0..maze.num_agents())
        .map(|i| RandomAgent::new(i, StdRng::seed_from_u64(100 + i as u64)))
        .collect();
    let heuristic = Heuristic::new(EvaluatorKind::Better, ProximityWeights::better());
    for _ in 0..15 {
        if maze.outcome().is_some() {
            break;
        }
        let mut minimax = AdversarialSearch::minimax(heuristic, depth(2));
        let mut alpha_beta = AdversarialSearch::alpha_beta(heuristic, depth(2));
        let m = minimax.choose_action(&maze).unwrap();
        let ab = alpha_beta.choose_action(&maze).unwrap();
        assert_eq!(m, ab, "\n{}", maze);
        assert_eq!(minimax.root_value(), alpha_beta.root_value());
        assert!(alpha_beta.stats().nodes <= minimax.stats().nodes);

        // Wander somewhere else for the next comparison.
        for agent in 0..maze.num_agents() {
            if maze.outcome().is_some() {
                break;
            }
            if let Ok(a) = walkers[agent].choose_action(&maze) {
                maze = maze.successor(agent, a);
            }
        }
    }
}

#[test]
fn search_agent_plays_a_full_game() {
    let maze = Maze::parse(maze::CLASSIC);
    let config = AgentConfig::default()
        .with_algorithm(Algorithm::Expectimax)
        .with_evaluator(EvaluatorKind::Better)
        .with_depth(depth(2));
    let mut eater = AdversarialSearch::from_config(&config);
    let mut ghosts = spawn_ghosts(&maze, 5);
    let mut strategies: Vec<&mut dyn Strategy<Maze>> = Vec::new();
    strategies.push(&mut eater);
    strategies.extend(ghosts.iter_mut().map(|g| g as &mut dyn Strategy<Maze>));

    let episode = play_episode(maze.clone(), &mut strategies, 200).unwrap();
    assert!(episode.rounds <= 200);
    match episode.outcome {
        Some(Outcome::Win) => assert_eq!(episode.state.food_left(), 0),
        Some(Outcome::Lose) => assert!(episode.state.is_lose()),
        None => assert_eq!(episode.rounds, 200),
    }
    assert!(episode.state.food_left() < maze.food_left());
}

#[test]
fn random_agents_pass_when_stuck() {
    // A ghost walled in on all sides has nothing to do.
    let maze = Maze::parse(
        "\
%%%%%%%
%P..%G%
%%%%%%%",
    );
    let mut eater = AdversarialSearch::minimax(ScoreEvaluator, depth(1));
    let mut ghost = RandomAgent::new(1, StdRng::seed_from_u64(0));
    assert_eq!(
        <RandomAgent<StdRng> as Strategy<Maze>>::choose_action(&mut ghost, &maze),
        Err(SearchError::NoLegalActions)
    );
    let mut strategies: Vec<&mut dyn Strategy<Maze>> = Vec::new();
    strategies.push(&mut eater);
    strategies.push(&mut ghost);
    let episode = play_episode(maze, &mut strategies, 10).unwrap();
    assert_eq!(episode.outcome, Some(Outcome::Win));
    assert_eq!(episode.rounds, 2);
    assert_eq!(episode.state.position(0), (3, 1));
}

#[test]
fn episode_needs_one_strategy_per_agent() {
    let maze = Maze::parse(maze::CLASSIC);
    let mut eater = AdversarialSearch::minimax(ScoreEvaluator, depth(1));
    let mut strategies: Vec<&mut dyn Strategy<Maze>> = Vec::new();
    strategies.push(&mut eater);
    let result = play_episode(maze.clone(), &mut strategies, 10);
    assert_eq!(
        result.err(),
        Some(SearchError::AgentCountMismatch { agents: maze.num_agents(), strategies: 1 })
    );
}
