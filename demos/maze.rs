//! A small maze chase game using the library, for demos and tests.
//!
//! Agent 0 eats the food; every other agent is a ghost. Walking costs a
//! point, food is worth ten, clearing the board is worth five hundred and
//! getting caught costs five hundred.
#![allow(dead_code)]

extern crate multiminimax;

use clap::Parser;
use multiminimax::{AgentIndex, GameState, Position, Score, Spatial};
use std::fmt::{Display, Formatter, Result};

pub const CLASSIC: &str = "\
%%%%%%%%%%
%P...%..G%
%.%%.%.%.%
%.%......%
%...%%.%.%
%G.......%
%%%%%%%%%%";

pub const CORRIDOR: &str = "\
%%%%%%%
%P...G%
%%%%%%%";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    pub const ALL: [Direction; 5] =
        [Direction::North, Direction::South, Direction::East, Direction::West, Direction::Stop];

    fn offset(self) -> Position {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    walls: Vec<bool>,
    food: Vec<Position>,
    // Index 0 is the eater, the rest are ghosts.
    agents: Vec<Position>,
    score: i64,
    caught: bool,
}

impl Maze {
    /// Parse a layout: `%` wall, `.` food, `P` eater, `G` ghost.
    pub fn parse(layout: &str) -> Maze {
        let rows: Vec<&str> = layout.lines().collect();
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as i32;
        let mut walls = vec![false; (width * height) as usize];
        let mut food = Vec::new();
        let mut eater = (0, 0);
        let mut ghosts = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let p = (x as i32, y as i32);
                match c {
                    '%' => walls[(p.1 * width + p.0) as usize] = true,
                    '.' => food.push(p),
                    'P' => eater = p,
                    'G' => ghosts.push(p),
                    _ => {}
                }
            }
        }
        let mut agents = vec![eater];
        agents.extend(ghosts);
        Maze { width, height, walls, food, agents, score: 0, caught: false }
    }

    fn is_wall(&self, p: Position) -> bool {
        p.0 < 0
            || p.1 < 0
            || p.0 >= self.width
            || p.1 >= self.height
            || self.walls[(p.1 * self.width + p.0) as usize]
    }

    pub fn position(&self, agent: AgentIndex) -> Position {
        self.agents[agent]
    }

    pub fn food_left(&self) -> usize {
        self.food.len()
    }

    fn check_caught(&mut self) {
        let eater = self.agents[0];
        if !self.caught && self.agents[1..].contains(&eater) {
            self.caught = true;
            self.score -= 500;
        }
    }
}

impl GameState for Maze {
    type Action = Direction;

    fn legal_actions(&self, agent: AgentIndex, actions: &mut Vec<Direction>) {
        if self.is_win() || self.is_lose() {
            return;
        }
        let (x, y) = self.agents[agent];
        for d in Direction::ALL {
            // Ghosts never stand still.
            if d == Direction::Stop && agent != 0 {
                continue;
            }
            let (dx, dy) = d.offset();
            if !self.is_wall((x + dx, y + dy)) {
                actions.push(d);
            }
        }
    }

    fn successor(&self, agent: AgentIndex, action: Direction) -> Maze {
        let mut next = self.clone();
        let (x, y) = next.agents[agent];
        let (dx, dy) = action.offset();
        let p = (x + dx, y + dy);
        next.agents[agent] = p;
        if agent == 0 {
            next.score -= 1;
            if let Some(i) = next.food.iter().position(|&f| f == p) {
                next.food.swap_remove(i);
                next.score += 10;
                if next.food.is_empty() {
                    next.score += 500;
                }
            }
        }
        next.check_caught();
        next
    }

    fn num_agents(&self) -> usize {
        self.agents.len()
    }

    fn is_win(&self) -> bool {
        !self.caught && self.food.is_empty()
    }

    fn is_lose(&self) -> bool {
        self.caught
    }

    fn score(&self) -> Score {
        self.score as Score
    }

    fn spatial(&self) -> Option<&dyn Spatial> {
        Some(self)
    }
}

impl Spatial for Maze {
    fn agent_position(&self) -> Position {
        self.agents[0]
    }

    fn item_positions(&self) -> Vec<Position> {
        self.food.clone()
    }

    fn threat_positions(&self) -> Vec<Position> {
        self.agents[1..].to_vec()
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut Formatter) -> Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let p = (x, y);
                let c = if self.agents[0] == p {
                    'P'
                } else if self.agents[1..].contains(&p) {
                    'G'
                } else if self.is_wall(p) {
                    '%'
                } else if self.food.contains(&p) {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "score: {}", self.score)
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play the maze with a search agent against random ghosts")]
struct Args {
    /// minimax, alphabeta or expectimax
    #[arg(long, default_value = "expectimax")]
    algorithm: String,

    /// Full agent rounds to look ahead
    #[arg(long, default_value = "2")]
    depth: String,

    /// score (or default), better or reflex
    #[arg(long, default_value = "better")]
    evaluator: String,

    /// Use the one-ply reflex agent instead of a search agent
    #[arg(long)]
    reflex: bool,

    #[arg(long, default_value_t = 300)]
    rounds: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    use multiminimax::strategies::reflex::ReflexAgent;
    use multiminimax::{AdversarialSearch, AgentConfig, Heuristic, RandomAgent, Strategy};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = AgentConfig::from_args(&args.evaluator, &args.depth)?
        .with_algorithm(args.algorithm.parse()?)
        .apply_env_overrides()?;
    tracing::info!(?config, "starting game");

    let maze = Maze::parse(CLASSIC);
    let mut eater: Box<dyn Strategy<Maze>> = if args.reflex {
        Box::new(ReflexAgent::new(
            Heuristic::from_config(&config),
            StdRng::seed_from_u64(args.seed),
        ))
    } else {
        Box::new(AdversarialSearch::from_config(&config))
    };
    let mut ghosts: Vec<RandomAgent<StdRng>> = (1..maze.num_agents())
        .map(|i| RandomAgent::new(i, StdRng::seed_from_u64(args.seed + i as u64)))
        .collect();
    let mut strategies: Vec<&mut dyn Strategy<Maze>> = Vec::new();
    strategies.push(eater.as_mut());
    strategies.extend(ghosts.iter_mut().map(|g| g as &mut dyn Strategy<Maze>));

    let episode = multiminimax::play_episode(maze, &mut strategies, args.rounds)?;
    print!("{}", episode.state);
    match episode.outcome {
        Some(outcome) => println!("{:?} after {} rounds", outcome, episode.rounds),
        None => println!("gave up after {} rounds", episode.rounds),
    }
    Ok(())
}
