use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::puzzle::State;
use crate::search::{Algorithm, SearchLimits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineChoice {
    Bfs,
    Astar,
    Both,
}

impl EngineChoice {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            EngineChoice::Bfs => vec![Algorithm::Bfs],
            EngineChoice::Astar => vec![Algorithm::AStar],
            EngineChoice::Both => vec![Algorithm::Bfs, Algorithm::AStar],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraceLevel {
    /// Only the final summary line
    None,
    /// Print the solution path
    Summary,
    /// Print every expanded board as well
    Full,
}

/// Solve the 2x5 sliding-tile puzzle with BFS and/or A*.
#[derive(Parser, Debug, Clone)]
#[command(name = "slider-search", version)]
pub struct Config {
    /// Start board, ten digits row-major with 0 as the blank
    #[arg(long, default_value = "2194705368")]
    pub start: String,

    /// Goal board
    #[arg(long, default_value = "0123456789")]
    pub goal: String,

    #[arg(long, value_enum, default_value_t = EngineChoice::Both)]
    pub algorithm: EngineChoice,

    /// Replace --start with a random walk of this many slides from the goal
    #[arg(long)]
    pub scramble: Option<usize>,

    /// Seed for --scramble
    #[arg(long, requires = "scramble")]
    pub seed: Option<u64>,

    /// Give up after this many expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    #[arg(long, value_enum, default_value_t = TraceLevel::Summary)]
    pub trace: TraceLevel,

    /// Disable colored board output
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    pub fn goal_state(&self) -> Result<State> {
        self.goal.parse()
    }

    /// The start board, scrambled from the goal when `--scramble` is set.
    pub fn start_state(&self, goal: &State) -> Result<State> {
        match self.scramble {
            Some(steps) => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Ok(goal.scrambled(steps, &mut rng))
            }
            None => self.start.parse(),
        }
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_expansions: self.max_expansions,
        }
    }
}
