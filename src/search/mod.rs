//! Search engines over the board graph.
//!
//! Both engines own their frontier and bookkeeping for the length of a single
//! [`SearchEngine::search`] call; nothing survives between runs.

pub mod astar;
pub mod bfs;

pub use astar::AStarSearch;
pub use bfs::BfsSearch;

use std::collections::HashMap;
use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::puzzle::{Move, State};
use crate::report::Reporter;

/// Optional budget, checked once before every expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(limit: usize) -> Self {
        Self {
            max_expansions: Some(limit),
        }
    }

    pub(crate) fn check(&self, expanded: usize) -> Result<()> {
        match self.max_expansions {
            Some(limit) if expanded >= limit => Err(PuzzleError::ExpansionLimit { limit }),
            _ => Ok(()),
        }
    }
}

/// A path from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<State>,
    /// States popped and expanded, goal included.
    pub expanded: usize,
}

impl Solution {
    /// Number of slides.
    pub fn cost(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Blank moves along the path.
    pub fn moves(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].move_to(&pair[1]))
            .collect()
    }
}

pub trait SearchEngine {
    /// Short label used in events, `BFS` or `A*`.
    fn name(&self) -> &'static str;

    /// Finds a minimum-slide path from `start` to `goal`.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::SearchExhausted`] if the goal cannot be reached and
    /// [`PuzzleError::ExpansionLimit`] if the budget runs out first.
    fn search(&self, start: &State, goal: &State, reporter: &mut dyn Reporter) -> Result<Solution>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    AStar,
}

impl Algorithm {
    pub fn engine(self, limits: SearchLimits) -> Box<dyn SearchEngine> {
        match self {
            Algorithm::Bfs => Box::new(BfsSearch::new(limits)),
            Algorithm::AStar => Box::new(AStarSearch::new(limits)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::AStar => write!(f, "A*"),
        }
    }
}

/// Parses both boards, then runs `algorithm`.
///
/// Malformed input is rejected with [`PuzzleError::InvalidState`] before any
/// state is expanded.
pub fn solve(
    start: &str,
    goal: &str,
    algorithm: Algorithm,
    limits: SearchLimits,
    reporter: &mut dyn Reporter,
) -> Result<Solution> {
    let start: State = start.parse()?;
    let goal: State = goal.parse()?;
    algorithm.engine(limits).search(&start, &goal, reporter)
}

/// Walks parent links back from `end`. The start is the only state without one.
fn trace_path(parents: &HashMap<State, State>, end: State) -> Vec<State> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::NoopReporter;

    #[test]
    fn limits_allow_exactly_the_budget() {
        let limits = SearchLimits::with_max_expansions(2);
        assert!(limits.check(0).is_ok());
        assert!(limits.check(1).is_ok());
        assert_eq!(limits.check(2), Err(PuzzleError::ExpansionLimit { limit: 2 }));
        assert!(SearchLimits::unlimited().check(usize::MAX).is_ok());
    }

    #[test]
    fn trace_path_follows_parents() {
        let a: State = "1203456789".parse().unwrap();
        let b: State = "1023456789".parse().unwrap();
        let parents = HashMap::from([(b, a), (State::GOAL, b)]);
        assert_eq!(trace_path(&parents, State::GOAL), vec![a, b, State::GOAL]);
        assert_eq!(trace_path(&parents, a), vec![a]);
    }

    #[test]
    fn solution_lists_blank_moves() {
        let solution = Solution {
            path: vec![
                "1203456789".parse().unwrap(),
                "1023456789".parse().unwrap(),
                State::GOAL,
            ],
            expanded: 3,
        };
        assert_eq!(solution.cost(), 2);
        assert_eq!(solution.moves(), vec![Move::Left, Move::Left]);
    }

    #[test]
    fn solve_rejects_bad_input_before_searching() {
        for algorithm in [Algorithm::Bfs, Algorithm::AStar] {
            let err = solve(
                "0123456789",
                "01234567ab",
                algorithm,
                SearchLimits::unlimited(),
                &mut NoopReporter,
            )
            .unwrap_err();
            assert!(matches!(err, PuzzleError::InvalidState { .. }));
        }
    }

    #[test]
    fn solve_runs_the_chosen_engine() {
        let solution = solve(
            "1023456789",
            "0123456789",
            Algorithm::AStar,
            SearchLimits::unlimited(),
            &mut NoopReporter,
        )
        .unwrap();
        assert_eq!(solution.cost(), 1);
        assert_eq!(Algorithm::AStar.engine(SearchLimits::unlimited()).name(), "A*");
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
    }
}
