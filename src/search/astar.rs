use log::debug;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::{trace_path, SearchEngine, SearchLimits, Solution};
use crate::error::{PuzzleError, Result};
use crate::heuristic::Manhattan;
use crate::puzzle::State;
use crate::report::{Expansion, Reporter};

/// Frontier entry. `g` is the cost at push time; an entry whose `g` is worse
/// than the best recorded cost for its state is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    f: u32,
    g: u32,
    state: State,
}

// Reversed so the max-heap pops the smallest (f, g, state).
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.f, other.g, other.state).cmp(&(self.f, self.g, self.state))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* over the board graph with the Manhattan estimate and unit move cost.
///
/// Improvements are re-pushed rather than updated in place; stale entries
/// are dropped when popped.
#[derive(Debug, Clone, Default)]
pub struct AStarSearch {
    limits: SearchLimits,
}

impl AStarSearch {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl SearchEngine for AStarSearch {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, start: &State, goal: &State, reporter: &mut dyn Reporter) -> Result<Solution> {
        debug!("A*: {} -> {}", start, goal);

        let heuristic = Manhattan::new(goal);
        let mut frontier = BinaryHeap::new();
        let mut best_g: HashMap<State, u32> = HashMap::from([(*start, 0)]);
        let mut parents: HashMap<State, State> = HashMap::new();
        let mut expanded = 0;

        frontier.push(Node {
            f: heuristic.estimate(start),
            g: 0,
            state: *start,
        });

        while let Some(Node { f, g, state }) = frontier.pop() {
            if best_g.get(&state).is_some_and(|&best| g > best) {
                continue;
            }

            self.limits.check(expanded)?;
            expanded += 1;
            reporter.on_expand(&Expansion {
                engine: self.name(),
                index: expanded,
                state,
                depth: g,
                estimate: Some(f),
            });

            if state == *goal {
                let path = trace_path(&parents, state);
                debug!("A*: {} slides, {} expansions", g, expanded);
                reporter.on_solution(self.name(), &path);
                return Ok(Solution { path, expanded });
            }

            let new_g = g + 1;
            for next in state.neighbors() {
                if best_g.get(&next).is_some_and(|&best| best <= new_g) {
                    continue;
                }
                best_g.insert(next, new_g);
                parents.insert(next, state);
                frontier.push(Node {
                    f: new_g + heuristic.estimate(&next),
                    g: new_g,
                    state: next,
                });
            }
        }

        debug!("A*: exhausted after {} expansions", expanded);
        Err(PuzzleError::SearchExhausted { expanded })
    }
}
