use log::debug;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use super::{trace_path, SearchEngine, SearchLimits, Solution};
use crate::error::{PuzzleError, Result};
use crate::puzzle::State;
use crate::report::{Expansion, Reporter};

/// Breadth-first search. Dequeues in non-decreasing depth, so the first time
/// the goal comes off the queue its path is a shortest one.
#[derive(Debug, Clone, Default)]
pub struct BfsSearch {
    limits: SearchLimits,
}

impl BfsSearch {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl SearchEngine for BfsSearch {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, start: &State, goal: &State, reporter: &mut dyn Reporter) -> Result<Solution> {
        debug!("BFS: {} -> {}", start, goal);

        let mut frontier: VecDeque<(State, u32)> = VecDeque::from([(*start, 0)]);
        // Doubles as the visited set; the start is visited but has no parent.
        let mut parents: HashMap<State, State> = HashMap::new();
        let mut expanded = 0;

        while let Some((current, depth)) = frontier.pop_front() {
            self.limits.check(expanded)?;
            expanded += 1;
            reporter.on_expand(&Expansion {
                engine: self.name(),
                index: expanded,
                state: current,
                depth,
                estimate: None,
            });

            if current == *goal {
                let path = trace_path(&parents, current);
                debug!("BFS: {} slides, {} expansions", depth, expanded);
                reporter.on_solution(self.name(), &path);
                return Ok(Solution { path, expanded });
            }

            for next in current.neighbors() {
                if next == *start {
                    continue;
                }
                if let Entry::Vacant(slot) = parents.entry(next) {
                    slot.insert(current);
                    frontier.push_back((next, depth + 1));
                }
            }
        }

        debug!("BFS: exhausted after {} expansions", expanded);
        Err(PuzzleError::SearchExhausted { expanded })
    }
}
