//! Manhattan-distance estimate of the slides left to reach a goal.

use crate::puzzle::{State, BLANK, CELLS, COLS};

/// Sum over non-blank tiles of the grid distance to their cell in the goal.
///
/// Target cells are read off the goal handed to [`Manhattan::new`]. For the
/// canonical goal this is tile `d` at `(d / 5, d % 5)`.
#[derive(Debug, Clone)]
pub struct Manhattan {
    targets: [usize; CELLS],
}

impl Manhattan {
    pub fn new(goal: &State) -> Self {
        let mut targets = [0; CELLS];
        for (index, &symbol) in goal.cells().iter().enumerate() {
            targets[symbol as usize] = index;
        }
        Self { targets }
    }

    pub fn estimate(&self, state: &State) -> u32 {
        state
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &symbol)| symbol != BLANK)
            .map(|(index, &symbol)| {
                let target = self.targets[symbol as usize];
                let rows = (index / COLS).abs_diff(target / COLS);
                let cols = (index % COLS).abs_diff(target % COLS);
                (rows + cols) as u32
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state(s: &str) -> State {
        s.parse().unwrap()
    }

    #[test]
    fn goal_scores_zero() {
        let h = Manhattan::new(&State::GOAL);
        assert_eq!(h.estimate(&State::GOAL), 0);

        let other = state("9876543210");
        assert_eq!(Manhattan::new(&other).estimate(&other), 0);
    }

    #[test]
    fn blank_is_not_counted() {
        let h = Manhattan::new(&State::GOAL);
        // only tile 1 is displaced, by one column
        assert_eq!(h.estimate(&state("1023456789")), 1);
        // tile 5 one row up
        assert_eq!(h.estimate(&state("5123406789")), 1);
    }

    #[test]
    fn matches_canonical_formula() {
        let h = Manhattan::new(&State::GOAL);
        let s = state("2194705368");
        let expected: u32 = s
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != 0)
            .map(|(i, &d)| {
                let d = d as usize;
                ((i / 5).abs_diff(d / 5) + (i % 5).abs_diff(d % 5)) as u32
            })
            .sum();
        assert_eq!(h.estimate(&s), expected);
        assert_eq!(expected, 15);
    }

    #[test]
    fn changes_by_at_most_one_per_slide() {
        let mut rng = StdRng::seed_from_u64(3);
        let h = Manhattan::new(&State::GOAL);
        for _ in 0..500 {
            let s = State::shuffled(&State::GOAL, &mut rng);
            let here = h.estimate(&s);
            for next in s.neighbors() {
                assert!(here.abs_diff(h.estimate(&next)) <= 1);
            }
        }
    }
}
