use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::error::{PuzzleError, Result};

pub const ROWS: usize = 2;
pub const COLS: usize = 5;
pub const CELLS: usize = ROWS * COLS;

/// The empty cell.
pub const BLANK: u8 = 0;

/// Direction the blank slides in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Generation order; ties in both engines are broken by this order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One configuration of the 2x5 board, stored row-major.
///
/// A `State` can only be built from a checked permutation of `0..=9`, so every
/// value in circulation satisfies the permutation invariant and the search
/// code never re-validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    cells: [u8; CELLS],
}

impl State {
    /// The canonical goal `0123456789`.
    pub const GOAL: State = State {
        cells: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    };

    /// Builds a state from raw symbol values, checking the permutation invariant.
    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                PuzzleError::invalid(&render(&cells), format!("symbol {value} out of range"))
            })?;
            if *slot {
                return Err(PuzzleError::invalid(
                    &render(&cells),
                    format!("symbol {value} appears more than once"),
                ));
            }
            *slot = true;
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Cell index of the blank.
    pub fn blank_index(&self) -> usize {
        // Every state holds each symbol exactly once.
        self.cells.iter().position(|&v| v == BLANK).unwrap_or(0)
    }

    /// Cell index holding `symbol`.
    pub fn position_of(&self, symbol: u8) -> usize {
        self.cells.iter().position(|&v| v == symbol).unwrap_or(0)
    }

    /// Slides the blank one cell in `movement`, or `None` at the board edge.
    pub fn apply_move(&self, movement: Move) -> Option<Self> {
        let blank = self.blank_index();
        let (dr, dc) = movement.as_offset();

        let new_row = (blank / COLS) as isize + dr;
        let new_col = (blank % COLS) as isize + dc;

        if new_row >= 0 && new_row < ROWS as isize && new_col >= 0 && new_col < COLS as isize {
            let target = new_row as usize * COLS + new_col as usize;
            let mut cells = self.cells;
            cells.swap(blank, target);
            Some(Self { cells })
        } else {
            None
        }
    }

    /// Every state one slide away, paired with the move that produced it.
    pub fn successors(&self) -> impl Iterator<Item = (Move, State)> + '_ {
        Move::ALL
            .iter()
            .filter_map(move |&m| self.apply_move(m).map(|next| (m, next)))
    }

    /// States reachable by exactly one slide, in up/down/left/right order.
    pub fn neighbors(&self) -> Vec<State> {
        self.successors().map(|(_, next)| next).collect()
    }

    /// The move taking `self` to `next`, if they are one slide apart.
    pub fn move_to(&self, next: &State) -> Option<Move> {
        self.successors()
            .find(|(_, candidate)| candidate == next)
            .map(|(m, _)| m)
    }

    /// Whether `goal` lies in the same parity class as `self`.
    ///
    /// With an odd column count a horizontal slide never changes the tile
    /// order and a vertical slide hops a tile over an even number of others,
    /// so the inversion parity relative to the goal is invariant.
    pub fn is_solvable_to(&self, goal: &State) -> bool {
        Self::count_inversions(self, goal) % 2 == 0
    }

    /// Inversions among non-blank tiles, ranked by their cell in `goal`.
    fn count_inversions(&self, goal: &State) -> usize {
        let ranks: Vec<usize> = self
            .cells
            .iter()
            .filter(|&&v| v != BLANK)
            .map(|&v| goal.position_of(v))
            .collect();

        ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| ranks[i + 1..].iter().filter(|&&next| next < rank).count())
            .sum()
    }

    /// A random walk of `steps` slides away from `self`, never undoing the
    /// previous slide.
    pub fn scrambled<R: Rng + ?Sized>(&self, steps: usize, rng: &mut R) -> Self {
        let mut current = *self;
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let options: Vec<(Move, State)> = current
                .successors()
                .filter(|(m, _)| last.map_or(true, |l| *m != l.opposite()))
                .collect();
            if let Some(&(m, next)) = options.choose(rng) {
                current = next;
                last = Some(m);
            }
        }

        current
    }

    /// A uniformly random state in the same parity class as `goal`.
    pub fn shuffled<R: Rng + ?Sized>(goal: &State, rng: &mut R) -> Self {
        let mut cells = goal.cells;
        loop {
            cells.shuffle(rng);
            let candidate = Self { cells };
            if candidate.is_solvable_to(goal) {
                return candidate;
            }
        }
    }

    /// Multi-line 2x5 view.
    pub fn board(&self) -> Board<'_> {
        Board(self)
    }
}

fn render(cells: &[u8]) -> String {
    cells.iter().map(|v| v.to_string()).collect()
}

impl FromStr for State {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELLS {
            return Err(PuzzleError::invalid(
                s,
                format!("expected {CELLS} symbols, found {}", chars.len()),
            ));
        }

        let mut cells = [0u8; CELLS];
        for (cell, ch) in cells.iter_mut().zip(&chars) {
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| PuzzleError::invalid(s, format!("{ch:?} is not a digit")))?;
            *cell = digit as u8;
        }

        Self::from_cells(cells).map_err(|_| PuzzleError::invalid(s, "not a permutation of 0-9"))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &val in &self.cells {
            write!(f, "{}", val)?;
        }
        Ok(())
    }
}

/// Row-per-line rendering of a [`State`].
pub struct Board<'a>(&'a State);

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.cells.chunks(COLS) {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
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
    fn parses_and_displays_row_major() {
        let s = state("2194705368");
        assert_eq!(s.to_string(), "2194705368");
        assert_eq!(s.board().to_string(), "2 1 9 4 7\n0 5 3 6 8\n");
        assert_eq!(s.blank_index(), 5);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = "012345678".parse::<State>().unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidState { .. }));
        assert!("01234567890".parse::<State>().is_err());
    }

    #[test]
    fn rejects_non_digits_and_duplicates() {
        assert!("012345678a".parse::<State>().is_err());
        assert!("0123456788".parse::<State>().is_err());
        assert!(State::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 8, 10]).is_err());
    }

    #[test]
    fn corner_blank_has_two_neighbors() {
        let neighbors = State::GOAL.neighbors();
        assert_eq!(neighbors, vec![state("5123406789"), state("1023456789")]);
    }

    #[test]
    fn middle_blank_has_three_neighbors_in_fixed_order() {
        let s = state("1203456789");
        let neighbors = s.neighbors();
        // down, left, right
        assert_eq!(
            neighbors,
            vec![state("1273456089"), state("1023456789"), state("1230456789")]
        );
    }

    #[test]
    fn neighbors_are_permutations_and_moves_invert() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let s = State::shuffled(&State::GOAL, &mut rng);
            for (m, next) in s.successors() {
                assert!(State::from_cells(*next.cells()).is_ok());
                assert_eq!(next.apply_move(m.opposite()), Some(s));
                assert_eq!(s.move_to(&next), Some(m));
            }
        }
    }

    #[test]
    fn edges_block_moves() {
        assert_eq!(State::GOAL.apply_move(Move::Up), None);
        assert_eq!(State::GOAL.apply_move(Move::Left), None);
        assert_eq!(state("1234567890").apply_move(Move::Right), None);
        assert_eq!(state("1234567890").apply_move(Move::Down), None);
    }

    #[test]
    fn parity_follows_the_goal() {
        assert!(state("2194705368").is_solvable_to(&State::GOAL));
        assert!(!state("0213456789").is_solvable_to(&State::GOAL));
        assert!(state("0213456789").is_solvable_to(&state("0213456789")));
    }

    #[test]
    fn scramble_stays_in_parity_class() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = State::GOAL.scrambled(25, &mut rng);
        assert!(s.is_solvable_to(&State::GOAL));
        assert_eq!(State::GOAL.scrambled(0, &mut rng), State::GOAL);
    }
}
