//! Shortest-path solver for the 2x5 sliding-tile puzzle.
//!
//! Boards are [`State`]s, searched with [`BfsSearch`] or [`AStarSearch`].
//! Progress is published to a [`Reporter`].

pub mod config;
pub mod error;
pub mod heuristic;
pub mod puzzle;
pub mod report;
pub mod search;

pub use error::{PuzzleError, Result};
pub use heuristic::Manhattan;
pub use puzzle::{Move, State};
pub use report::{ConsoleReporter, Expansion, LogReporter, NoopReporter, Recorder, Reporter};
pub use search::{solve, AStarSearch, Algorithm, BfsSearch, SearchEngine, SearchLimits, Solution};
