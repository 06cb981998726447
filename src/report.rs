//! Observers for search progress.
//!
//! Engines call a [`Reporter`] once per expansion and once when the goal is
//! reached. Reporters only watch; nothing they do feeds back into the search.

use crossterm::style::{style, Stylize};
use log::{debug, trace, warn};
use std::io::Write;

use crate::puzzle::{State, BLANK, COLS};

/// One frontier pop that was actually expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    /// Short engine label, `BFS` or `A*`.
    pub engine: &'static str,
    /// 1-based count of expansions so far in this run.
    pub index: usize,
    pub state: State,
    /// Slides from the start (path depth for BFS, `g` for A*).
    pub depth: u32,
    /// `f = g + h`, A* only.
    pub estimate: Option<u32>,
}

pub trait Reporter {
    fn on_expand(&mut self, event: &Expansion);

    fn on_solution(&mut self, _engine: &'static str, _path: &[State]) {}
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn on_expand(&mut self, _event: &Expansion) {}
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn on_expand(&mut self, event: &Expansion) {
        match event.estimate {
            Some(f) => trace!(
                "[{} - Expand #{}] g={} f={} {}",
                event.engine,
                event.index,
                event.depth,
                f,
                event.state
            ),
            None => trace!(
                "[{} - Expand #{}] depth={} {}",
                event.engine,
                event.index,
                event.depth,
                event.state
            ),
        }
    }

    fn on_solution(&mut self, engine: &'static str, path: &[State]) {
        debug!(
            "[{}] solution with {} slides: {}",
            engine,
            path.len().saturating_sub(1),
            path.iter().map(State::to_string).collect::<Vec<_>>().join(" -> ")
        );
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub expansions: Vec<Expansion>,
    pub solutions: Vec<Vec<State>>,
}

impl Reporter for Recorder {
    fn on_expand(&mut self, event: &Expansion) {
        self.expansions.push(*event);
    }

    fn on_solution(&mut self, _engine: &'static str, path: &[State]) {
        self.solutions.push(path.to_vec());
    }
}

/// Prints boards to a terminal or any other writer.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
    every_expansion: bool,
}

impl<W: Write> ConsoleReporter<W> {
    /// `every_expansion` prints each expanded board; otherwise only the solution.
    pub fn new(out: W, color: bool, every_expansion: bool) -> Self {
        Self {
            out,
            color,
            every_expansion,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_board(&mut self, state: &State) -> std::io::Result<()> {
        for row in state.cells().chunks(COLS) {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == BLANK && self.color {
                        style(v).dark_grey().bold().to_string()
                    } else {
                        v.to_string()
                    }
                })
                .collect();
            writeln!(self.out, "{}", cells.join(" "))?;
        }
        writeln!(self.out)
    }

    fn write_expansion(&mut self, event: &Expansion) -> std::io::Result<()> {
        match event.estimate {
            Some(f) => writeln!(
                self.out,
                "[{} - Expand #{}] (g={}, f={})",
                event.engine, event.index, event.depth, f
            )?,
            None => writeln!(
                self.out,
                "[{} - Expand #{}] (depth={})",
                event.engine, event.index, event.depth
            )?,
        }
        self.write_board(&event.state)
    }

    fn write_solution(&mut self, engine: &'static str, path: &[State]) -> std::io::Result<()> {
        let header = format!("[{engine}] solution found!");
        if self.color {
            writeln!(self.out, "{}\n", style(header).green())?;
        } else {
            writeln!(self.out, "{header}\n")?;
        }
        for (step, state) in path.iter().enumerate() {
            writeln!(self.out, "Step {step}:")?;
            self.write_board(state)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_expand(&mut self, event: &Expansion) {
        if !self.every_expansion {
            return;
        }
        if let Err(e) = self.write_expansion(event) {
            warn!("failed to print expansion #{}: {}", event.index, e);
        }
    }

    fn on_solution(&mut self, engine: &'static str, path: &[State]) {
        if let Err(e) = self.write_solution(engine, path) {
            warn!("failed to print solution: {}", e);
        }
    }
}
