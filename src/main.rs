use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use std::io;
use std::time::Instant;

use slider_search::config::{Config, TraceLevel};
use slider_search::{ConsoleReporter, LogReporter, PuzzleError, Reporter};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = Config::parse();
    let goal = config.goal_state().context("Invalid --goal")?;
    let start = config.start_state(&goal).context("Invalid --start")?;

    println!("Start:\n{}", start.board());
    println!("Goal:\n{}", goal.board());

    if !start.is_solvable_to(&goal) {
        warn!("{} and {} have different permutation parity", start, goal);
        return Err(PuzzleError::Unsolvable).context("Refusing to search");
    }

    for algorithm in config.algorithm.algorithms() {
        let engine = algorithm.engine(config.limits());
        let color = !config.no_color;
        let mut reporter: Box<dyn Reporter> = match config.trace {
            TraceLevel::None => Box::new(LogReporter),
            TraceLevel::Summary => Box::new(ConsoleReporter::new(io::stdout(), color, false)),
            TraceLevel::Full => Box::new(ConsoleReporter::new(io::stdout(), color, true)),
        };

        info!("Running {}", algorithm);
        let started = Instant::now();
        let solution = engine
            .search(&start, &goal, reporter.as_mut())
            .with_context(|| format!("{} search failed", algorithm))?;

        let moves: Vec<String> = solution.moves().iter().map(|m| m.to_string()).collect();
        println!(
            "{}: {} slides, {} expansions, {:.2?}",
            algorithm,
            solution.cost(),
            solution.expanded,
            started.elapsed()
        );
        println!("Blank moves: {}\n", moves.join(" "));
    }

    Ok(())
}
