//! Reads a position file and prints the move the requested strategy picks.
//!
//! ```text
//! cargo run --example decide -- position.txt Verbose 500 --seed 7
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use connect_four_mcts::Error;
use connect_four_mcts::position::Position;
use connect_four_mcts::random::{RandomGenerator, SeededRandomGenerator, StandardRandomGenerator};
use connect_four_mcts::report::{Report, Verbosity};
use connect_four_mcts::search::{MoveDecision, SearchEngine};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "decide", about = "Pick a Connect Four move with UR, PMCGS or UCT")]
struct Args {
    /// Position file: strategy, player, then six rows of O/R/Y
    input: PathBuf,

    /// Verbose, Brief or None
    verbosity: Verbosity,

    /// Rollouts per legal column
    simulations: u32,

    /// Seed for the random generator; unseeded runs are not reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn decide<K: RandomGenerator>(
    position: &Position,
    simulations: u32,
    random: K,
) -> connect_four_mcts::Result<MoveDecision> {
    SearchEngine::builder(position.board, position.player)
        .with_random_generator(random)
        .with_simulations(simulations)
        .build()
        .select_move(position.strategy)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let position: Position = match text.parse() {
        Ok(position) => position,
        Err(err @ Error::UnknownStrategy { .. }) => {
            warn!("{err}");
            println!("Unknown algorithm");
            return Ok(());
        }
        Err(err) => return Err(err).context("invalid position file"),
    };

    println!("{}", position.player);
    for line in position.board.to_string().lines() {
        let spaced: Vec<String> = line.chars().map(String::from).collect();
        println!("{}", spaced.join(" "));
    }

    let decision = match args.seed {
        Some(seed) => decide(&position, args.simulations, SeededRandomGenerator::new(seed))?,
        None => decide(&position, args.simulations, StandardRandomGenerator)?,
    };

    print!("{}", Report::new(&decision, args.verbosity));
    if args.verbosity == Verbosity::None {
        match decision.display_column() {
            Some(column) => println!("{column}"),
            None => println!("No move available"),
        }
    }

    if let Some(column) = decision.column {
        let after = position.board.apply_move(column, position.player)?;
        if let Some(status) = after.status() {
            println!("{status}");
        }
    }
    Ok(())
}
