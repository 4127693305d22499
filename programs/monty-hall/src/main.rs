//! Monty Hall simulator
//!
//! Plays the three-door game N times and prints how often staying and
//! switching win.
//!
//! ## Usage
//! ```bash
//! monty-hall 10000 --seed 42
//! monty-hall 500 --format json
//! ```

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use door_logic::{describe_strategy, run_seeded, summarize, GameError, Strategy, Summary};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Format};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            if e.is_invalid_input() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), GameError> {
    let config = args.batch_config();
    let batch = run_seeded(&config)?;
    let summary = summarize(&batch.records).with_seed(batch.seed);

    info!(
        trials = summary.trials,
        seed = batch.seed,
        stay = summary.win_rate(Strategy::Stay),
        switch = summary.win_rate(Strategy::Switch),
        "simulation finished"
    );
    for line in describe_results(&summary) {
        info!("{}", line);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => write!(out, "{}", summary.table())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &summary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// One line per strategy: its win rate and what it does
fn describe_results(summary: &Summary) -> Vec<String> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            format!(
                "{}: won {:.2} of {} games. {}",
                strategy,
                summary.win_rate(strategy),
                summary.trials,
                describe_strategy(strategy)
            )
        })
        .collect()
}
