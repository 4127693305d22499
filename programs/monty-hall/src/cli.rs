//! Command-line arguments

use clap::{Parser, ValueEnum};
use door_logic::BatchConfig;

/// Monty Hall simulator - compare staying and switching over many games
#[derive(Parser, Debug)]
#[command(name = "monty-hall", version)]
#[command(about = "Play the three-door game many times and report win rates for stay and switch")]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Number of games to play
    #[arg(default_value_t = BatchConfig::DEFAULT_TRIALS)]
    pub trials: i64,

    /// Random seed for deterministic runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log batch progress to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Args {
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            trials: self.trials,
            seed: self.seed,
        }
    }
}
