//! Batch runner and aggregation
//!
//! Trials are generated as a finite sequence and then reduced to counts and
//! proportions. Nothing is accumulated while trials run.

use std::fmt;
use std::io::{self, Write};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GameError, Result};
use crate::game::{play_single_trial, TrialRecord};
use crate::random::SeededRng;
use crate::strategy::Strategy;
use crate::Outcome;

/// Configuration for a batch of trials
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Requested trial count; only positive values are playable
    pub trials: i64,
    /// Seed for a reproducible batch, drawn from the thread RNG when absent
    pub seed: Option<u64>,
}

impl BatchConfig {
    pub const DEFAULT_TRIALS: i64 = 100;

    pub fn new(trials: i64) -> Self {
        Self { trials, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The trial count as a positive number
    pub fn validate(&self) -> Result<u64> {
        validate_trial_count(self.trials)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TRIALS)
    }
}

/// Reject zero and negative trial counts
pub fn validate_trial_count(trials: i64) -> Result<u64> {
    if trials <= 0 {
        return Err(GameError::InvalidTrialCount(trials));
    }
    Ok(trials as u64)
}

/// Run `trials` games on a caller-supplied random source, in generation order
pub fn run_trials<R: Rng + ?Sized>(trials: i64, rng: &mut R) -> Result<Vec<TrialRecord>> {
    let count = validate_trial_count(trials)?;
    debug!(trials = count, "running batch");
    Ok((0..count).map(|_| play_single_trial(&mut *rng)).collect())
}

/// Records of a seeded batch together with the seed that produced them
#[derive(Clone, Debug)]
pub struct SeededBatch {
    pub seed: u64,
    pub records: Vec<TrialRecord>,
}

/// Run a batch where trial `i` draws from its own stream of the batch seed,
/// so any single trial can be replayed from `(seed, i)`.
pub fn run_seeded(config: &BatchConfig) -> Result<SeededBatch> {
    let count = config.validate()?;
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    debug!(trials = count, seed, "running seeded batch");

    let base = SeededRng::new(seed, 0);
    let records = (0..count)
        .map(|i| play_single_trial(&mut base.for_trial(i)))
        .collect();

    Ok(SeededBatch { seed, records })
}

/// Count and share of one (strategy, outcome) pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub strategy: Strategy,
    pub outcome: Outcome,
    pub count: u64,
    pub proportion: f64,
}

/// Aggregate statistics over a set of trial records
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub trials: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<u64>,
    pub cells: Vec<Cell>,
}

impl Summary {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn cell(&self, strategy: Strategy, outcome: Outcome) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|c| c.strategy == strategy && c.outcome == outcome)
    }

    pub fn count(&self, strategy: Strategy, outcome: Outcome) -> u64 {
        self.cell(strategy, outcome).map_or(0, |c| c.count)
    }

    pub fn proportion(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        self.cell(strategy, outcome).map_or(0.0, |c| c.proportion)
    }

    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        self.proportion(strategy, Outcome::Win)
    }

    /// 2x2 proportion table view for printing
    pub fn table(&self) -> ProportionTable<'_> {
        ProportionTable(self)
    }
}

fn slot(strategy: Strategy, outcome: Outcome) -> usize {
    let row = match strategy {
        Strategy::Stay => 0,
        Strategy::Switch => 1,
    };
    let col = match outcome {
        Outcome::Win => 0,
        Outcome::Lose => 1,
    };
    row * 2 + col
}

/// Group records by (strategy, outcome) and divide each count by the total
pub fn summarize(records: &[TrialRecord]) -> Summary {
    let counts = records.iter().fold([0u64; 4], |mut acc, record| {
        for strategy in Strategy::ALL {
            acc[slot(strategy, record.outcome(strategy))] += 1;
        }
        acc
    });

    let trials = records.len() as u64;
    let cells = Strategy::ALL
        .into_iter()
        .flat_map(|strategy| Outcome::ALL.into_iter().map(move |outcome| (strategy, outcome)))
        .map(|(strategy, outcome)| {
            let count = counts[slot(strategy, outcome)];
            let proportion = if trials == 0 {
                0.0
            } else {
                count as f64 / trials as f64
            };
            Cell { strategy, outcome, count, proportion }
        })
        .collect();

    Summary { trials, seed: None, cells }
}

/// Rows are strategies, columns are outcomes, cells are proportions to 2 decimals
pub struct ProportionTable<'a>(&'a Summary);

impl fmt::Display for ProportionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8}", "strategy")?;
        for outcome in Outcome::ALL {
            write!(f, " {:>6}", outcome.name())?;
        }
        writeln!(f)?;

        for strategy in Strategy::ALL {
            write!(f, "{:<8}", strategy.name())?;
            for outcome in Outcome::ALL {
                write!(f, " {:>6.2}", self.0.proportion(strategy, outcome))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Run `trials` games, write the proportion table to `out`, return the records.
///
/// An invalid trial count fails before any game is played and nothing is written.
pub fn play_n_trials_to<R, W>(trials: i64, rng: &mut R, out: &mut W) -> Result<Vec<TrialRecord>>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let records = run_trials(trials, rng)?;
    let summary = summarize(&records);
    debug!(
        stay = summary.win_rate(Strategy::Stay),
        switch = summary.win_rate(Strategy::Switch),
        "batch complete"
    );
    write!(out, "{}", summary.table())?;
    Ok(records)
}

/// Same as [`play_n_trials_to`], printing the table to standard output
pub fn play_n_trials<R: Rng + ?Sized>(trials: i64, rng: &mut R) -> Result<Vec<TrialRecord>> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    play_n_trials_to(trials, rng, &mut handle)
}
