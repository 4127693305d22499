//! Door Logic for the Monty Hall simulator
//!
//! Core game logic for the three-door puzzle: one prize, an informed host
//! who opens an empty door, and a contestant who either stays or switches.
//! Every random draw goes through a caller-supplied `rand::Rng`.

mod batch;
mod door;
mod error;
mod game;
mod host;
mod random;
mod strategy;

use serde::{Deserialize, Serialize};

pub use batch::{
    play_n_trials, play_n_trials_to, run_seeded, run_trials, summarize, validate_trial_count,
    BatchConfig, Cell, ProportionTable, SeededBatch, Summary,
};
pub use door::{create_arrangement, select_first_door, Arrangement, Content, Door, DOOR_COUNT};
pub use error::{GameError, Result};
pub use game::{play_single_trial, TrialDetail, TrialRecord};
pub use host::{reveal_host_door, Host};
pub use random::SeededRng;
pub use strategy::{compute_final_door, describe_strategy, Strategy};

/// How a final door turned out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Both outcomes, in report order
    pub const ALL: [Outcome; 2] = [Outcome::Win, Outcome::Lose];

    pub fn name(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
        }
    }
}

/// Win when the prize stands behind the final door
pub fn judge_outcome(final_door: Door, arrangement: &Arrangement) -> Outcome {
    if arrangement.is_prize(final_door) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_outcome() {
        let arrangement = Arrangement::with_prize_behind(Door::TWO);
        assert_eq!(judge_outcome(Door::ONE, &arrangement), Outcome::Lose);
        assert_eq!(judge_outcome(Door::TWO, &arrangement), Outcome::Win);
        assert_eq!(judge_outcome(Door::THREE, &arrangement), Outcome::Lose);
    }

    #[test]
    fn test_outcome_names() {
        assert_eq!(Outcome::Win.name(), "win");
        assert_eq!(serde_json::to_string(&Outcome::Lose).unwrap(), "\"lose\"");
    }
}
