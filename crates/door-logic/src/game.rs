//! Single trial execution

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::door::{create_arrangement, select_first_door, Door};
use crate::host::Host;
use crate::strategy::{compute_final_door, Strategy};
use crate::{judge_outcome, Outcome};

/// What happened on stage during one trial
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialDetail {
    pub prize_door: Door,
    pub first_choice: Door,
    pub revealed: Door,
    pub stay_door: Door,
    pub switch_door: Door,
}

/// Result of one game, scored under both strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub stay_outcome: Outcome,
    pub switch_outcome: Outcome,
    pub detail: TrialDetail,
}

impl TrialRecord {
    pub fn outcome(&self, strategy: Strategy) -> Outcome {
        match strategy {
            Strategy::Stay => self.stay_outcome,
            Strategy::Switch => self.switch_outcome,
        }
    }
}

/// Play one complete game
///
/// One arrangement, one first pick and one host reveal are shared by both
/// strategies, so each record compares stay and switch on the same game.
pub fn play_single_trial<R: Rng + ?Sized>(rng: &mut R) -> TrialRecord {
    let arrangement = create_arrangement(rng);
    let first_choice = select_first_door(rng);
    let revealed = Host::reveal(&arrangement, first_choice, rng);

    let stay_door = compute_final_door(Strategy::Stay, revealed, first_choice);
    let switch_door = compute_final_door(Strategy::Switch, revealed, first_choice);

    let record = TrialRecord {
        stay_outcome: judge_outcome(stay_door, &arrangement),
        switch_outcome: judge_outcome(switch_door, &arrangement),
        detail: TrialDetail {
            prize_door: arrangement.prize_door(),
            first_choice,
            revealed,
            stay_door,
            switch_door,
        },
    };

    trace!(
        prize = record.detail.prize_door.index(),
        first = first_choice.index(),
        revealed = revealed.index(),
        stay = ?record.stay_outcome,
        switch = ?record.switch_outcome,
        "trial played"
    );

    record
}
