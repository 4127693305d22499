//! Strategy definitions and the final decision

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::door::Door;

/// What the contestant does once the host has opened a door
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keep the original pick.
    Stay,
    /// Move to the other unopened door.
    Switch,
}

impl Strategy {
    /// Both strategies, in report order
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Final door under `strategy`
///
/// # Arguments
/// * `strategy` - Stay or switch
/// * `revealed` - Door the host opened
/// * `first_choice` - Contestant's original pick, must differ from `revealed`
pub fn compute_final_door(strategy: Strategy, revealed: Door, first_choice: Door) -> Door {
    debug_assert_ne!(revealed, first_choice, "host opened the contestant's door");
    match strategy {
        Strategy::Stay => first_choice,
        Strategy::Switch => Door::remaining(revealed, first_choice),
    }
}

/// Get a human-readable description of a strategy
pub fn describe_strategy(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Stay => "Keeps the first pick no matter which door the host opens.",
        Strategy::Switch => "Abandons the first pick for the other unopened door.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stay_keeps_first_choice() {
        for first in Door::ALL {
            for revealed in Door::ALL.into_iter().filter(|d| *d != first) {
                assert_eq!(compute_final_door(Strategy::Stay, revealed, first), first);
            }
        }
    }

    #[test]
    fn test_switch_takes_remaining_door() {
        assert_eq!(compute_final_door(Strategy::Switch, Door::TWO, Door::ONE), Door::THREE);
        assert_eq!(compute_final_door(Strategy::Switch, Door::THREE, Door::ONE), Door::TWO);
        assert_eq!(compute_final_door(Strategy::Switch, Door::ONE, Door::THREE), Door::TWO);

        for first in Door::ALL {
            for revealed in Door::ALL.into_iter().filter(|d| *d != first) {
                let last = compute_final_door(Strategy::Switch, revealed, first);
                assert_ne!(last, first);
                assert_ne!(last, revealed);
            }
        }
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::Stay.to_string(), "stay");
        assert_eq!(Strategy::Switch.to_string(), "switch");
        assert_eq!(serde_json::to_string(&Strategy::Switch).unwrap(), "\"switch\"");
    }

    #[test]
    fn test_descriptions_differ() {
        assert_ne!(describe_strategy(Strategy::Stay), describe_strategy(Strategy::Switch));
    }
}
