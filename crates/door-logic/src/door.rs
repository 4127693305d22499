//! Doors, what stands behind them, and the random game setup

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Number of doors on stage. Fixed at three.
pub const DOOR_COUNT: usize = 3;

/// One of the three door positions, numbered 1..=3
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Door(u8);

impl Door {
    pub const ONE: Door = Door(1);
    pub const TWO: Door = Door(2);
    pub const THREE: Door = Door(3);

    /// Every door, in stage order
    pub const ALL: [Door; DOOR_COUNT] = [Door::ONE, Door::TWO, Door::THREE];

    /// Validate a raw door number
    pub fn new(index: u8) -> Result<Self> {
        match index {
            1..=3 => Ok(Self(index)),
            _ => Err(GameError::InvalidDoor(index as i64)),
        }
    }

    /// The 1-based door number
    pub fn index(self) -> u8 {
        self.0
    }

    fn slot(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The door that is neither `a` nor `b`.
    ///
    /// Only meaningful for `a != b`; when they coincide the lowest other door
    /// is returned.
    pub fn remaining(a: Door, b: Door) -> Door {
        Door::ALL
            .into_iter()
            .find(|d| *d != a && *d != b)
            .unwrap_or(Door::ONE)
    }
}

impl TryFrom<u8> for Door {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self> {
        Door::new(index)
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> u8 {
        door.0
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door {}", self.0)
    }
}

/// What stands behind a door
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    Prize,
    NonPrize,
}

/// Contents of the three doors for one trial. Exactly one prize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawArrangement", into = "RawArrangement")]
pub struct Arrangement {
    contents: [Content; DOOR_COUNT],
}

/// Wire shape of an arrangement, checked on the way in
#[derive(Serialize, Deserialize)]
struct RawArrangement {
    contents: [Content; DOOR_COUNT],
}

impl TryFrom<RawArrangement> for Arrangement {
    type Error = GameError;

    fn try_from(raw: RawArrangement) -> Result<Self> {
        Arrangement::from_contents(raw.contents)
    }
}

impl From<Arrangement> for RawArrangement {
    fn from(arrangement: Arrangement) -> Self {
        RawArrangement { contents: arrangement.contents }
    }
}

impl Arrangement {
    /// Arrangement with the prize behind `door` and nothing behind the others
    pub fn with_prize_behind(door: Door) -> Self {
        let mut contents = [Content::NonPrize; DOOR_COUNT];
        contents[door.slot()] = Content::Prize;
        Self { contents }
    }

    /// Build from explicit contents, rejecting anything but a single prize
    pub fn from_contents(contents: [Content; DOOR_COUNT]) -> Result<Self> {
        let prizes = contents.iter().filter(|c| **c == Content::Prize).count();
        if prizes != 1 {
            return Err(GameError::InvalidArrangement(prizes));
        }
        Ok(Self { contents })
    }

    pub fn contents(&self) -> [Content; DOOR_COUNT] {
        self.contents
    }

    pub fn content(&self, door: Door) -> Content {
        self.contents[door.slot()]
    }

    pub fn is_prize(&self, door: Door) -> bool {
        self.content(door) == Content::Prize
    }

    pub fn prize_door(&self) -> Door {
        Door::ALL
            .into_iter()
            .find(|d| self.is_prize(*d))
            .unwrap_or(Door::ONE)
    }

    /// The two empty doors, in stage order
    pub fn non_prize_doors(&self) -> [Door; 2] {
        let prize = self.prize_door();
        let mut empty = Door::ALL.into_iter().filter(|d| *d != prize);
        let first = empty.next().unwrap_or(Door::ONE);
        let second = empty.next().unwrap_or(Door::TWO);
        [first, second]
    }
}

/// Shuffle one prize and two empty doors onto the stage.
///
/// Each of the three distinct arrangements is equally likely.
pub fn create_arrangement<R: Rng + ?Sized>(rng: &mut R) -> Arrangement {
    let mut contents = [Content::Prize, Content::NonPrize, Content::NonPrize];
    contents.shuffle(rng);
    Arrangement { contents }
}

/// Contestant's opening pick, uniform and blind to the arrangement
pub fn select_first_door<R: Rng + ?Sized>(rng: &mut R) -> Door {
    Door(rng.gen_range(1..=3))
}
