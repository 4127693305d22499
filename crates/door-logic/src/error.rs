//! Error types for the simulator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// A door index outside 1..=3.
    #[error("Invalid input: door index {0} is outside 1..=3")]
    InvalidDoor(i64),

    /// A trial count that is not a positive integer.
    #[error("Invalid input: trial count must be a positive integer, got {0}")]
    InvalidTrialCount(i64),

    #[error("Invalid arrangement: expected exactly one prize, found {0}")]
    InvalidArrangement(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameError {
    /// True for the caller-supplied input failures (bad door, bad trial count).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidDoor(_) | Self::InvalidTrialCount(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
