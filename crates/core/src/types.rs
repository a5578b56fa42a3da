//! Vocabulary for announcing a single tennis game.
//! Point names only exist for the early game (0 through 3 points); once a
//! game reaches deuce territory the call is derived from the point
//! difference instead.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Suffix appended to late-game calls, e.g. "advantage player one".
    pub fn phrase(self) -> &'static str {
        match self {
            Player::One => "player one",
            Player::Two => "player two",
        }
    }
}

/// Ordinal name for an early-game point count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PointName {
    Love,
    Fifteen,
    Thirty,
    Forty,
}

impl PointName {
    pub fn word(self) -> &'static str {
        match self {
            PointName::Love => "love",
            PointName::Fifteen => "fifteen",
            PointName::Thirty => "thirty",
            PointName::Forty => "forty",
        }
    }
}

impl TryFrom<u8> for PointName {
    type Error = ScoreError;

    fn try_from(points: u8) -> Result<Self, ScoreError> {
        match points {
            0 => Ok(PointName::Love),
            1 => Ok(PointName::Fifteen),
            2 => Ok(PointName::Thirty),
            3 => Ok(PointName::Forty),
            _ => Err(ScoreError::PointNameOutOfRange { points }),
        }
    }
}

/// Call made once a game is past the early phase, keyed on the absolute
/// point difference between the players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LateCall {
    Deuce,
    Advantage,
    Win,
}

impl LateCall {
    pub fn from_difference(difference: u8) -> Self {
        match difference {
            0 => LateCall::Deuce,
            1 => LateCall::Advantage,
            _ => LateCall::Win,
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            LateCall::Deuce => "deuce",
            LateCall::Advantage => "advantage",
            LateCall::Win => "win",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// An ordinal point name was requested for a count of four or more.
    PointNameOutOfRange { points: u8 },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointNameOutOfRange { points } => {
                write!(f, "no ordinal point name for {points} points (names stop at forty)")
            }
        }
    }
}

impl std::error::Error for ScoreError {}
