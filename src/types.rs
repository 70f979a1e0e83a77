//! Common value types shared by the engine and its callers

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A competitor's current skill estimate
pub type Rating = f64;

/// Result credited to "the player" in a rating update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

impl MatchOutcome {
    /// Numeric score used by the update formula
    pub fn score(self) -> f64 {
        match self {
            MatchOutcome::Win => 1.0,
            MatchOutcome::Loss => 0.0,
            MatchOutcome::Draw => 0.5,
        }
    }

    /// The same result seen from the opponent's side
    pub fn inverse(self) -> Self {
        match self {
            MatchOutcome::Win => MatchOutcome::Loss,
            MatchOutcome::Loss => MatchOutcome::Win,
            MatchOutcome::Draw => MatchOutcome::Draw,
        }
    }
}

impl TryFrom<f64> for MatchOutcome {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self> {
        if value == 1.0 {
            Ok(MatchOutcome::Win)
        } else if value == 0.0 {
            Ok(MatchOutcome::Loss)
        } else if value == 0.5 {
            Ok(MatchOutcome::Draw)
        } else {
            Err(RatingError::InvalidOutcome { value })
        }
    }
}

impl From<MatchOutcome> for f64 {
    fn from(outcome: MatchOutcome) -> Self {
        outcome.score()
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "win"),
            MatchOutcome::Loss => write!(f, "loss"),
            MatchOutcome::Draw => write!(f, "draw"),
        }
    }
}

impl FromStr for MatchOutcome {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "win" | "w" => Ok(MatchOutcome::Win),
            "loss" | "lose" | "l" => Ok(MatchOutcome::Loss),
            "draw" | "d" => Ok(MatchOutcome::Draw),
            _ => Err(RatingError::UnknownOutcome {
                input: s.to_string(),
            }),
        }
    }
}

/// Base-10 strengths of both competitors, only alive during one computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeRank {
    pub player: f64,
    pub opponent: f64,
}

/// Win chance of each side as an integer percentage
///
/// Both sides are rounded independently from their own fraction, so `total()`
/// can land on 99 or 101.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutcomeProbability {
    pub player: u8,
    pub opponent: u8,
}

impl OutcomeProbability {
    pub fn total(&self) -> u16 {
        u16::from(self.player) + u16::from(self.opponent)
    }
}

/// Rating movement for one side of a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub outcome: MatchOutcome,
    pub old_rating: Rating,
    pub new_rating: Rating,
    pub delta: f64, // new - old, carries the sign
}

impl RatingChange {
    pub fn new(outcome: MatchOutcome, old_rating: Rating, new_rating: Rating) -> Self {
        Self {
            outcome,
            old_rating,
            new_rating,
            delta: new_rating - old_rating,
        }
    }
}

/// Updated ratings for both sides of one match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchRatings {
    pub player: RatingChange,
    pub opponent: RatingChange,
}
