//! ELO rating engine
//!
//! `RatingEngine` owns an immutable `EngineConfig` and exposes the two public
//! operations: rating updates after a match and win probabilities before one.

use crate::config::EngineConfig;
use crate::error::{RatingError, Result};
use crate::rating::math;
use crate::types::{MatchOutcome, MatchRatings, OutcomeProbability, Rating, RatingChange};
use tracing::{debug, warn};

/// Two-player ELO calculator
///
/// The engine holds no mutable state, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingEngine {
    config: EngineConfig,
}

impl RatingEngine {
    /// Create a new engine from the rounding flag and K-factor
    pub fn new(round_result: bool, adjustment_factor: f64) -> Result<Self> {
        Self::with_config(EngineConfig::new(round_result, adjustment_factor))
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn adjustment_factor(&self) -> f64 {
        self.config.adjustment_factor
    }

    pub fn rounds_result(&self) -> bool {
        self.config.round_result
    }

    /// Expected score of the player against the opponent, in (0, 1)
    pub fn expected_score(&self, player_rating: Rating, opponent_rating: Rating) -> Result<f64> {
        check_ratings(player_rating, opponent_rating)?;

        Ok(math::player_expectation(player_rating, opponent_rating))
    }

    /// Calculate the player's new rating after a match
    ///
    /// # Arguments
    /// * `player_rating` - Rating of the player being updated
    /// * `opponent_rating` - Rating of the opponent
    /// * `outcome` - Result from the player's point of view
    /// * `score_margin` - Optional margin of victory; `None` or `0` disables the amplifier
    ///
    /// # Returns
    /// The new rating, rounded when the engine is configured to round
    pub fn update_rating(
        &self,
        player_rating: Rating,
        opponent_rating: Rating,
        outcome: MatchOutcome,
        score_margin: Option<f64>,
    ) -> Result<Rating> {
        check_ratings(player_rating, opponent_rating)?;
        if let Some(margin) = score_margin {
            if !margin.is_finite() {
                warn!("Rejecting non-finite score margin {}", margin);
                return Err(RatingError::InvalidScoreMargin { value: margin });
            }
        }

        let expected = math::player_expectation(player_rating, opponent_rating);
        let factor = math::margin_factor(self.config.adjustment_factor, score_margin);

        let updated = player_rating + (outcome.score() - expected) * factor;
        if !updated.is_finite() {
            warn!(
                player_rating,
                opponent_rating, "Rating update produced a non-finite result"
            );
            return Err(RatingError::NonFiniteResult {
                player_rating,
                opponent_rating,
            });
        }
        let new_rating = if self.config.round_result {
            math::round_half_away(updated)
        } else {
            updated
        };

        debug!(
            player_rating,
            opponent_rating,
            %outcome,
            expected,
            factor,
            new_rating,
            "Updated rating"
        );

        Ok(new_rating)
    }

    /// Update both sides of one match
    ///
    /// The opponent is rated with the inverse outcome and the same margin.
    pub fn rate_match(
        &self,
        player_rating: Rating,
        opponent_rating: Rating,
        outcome: MatchOutcome,
        score_margin: Option<f64>,
    ) -> Result<MatchRatings> {
        let player_new =
            self.update_rating(player_rating, opponent_rating, outcome, score_margin)?;
        let opponent_new = self.update_rating(
            opponent_rating,
            player_rating,
            outcome.inverse(),
            score_margin,
        )?;

        Ok(MatchRatings {
            player: RatingChange::new(outcome, player_rating, player_new),
            opponent: RatingChange::new(outcome.inverse(), opponent_rating, opponent_new),
        })
    }

    /// Calculate each side's chance of winning as integer percentages
    ///
    /// The two values are rounded independently and are not forced to add up
    /// to 100.
    pub fn win_probability(
        &self,
        player_rating: Rating,
        opponent_rating: Rating,
    ) -> Result<OutcomeProbability> {
        check_ratings(player_rating, opponent_rating)?;

        let fraction = math::win_fraction(player_rating, opponent_rating);
        let probability = math::to_percentages(fraction);

        debug!(
            player_rating,
            opponent_rating,
            player = probability.player,
            opponent = probability.opponent,
            "Calculated win probability"
        );

        Ok(probability)
    }
}

fn check_ratings(player_rating: Rating, opponent_rating: Rating) -> Result<()> {
    for (side, value) in [("player", player_rating), ("opponent", opponent_rating)] {
        if !value.is_finite() {
            warn!("Rejecting non-finite {} rating {}", side, value);
            return Err(RatingError::InvalidRating { side, value });
        }
    }

    Ok(())
}
