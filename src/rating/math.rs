//! Pure numeric steps of the ELO computation
//!
//! Nothing here validates its input; `RatingEngine` checks ratings and
//! margins before calling in.

use crate::types::{OutcomeProbability, Rating, RelativeRank};

/// Rating points per factor-of-ten difference in strength
pub const RATING_SCALE: f64 = 400.0;

/// Convert a rating to its base-10 strength, `10^(r / 400)`
pub fn base10_strength(rating: Rating) -> f64 {
    10f64.powf(rating / RATING_SCALE)
}

pub fn relative_rank(player: Rating, opponent: Rating) -> RelativeRank {
    RelativeRank {
        player: base10_strength(player),
        opponent: base10_strength(opponent),
    }
}

/// Share of the combined strength held by the player
pub fn expected_score(rank: &RelativeRank) -> f64 {
    rank.player / (rank.player + rank.opponent)
}

/// Expected score for two ratings
///
/// Uses the strength ratio while the combined strength is a normal float. Far
/// outside the usual rating range the strengths overflow to `inf` or underflow
/// to `0`, so the equivalent rating-difference form takes over there.
pub fn player_expectation(player: Rating, opponent: Rating) -> f64 {
    let rank = relative_rank(player, opponent);
    if (rank.player + rank.opponent).is_normal() {
        expected_score(&rank)
    } else {
        win_fraction(player, opponent)
    }
}

/// Effective K-factor, amplified by `ln(|margin| + 1)` when a margin is given
///
/// A zero margin counts as no margin at all.
pub fn margin_factor(adjustment_factor: f64, score_margin: Option<f64>) -> f64 {
    match score_margin {
        Some(margin) if margin != 0.0 => (margin.abs() + 1.0).ln() * adjustment_factor,
        _ => adjustment_factor,
    }
}

/// Round to the nearest integer, halves away from zero
pub fn round_half_away(value: f64) -> f64 {
    value.round()
}

/// Player's chance to win, `1 / (1 + 10^((opponent - player) / 400))`
pub fn win_fraction(player: Rating, opponent: Rating) -> f64 {
    let strength_ratio = base10_strength(opponent - player);
    1.0 / (1.0 + strength_ratio)
}

/// Split a win fraction into independently rounded percentages
pub fn to_percentages(probability: f64) -> OutcomeProbability {
    OutcomeProbability {
        player: percent(probability),
        opponent: percent(1.0 - probability),
    }
}

fn percent(fraction: f64) -> u8 {
    round_half_away(fraction * 100.0).clamp(0.0, 100.0) as u8
}
