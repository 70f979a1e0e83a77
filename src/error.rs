//! Error types for the rating engine
//!
//! Every engine operation validates its inputs up front and fails with one of
//! these variants before any arithmetic runs.

/// Result type alias for convenience
pub type Result<T, E = RatingError> = std::result::Result<T, E>;

/// Errors raised by rating calculations and engine configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid {side} rating: {value} (ratings must be finite)")]
    InvalidRating { side: &'static str, value: f64 },

    #[error("Invalid match outcome: {value} (expected 0, 0.5 or 1)")]
    InvalidOutcome { value: f64 },

    #[error("Unknown match outcome: {input:?} (expected win, loss or draw)")]
    UnknownOutcome { input: String },

    #[error("Invalid score margin: {value} (margin must be finite)")]
    InvalidScoreMargin { value: f64 },

    #[error("Invalid adjustment factor: {value} (must be finite and greater than 0)")]
    InvalidAdjustmentFactor { value: f64 },

    #[error("Rating update for {player_rating} against {opponent_rating} is not a finite number")]
    NonFiniteResult {
        player_rating: f64,
        opponent_rating: f64,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}
