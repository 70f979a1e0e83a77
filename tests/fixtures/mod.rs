//! Shared fixtures for integration testing

use elo_engine::{EngineConfig, MatchOutcome, RatingEngine};

/// One rating update with its known result under the default engine
#[derive(Debug, Clone, Copy)]
pub struct UpdateCase {
    pub player: f64,
    pub opponent: f64,
    pub outcome: MatchOutcome,
    pub margin: Option<f64>,
    pub expected: f64,
}

fn case(
    player: f64,
    opponent: f64,
    outcome: MatchOutcome,
    margin: Option<f64>,
    expected: f64,
) -> UpdateCase {
    UpdateCase {
        player,
        opponent,
        outcome,
        margin,
        expected,
    }
}

/// Known results for the default engine (K = 32, rounded)
pub fn reference_updates() -> Vec<UpdateCase> {
    vec![
        case(2000.0, 2000.0, MatchOutcome::Win, None, 2016.0),
        case(2000.0, 2000.0, MatchOutcome::Loss, None, 1984.0),
        case(2000.0, 2000.0, MatchOutcome::Draw, None, 2000.0),
        case(2000.0, 2400.0, MatchOutcome::Draw, None, 2013.0),
        case(2400.0, 2000.0, MatchOutcome::Draw, None, 2387.0),
        case(2000.0, 2000.0, MatchOutcome::Win, Some(4.0), 2026.0),
        case(2000.0, 2000.0, MatchOutcome::Loss, Some(6.0), 1969.0),
    ]
}

pub fn unrounded_engine() -> RatingEngine {
    RatingEngine::with_config(EngineConfig::unrounded()).expect("default K-factor is valid")
}
