//! ELO rating calculations
//!
//! This module provides the rating engine and the pure numeric steps it is
//! built from.

pub mod engine;
pub mod math;

// Re-export commonly used types
pub use engine::RatingEngine;
