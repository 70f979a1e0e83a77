//! Elo Engine - rating updates and win probabilities for two-player matches
//!
//! This crate provides a small, synchronous ELO calculator with an optional
//! margin-of-victory amplifier and configurable rounding.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::{RatingError, Result};
pub use rating::RatingEngine;
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
