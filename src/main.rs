//! Command-line front end for the ELO rating engine
//!
//! Loads an engine configuration from a TOML file or the environment, applies
//! command-line overrides and prints the requested calculation.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use elo_engine::{EngineConfig, MatchOutcome, RatingEngine};
use std::path::PathBuf;
use tracing::{debug, info};

/// Elo Engine - two-player rating updates and win probabilities
#[derive(Parser)]
#[command(
    name = "elo-engine",
    version,
    about = "Compute ELO rating updates and win probabilities for two-player matches"
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// K-factor override
    #[arg(short, long, value_name = "K", global = true)]
    k_factor: Option<f64>,

    /// Return unrounded ratings
    #[arg(long, global = true)]
    no_round: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate a player's new rating after a match
    Update {
        /// Current rating of the player
        #[arg(long, allow_negative_numbers = true)]
        player: f64,

        /// Current rating of the opponent
        #[arg(long, allow_negative_numbers = true)]
        opponent: f64,

        /// Match result for the player (win, loss, draw)
        #[arg(long)]
        outcome: MatchOutcome,

        /// Margin of victory used to amplify the change
        #[arg(long, allow_negative_numbers = true)]
        margin: Option<f64>,

        /// Also rate the opponent with the inverse outcome
        #[arg(long)]
        both: bool,
    },
    /// Calculate each side's chance of winning
    Probability {
        /// Current rating of the player
        #[arg(long, allow_negative_numbers = true)]
        player: f64,

        /// Current rating of the opponent
        #[arg(long, allow_negative_numbers = true)]
        opponent: f64,
    },
}

/// Initialize structured logging on stderr with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file or environment, then apply CLI overrides
fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        EngineConfig::from_file(config_path)?
    } else {
        EngineConfig::from_env()?
    };

    if let Some(k_factor) = args.k_factor {
        config.adjustment_factor = k_factor;
    }

    if args.no_round {
        config.round_result = false;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args, engine: &RatingEngine) -> Result<()> {
    match args.command {
        Command::Update {
            player,
            opponent,
            outcome,
            margin,
            both,
        } => {
            if both {
                let ratings = engine
                    .rate_match(player, opponent, outcome, margin)
                    .context("Rating update failed")?;

                if args.json {
                    println!("{}", serde_json::to_string_pretty(&ratings)?);
                } else {
                    println!(
                        "player:   {} -> {} ({:+})",
                        ratings.player.old_rating, ratings.player.new_rating, ratings.player.delta
                    );
                    println!(
                        "opponent: {} -> {} ({:+})",
                        ratings.opponent.old_rating,
                        ratings.opponent.new_rating,
                        ratings.opponent.delta
                    );
                }
            } else {
                let new_rating = engine
                    .update_rating(player, opponent, outcome, margin)
                    .context("Rating update failed")?;

                if args.json {
                    let body = serde_json::json!({
                        "player": player,
                        "opponent": opponent,
                        "outcome": outcome,
                        "margin": margin,
                        "new_rating": new_rating,
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                } else {
                    println!("{}", new_rating);
                }
            }
        }
        Command::Probability { player, opponent } => {
            let probability = engine
                .win_probability(player, opponent)
                .context("Win probability failed")?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&probability)?);
            } else {
                println!("player:   {}%", probability.player);
                println!("opponent: {}%", probability.opponent);
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level)?;

    let config = load_config(&args).context("Configuration error")?;
    debug!(
        round_result = config.round_result,
        adjustment_factor = config.adjustment_factor,
        "Loaded engine configuration"
    );

    let engine = RatingEngine::with_config(config)?;
    run(&args, &engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use elo_engine::RatingError;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_cli_overrides_file_config() {
        let file = config_file("round_result = true\nadjustment_factor = 40.0\n");
        let path = file.path().to_str().unwrap();

        let args = Args::try_parse_from([
            "elo-engine",
            "--config",
            path,
            "--k-factor",
            "16",
            "--no-round",
            "probability",
            "--player",
            "2000",
            "--opponent",
            "2000",
        ])
        .unwrap();

        let config = load_config(&args).unwrap();
        assert_eq!(config, EngineConfig::new(false, 16.0));
    }

    #[test]
    fn test_file_config_without_overrides() {
        let file = config_file("adjustment_factor = 24.0\n");
        let path = file.path().to_str().unwrap();

        let args = Args::try_parse_from([
            "elo-engine",
            "update",
            "--player",
            "-150",
            "--opponent",
            "2000",
            "--outcome",
            "win",
            "--config",
            path,
        ])
        .unwrap();

        let config = load_config(&args).unwrap();
        assert!(config.round_result);
        assert_eq!(config.adjustment_factor, 24.0);
        assert!(matches!(
            args.command,
            Command::Update {
                player,
                outcome: MatchOutcome::Win,
                ..
            } if player == -150.0
        ));
    }

    #[test]
    fn test_zero_k_factor_override_rejected() {
        let file = config_file("adjustment_factor = 32.0\n");
        let path = file.path().to_str().unwrap();

        let args = Args::try_parse_from([
            "elo-engine",
            "--config",
            path,
            "--k-factor",
            "0",
            "probability",
            "--player",
            "2000",
            "--opponent",
            "2000",
        ])
        .unwrap();

        let err = load_config(&args).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RatingError>(),
            Some(&RatingError::InvalidAdjustmentFactor { value: 0.0 })
        );
    }

    #[test]
    fn test_unknown_outcome_fails_to_parse() {
        let result = Args::try_parse_from([
            "elo-engine",
            "update",
            "--player",
            "2000",
            "--opponent",
            "2000",
            "--outcome",
            "forfeit",
        ]);

        let err = result.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
