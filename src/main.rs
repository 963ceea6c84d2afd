//! Picks Betting Math Engine
//!
//! Evaluates a single pick (an American odds quote plus an estimated
//! true win probability) against a bankroll:
//! - Implied probability and fair odds
//! - Expected value at a reference stake
//! - Kelly criterion stake recommendation (fractional, clamped)
//!
//! All inputs arrive via environment variables / .env; the assessment is
//! printed as JSON for the caller to format.

mod calc;
mod config;
mod error;
mod odds;
mod validate;

use tracing::{error, info};

use calc::evaluator::{EvaluatorConfig, PickEvaluator};
use config::Settings;
use odds::AmericanOdds;

fn main() -> anyhow::Result<()> {
    // Load configuration.
    let settings = Settings::from_env();

    // Initialize logging.
    init_logging(&settings);

    info!("=== Picks Betting Math Engine ===");
    info!(
        odds = settings.odds,
        true_probability = %settings.true_probability,
        bankroll = %settings.bankroll,
        kelly_fraction = %settings.kelly_fraction,
        "Configuration loaded"
    );

    // Validate settings.
    if let Err(errors) = settings.validate() {
        for e in &errors {
            error!(error = %e, "Configuration error");
        }
        anyhow::bail!("Configuration validation failed");
    }

    let odds = AmericanOdds::new(settings.odds)?;

    let evaluator = PickEvaluator::new(EvaluatorConfig {
        kelly_fraction: settings.kelly_fraction,
        unit_stake: settings.unit_stake,
    });

    let assessment = evaluator.evaluate(settings.bankroll, odds, settings.true_probability)?;

    info!(
        fair_odds = %assessment.fair_odds,
        ev = %assessment.ev.expected_value,
        stake = %assessment.sizing.stake,
        stake_percent = %assessment.sizing.stake_percent,
        "Assessment complete"
    );

    println!("{}", serde_json::to_string_pretty(&assessment)?);

    Ok(())
}

fn init_logging(settings: &Settings) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    if settings.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}
