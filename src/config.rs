//! Configuration management.
//!
//! Loads calculator inputs and defaults from environment variables and
//! a .env file.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Application configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Settings {
    // Pick under evaluation
    pub odds: i32,
    pub true_probability: Decimal,

    // Sizing
    pub bankroll: Decimal,
    pub kelly_fraction: Decimal,
    pub unit_stake: Decimal,

    // Logging
    pub log_level: String,
    pub log_json: bool,
}

impl Settings {
    /// Load settings from environment variables (and .env file).
    pub fn from_env() -> Self {
        // Try to load .env file (ignore if not found).
        let _ = dotenvy::dotenv();

        Self {
            odds: env_i32("ODDS", -110),
            true_probability: env_decimal("TRUE_PROBABILITY", Decimal::new(55, 2)),

            bankroll: env_decimal("BANKROLL", Decimal::new(1000, 0)),
            kelly_fraction: env_decimal("KELLY_FRACTION", Decimal::new(25, 2)),
            unit_stake: env_decimal("UNIT_STAKE", Decimal::ONE_HUNDRED),

            log_level: env_str("LOG_LEVEL", "info"),
            log_json: env_bool("LOG_JSON", false),
        }
    }

    /// Validate configuration for critical requirements.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.odds.abs() < crate::odds::MIN_QUOTE_MAGNITUDE {
            errors.push(format!(
                "ODDS must be a real quote (nonzero, |odds| >= 100), got {}",
                self.odds
            ));
        }

        if self.true_probability <= Decimal::ZERO || self.true_probability >= Decimal::ONE {
            errors.push("TRUE_PROBABILITY must be strictly between 0 and 1".to_string());
        }

        if self.bankroll <= Decimal::ZERO {
            errors.push("BANKROLL must be positive".to_string());
        }

        if self.kelly_fraction <= Decimal::ZERO || self.kelly_fraction > Decimal::ONE {
            errors.push("KELLY_FRACTION must be in (0, 1]".to_string());
        }

        if self.unit_stake <= Decimal::ZERO {
            errors.push("UNIT_STAKE must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// =============================================================================
// Environment helpers
// =============================================================================

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(default)
}

fn env_decimal(key: &str, default: Decimal) -> Decimal {
    std::env::var(key)
        .ok()
        .and_then(|v| Decimal::from_str(&v).ok())
        .unwrap_or(default)
}

fn env_i32(key: &str, default: i32) -> i32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
