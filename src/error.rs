//! Validation error types for the betting calculators.
//!
//! Every calculator input has its own variant so a caller can map a
//! failure back to the offending form field.

#![allow(dead_code)]

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid American odds {0}: quote must be nonzero with |odds| >= 100")]
    InvalidOdds(i32),

    #[error("invalid probability {0}: must be strictly between 0 and 1")]
    InvalidProbability(Decimal),

    #[error("invalid bankroll {0}: must be positive")]
    InvalidBankroll(Decimal),

    #[error("invalid stake {0}: must be positive")]
    InvalidStake(Decimal),

    #[error("invalid Kelly fraction {0}: must be in (0, 1]")]
    InvalidFraction(Decimal),
}

impl CalcError {
    /// Name of the input field the error refers to, for inline
    /// field-level messages.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidOdds(_) => "odds",
            Self::InvalidProbability(_) => "probability",
            Self::InvalidBankroll(_) => "bankroll",
            Self::InvalidStake(_) => "stake",
            Self::InvalidFraction(_) => "kelly_fraction",
        }
    }
}
