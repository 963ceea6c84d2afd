//! American odds quotes and conversions.
//!
//! American odds quote a price two ways:
//! - Positive (+150): net profit on a $100 stake, underdog pricing.
//! - Negative (-110): stake required to win $100, favorite pricing.
//!
//! No legitimate quote has magnitude below 100, so construction rejects
//! the open interval (-100, 100) outright instead of clamping.

#![allow(dead_code)]

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CalcError;

/// Minimum magnitude of a valid quote.
pub const MIN_QUOTE_MAGNITUDE: i32 = 100;

/// A validated American odds quote.
///
/// A value of this type always satisfies `|odds| >= 100`; every
/// conversion below is therefore total and finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    /// Validate and wrap a raw quote.
    pub fn new(value: i32) -> Result<Self, CalcError> {
        if value.abs() < MIN_QUOTE_MAGNITUDE {
            return Err(CalcError::InvalidOdds(value));
        }
        Ok(Self(value))
    }

    /// Fair American odds for an estimated win probability.
    ///
    /// Probabilities at or above 0.5 map to a favorite (negative) quote,
    /// below 0.5 to an underdog (positive) quote. The quote is rounded
    /// to the nearest whole number.
    pub fn from_probability(probability: Decimal) -> Result<Self, CalcError> {
        crate::validate::probability(probability)?;

        let quote = if probability >= Decimal::new(5, 1) {
            -(probability / (Decimal::ONE - probability) * Decimal::ONE_HUNDRED)
        } else {
            (Decimal::ONE - probability) / probability * Decimal::ONE_HUNDRED
        };

        // Quotes outside i32 range would need a probability no book prices.
        let rounded = quote
            .round()
            .to_i32()
            .ok_or(CalcError::InvalidProbability(probability))?;
        Self::new(rounded)
    }

    /// Raw quote value.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Whether this is favorite (negative) pricing.
    pub fn is_favorite(&self) -> bool {
        self.0 < 0
    }

    /// Win probability this quote implies at zero bookmaker margin.
    ///
    /// Positive quotes map into (0, 0.5], negative quotes into [0.5, 1).
    pub fn implied_probability(&self) -> Decimal {
        if self.0 > 0 {
            // 100 / (odds + 100)
            Decimal::ONE_HUNDRED / (Decimal::from(self.0) + Decimal::ONE_HUNDRED)
        } else {
            // |odds| / (|odds| + 100)
            let magnitude = Decimal::from(-self.0);
            magnitude / (magnitude + Decimal::ONE_HUNDRED)
        }
    }

    /// Decimal (European) payout multiplier, stake included. Always > 1.
    pub fn decimal_multiplier(&self) -> Decimal {
        if self.0 > 0 {
            // 1 + odds/100
            Decimal::ONE + Decimal::from(self.0) / Decimal::ONE_HUNDRED
        } else {
            // 1 + 100/|odds|
            Decimal::ONE + Decimal::ONE_HUNDRED / Decimal::from(-self.0)
        }
    }

    /// Net fractional odds: profit per unit staked on a win.
    pub fn net_odds(&self) -> Decimal {
        self.decimal_multiplier() - Decimal::ONE
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sportsbook convention: always show the sign (+150, -110).
        write!(f, "{:+}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_sub_hundred_quotes() {
        assert_eq!(AmericanOdds::new(0), Err(CalcError::InvalidOdds(0)));
        assert_eq!(AmericanOdds::new(50), Err(CalcError::InvalidOdds(50)));
        assert_eq!(AmericanOdds::new(-99), Err(CalcError::InvalidOdds(-99)));
        assert!(AmericanOdds::new(100).is_ok());
        assert!(AmericanOdds::new(-100).is_ok());
    }

    #[test]
    fn even_money_quotes_imply_half() {
        // +100: 100 / (100 + 100) = 0.5
        let plus = AmericanOdds::new(100).unwrap();
        assert_eq!(plus.implied_probability(), dec!(0.5));
        assert_eq!(plus.decimal_multiplier(), dec!(2));

        // -100: 100 / (100 + 100) = 0.5, multiplier 1 + 100/100 = 2
        let minus = AmericanOdds::new(-100).unwrap();
        assert_eq!(minus.implied_probability(), dec!(0.5));
        assert_eq!(minus.decimal_multiplier(), dec!(2));
    }

    #[test]
    fn display_keeps_the_sign() {
        assert_eq!(AmericanOdds::new(150).unwrap().to_string(), "+150");
        assert_eq!(AmericanOdds::new(-110).unwrap().to_string(), "-110");
    }
}
