//! Kelly criterion stake sizing.
//!
//! Full Kelly fraction:
//!     f* = (b*p - q) / b
//! Where:
//!     b = net fractional odds (decimal multiplier - 1)
//!     p = estimated win probability
//!     q = 1 - p
//!
//! We apply:
//! - Fractional Kelly (e.g., 0.25 for quarter Kelly)
//! - Clamp to zero when there is no positive edge
//! - Cap at the full bankroll

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::CalcError;
use crate::odds::AmericanOdds;
use crate::validate;

/// Result of a stake sizing calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StakeResult {
    /// Recommended stake after fractional scaling, in currency units.
    pub stake: Decimal,
    /// Recommended stake as a percentage of bankroll.
    pub stake_percent: Decimal,
    /// Unscaled full-Kelly percentage, for reference.
    pub full_kelly_percent: Decimal,
}

impl StakeResult {
    /// The no-bet recommendation.
    fn zero() -> Self {
        Self {
            stake: Decimal::ZERO,
            stake_percent: Decimal::ZERO,
            full_kelly_percent: Decimal::ZERO,
        }
    }
}

/// Kelly criterion stake sizer.
pub struct KellyStakeSizer {
    /// Fractional-Kelly multiplier in (0, 1].
    pub fraction: Decimal,
}

impl KellyStakeSizer {
    pub fn new(fraction: Decimal) -> Self {
        Self { fraction }
    }

    /// Recommend a stake for a bet at `odds` with estimated win
    /// probability `true_probability`.
    ///
    /// A non-positive raw Kelly fraction (no edge) recommends a zero
    /// stake; it never produces a negative bet.
    pub fn recommend(
        &self,
        bankroll: Decimal,
        odds: AmericanOdds,
        true_probability: Decimal,
    ) -> Result<StakeResult, CalcError> {
        validate::bankroll(bankroll)?;
        validate::probability(true_probability)?;
        validate::fraction(self.fraction)?;

        let b = odds.net_odds();
        let p = true_probability;
        let q = Decimal::ONE - p;

        // f* = (b*p - q) / b
        let raw = (b * p - q) / b;
        if raw <= Decimal::ZERO {
            debug!(odds = %odds, p = %p, raw_kelly = %raw, "No positive edge, zero stake");
            return Ok(StakeResult::zero());
        }

        let scaled = raw * self.fraction;
        let stake = (bankroll * scaled).min(bankroll);

        Ok(StakeResult {
            stake,
            stake_percent: scaled * Decimal::ONE_HUNDRED,
            full_kelly_percent: raw * Decimal::ONE_HUNDRED,
        })
    }
}

impl Default for KellyStakeSizer {
    /// Quarter Kelly.
    fn default() -> Self {
        Self::new(Decimal::new(25, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn even_money_ten_percent_edge() {
        // b = 1, p = 0.55: f* = (0.55 - 0.45) / 1 = 0.10
        // Full Kelly on $1000 => $100
        let sizer = KellyStakeSizer::new(dec!(1));
        let result = sizer
            .recommend(dec!(1000), AmericanOdds::new(100).unwrap(), dec!(0.55))
            .unwrap();
        assert_eq!(result.stake, dec!(100));
        assert_eq!(result.stake_percent, dec!(10));
        assert_eq!(result.full_kelly_percent, dec!(10));
    }

    #[test]
    fn no_edge_recommends_zero() {
        // p = 0.45 below the ~0.524 implied by -110 => raw Kelly < 0
        let sizer = KellyStakeSizer::default();
        let result = sizer
            .recommend(dec!(1000), AmericanOdds::new(-110).unwrap(), dec!(0.45))
            .unwrap();
        assert_eq!(result, StakeResult::zero());
    }
}
