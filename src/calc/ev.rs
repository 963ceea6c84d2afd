//! Expected value of a single bet.
//!
//! For a stake S at net fractional odds b with estimated win probability p:
//!     EV = p * (S * b) + (1 - p) * (-S)
//!
//! A true probability equal to the quote's implied probability yields
//! EV ≈ 0: a break-even market, not an error.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::CalcError;
use crate::odds::AmericanOdds;
use crate::validate;

/// Outcome of an EV calculation. Raw numbers only; formatting for
/// display is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvResult {
    /// Net profit if the bet wins.
    pub win_profit: Decimal,
    /// Probability-weighted expected value, in currency units.
    pub expected_value: Decimal,
    /// Expected value as a percentage of the stake.
    pub ev_percent: Decimal,
}

/// Compute the expected value of staking `stake` at `odds` given an
/// estimated true win probability.
pub fn compute_ev(
    stake: Decimal,
    odds: AmericanOdds,
    true_probability: Decimal,
) -> Result<EvResult, CalcError> {
    validate::stake(stake)?;
    validate::probability(true_probability)?;

    let win_profit = stake * odds.net_odds();
    let loss = -stake;

    let expected_value =
        true_probability * win_profit + (Decimal::ONE - true_probability) * loss;
    let ev_percent = expected_value / stake * Decimal::ONE_HUNDRED;

    debug!(
        %stake,
        odds = %odds,
        p = %true_probability,
        ev = %expected_value,
        "EV computed"
    );

    Ok(EvResult {
        win_profit,
        expected_value,
        ev_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn plus_150_break_even_is_exact() {
        // +150 implies p = 0.4: EV = 0.4 * 150 - 0.6 * 100 = 0
        let odds = AmericanOdds::new(150).unwrap();
        let result = compute_ev(dec!(100), odds, dec!(0.4)).unwrap();
        assert_eq!(result.win_profit, dec!(150));
        assert_eq!(result.expected_value, dec!(0));
        assert_eq!(result.ev_percent, dec!(0));
    }

    #[test]
    fn zero_stake_rejected() {
        let odds = AmericanOdds::new(-110).unwrap();
        assert_eq!(
            compute_ev(dec!(0), odds, dec!(0.55)),
            Err(CalcError::InvalidStake(dec!(0)))
        );
    }
}
