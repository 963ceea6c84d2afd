//! Shared input guards for the calculators.
//!
//! Both the EV and Kelly paths run through these, so the two calculators
//! can never disagree on bounds. Probability 1 is rejected along with 0:
//! a certain outcome makes q = 0 and degenerates the downstream math.

use rust_decimal::Decimal;

use crate::error::CalcError;

/// Estimated win probability must lie strictly inside (0, 1).
pub fn probability(p: Decimal) -> Result<(), CalcError> {
    if p <= Decimal::ZERO || p >= Decimal::ONE {
        return Err(CalcError::InvalidProbability(p));
    }
    Ok(())
}

/// Bankroll must be positive.
pub fn bankroll(amount: Decimal) -> Result<(), CalcError> {
    if amount <= Decimal::ZERO {
        return Err(CalcError::InvalidBankroll(amount));
    }
    Ok(())
}

/// Stake must be positive.
pub fn stake(amount: Decimal) -> Result<(), CalcError> {
    if amount <= Decimal::ZERO {
        return Err(CalcError::InvalidStake(amount));
    }
    Ok(())
}

/// Fractional-Kelly multiplier must lie in (0, 1].
pub fn fraction(f: Decimal) -> Result<(), CalcError> {
    if f <= Decimal::ZERO || f > Decimal::ONE {
        return Err(CalcError::InvalidFraction(f));
    }
    Ok(())
}
