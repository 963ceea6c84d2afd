//! Combined pick evaluation.
//!
//! Runs the full calculator pass for one pick (implied probability,
//! edge, fair odds, expected value, Kelly stake) behind a single entry
//! point, so callers wire up one evaluator instead of each calculator
//! separately.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::calc::ev::{compute_ev, EvResult};
use crate::calc::kelly::{KellyStakeSizer, StakeResult};
use crate::error::CalcError;
use crate::odds::AmericanOdds;

/// Evaluator configuration.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Fractional-Kelly multiplier in (0, 1].
    pub kelly_fraction: Decimal,
    /// Reference stake the EV figures are computed against.
    pub unit_stake: Decimal,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            kelly_fraction: Decimal::new(25, 2), // quarter Kelly
            unit_stake: Decimal::ONE_HUNDRED,    // $100 reference stake
        }
    }
}

/// Everything a caller needs to render one evaluated pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickAssessment {
    /// The quote the pick was evaluated at.
    pub odds: AmericanOdds,
    /// Win probability the quote implies at zero margin.
    pub implied_probability: Decimal,
    /// Fair quote for the estimated true probability.
    pub fair_odds: AmericanOdds,
    /// Estimated true probability minus implied probability.
    pub edge: Decimal,
    /// Expected value at the configured reference stake.
    pub ev: EvResult,
    /// Kelly stake recommendation.
    pub sizing: StakeResult,
}

/// Evaluates picks with a fixed Kelly fraction and reference stake.
pub struct PickEvaluator {
    config: EvaluatorConfig,
    sizer: KellyStakeSizer,
}

impl PickEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        let sizer = KellyStakeSizer::new(config.kelly_fraction);
        Self { config, sizer }
    }

    /// Evaluate one pick against a bankroll.
    pub fn evaluate(
        &self,
        bankroll: Decimal,
        odds: AmericanOdds,
        true_probability: Decimal,
    ) -> Result<PickAssessment, CalcError> {
        let implied_probability = odds.implied_probability();
        let fair_odds = AmericanOdds::from_probability(true_probability)?;
        let edge = true_probability - implied_probability;

        let ev = compute_ev(self.config.unit_stake, odds, true_probability)?;
        let sizing = self.sizer.recommend(bankroll, odds, true_probability)?;

        info!(
            odds = %odds,
            implied = %implied_probability,
            edge = %edge,
            ev_percent = %ev.ev_percent,
            stake = %sizing.stake,
            "Pick evaluated"
        );

        Ok(PickAssessment {
            odds,
            implied_probability,
            fair_odds,
            edge,
            ev,
            sizing,
        })
    }
}

impl Default for PickEvaluator {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default())
    }
}
