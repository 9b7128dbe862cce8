//! Advanced futures strategies.

use std::fmt;
use std::str::FromStr;

use lab_core::types::{
    Domain, LabError, LabModule, Metric, ParamId, ParamSpec, ScenarioInput, ScenarioResult, Unit,
};

use crate::analytics::profiles::directional_profile;
use crate::analytics::{
    basis, calendar_spread, partial_hedge_value, roll_cost, simple_fair_value, ArbitrageSignal,
};
use crate::engine::params::{
    BASIS_FUTURES, BASIS_SPOT, ENTRY, NEAR, PORTFOLIO_VALUE, RATE, ROLL_FAR, STRATEGY_CONTRACTS,
};
use crate::instruments::{Direction, FuturesPosition, LOT_SIZE};

/// Far leg of a calendar spread.
pub const SPREAD_FAR: ParamSpec = ParamSpec::real(ParamId::Far, Domain::NON_NEGATIVE, 22200.0);

/// Spot price of the cash-and-carry underlying.
pub const CARRY_SPOT: ParamSpec = ParamSpec::real(ParamId::Spot, Domain::NON_NEGATIVE, 1000.0);

/// Quoted futures price of the cash-and-carry underlying.
pub const CARRY_FUTURES: ParamSpec =
    ParamSpec::real(ParamId::FuturesPrice, Domain::NON_NEGATIVE, 1050.0);

/// Share of the portfolio hedged, in percent.
pub const HEDGE_PCT: ParamSpec =
    ParamSpec::count(ParamId::HedgePct, Domain::closed(0.0, 100.0), 50.0);

/// Mispricing below this many price points counts as fair.
pub const FAIR_VALUE_TOLERANCE: f64 = 0.005;

/// A strategy on the advanced menu.
///
/// # Examples
/// ```
/// use lab_core::types::{ParamId, ScenarioInput};
/// use lab_models::catalogue::Strategy;
///
/// let input = ScenarioInput::from_defaults(Strategy::RollOver.params());
/// let result = Strategy::RollOver.evaluate(&input).unwrap();
/// assert_eq!(result.metric("Roll cost").unwrap().value, 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Outright long position
    DirectionalTrade,
    /// Long far, short near
    CalendarSpread,
    /// Buy spot, sell rich futures
    CashAndCarry,
    /// Sell spot, buy cheap futures
    ReverseArbitrage,
    /// Trade the spot/futures gap
    BasisTrade,
    /// Roll into the next expiry
    RollOver,
    /// Hedge a share of the portfolio
    PartialHedge,
    /// Hedge beyond the exposure
    OverHedge,
}

impl Strategy {
    /// All strategies in menu order.
    pub const ALL: [Strategy; 8] = [
        Strategy::DirectionalTrade,
        Strategy::CalendarSpread,
        Strategy::CashAndCarry,
        Strategy::ReverseArbitrage,
        Strategy::BasisTrade,
        Strategy::RollOver,
        Strategy::PartialHedge,
        Strategy::OverHedge,
    ];

    /// Menu names, as accepted by the `strategy` parameter.
    pub const NAMES: &'static [&'static str] = &[
        "Directional Trade",
        "Calendar Spread",
        "Cash-and-Carry Arbitrage",
        "Reverse Arbitrage",
        "Basis Trade",
        "Roll-Over Strategy",
        "Partial Hedge",
        "Over Hedge",
    ];

    /// Menu name.
    pub fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }

    /// Sub-inputs collected for this strategy.
    pub fn params(&self) -> &'static [ParamSpec] {
        match self {
            Strategy::DirectionalTrade => &[ENTRY, STRATEGY_CONTRACTS],
            Strategy::CalendarSpread => &[NEAR, SPREAD_FAR],
            Strategy::CashAndCarry => &[CARRY_SPOT, CARRY_FUTURES, RATE],
            Strategy::BasisTrade => &[BASIS_SPOT, BASIS_FUTURES],
            Strategy::RollOver => &[NEAR, ROLL_FAR],
            Strategy::PartialHedge => &[PORTFOLIO_VALUE, HEDGE_PCT],
            Strategy::ReverseArbitrage | Strategy::OverHedge => &[],
        }
    }

    /// Evaluates the strategy on its sub-inputs.
    pub fn evaluate(&self, input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
        let result = ScenarioResult::new(LabModule::AdvancedStrategies);
        match self {
            Strategy::DirectionalTrade => {
                let entry = ENTRY.read_real(input)?;
                let contracts = STRATEGY_CONTRACTS.read_count(input)?;
                let position =
                    FuturesPosition::new(entry, f64::from(contracts), LOT_SIZE, Direction::Long)?;
                Ok(result.with_curve(directional_profile(&position)))
            }
            Strategy::CalendarSpread => {
                let near = NEAR.read_real(input)?;
                let far = SPREAD_FAR.read_real(input)?;
                Ok(result.with_metric(Metric::new(
                    "Spread",
                    calendar_spread(near, far),
                    Unit::Price,
                    2,
                )))
            }
            Strategy::CashAndCarry => {
                let spot = CARRY_SPOT.read_real(input)?;
                let futures = CARRY_FUTURES.read_real(input)?;
                let rate = RATE.read_real(input)?;
                let fair = simple_fair_value(spot, rate);
                let signal = ArbitrageSignal::classify(futures, fair, FAIR_VALUE_TOLERANCE);
                Ok(result
                    .with_metric(Metric::new("Fair value", fair, Unit::Price, 2))
                    .with_metric(Metric::new("Mispricing", futures - fair, Unit::Price, 2))
                    .with_feedback(signal.explanation()))
            }
            Strategy::ReverseArbitrage => {
                Ok(result.with_feedback("When futures below fair value → sell spot buy futures"))
            }
            Strategy::BasisTrade => {
                let spot = BASIS_SPOT.read_real(input)?;
                let futures = BASIS_FUTURES.read_real(input)?;
                Ok(result.with_metric(Metric::new("Basis", basis(spot, futures), Unit::Price, 2)))
            }
            Strategy::RollOver => {
                let near = NEAR.read_real(input)?;
                let next = ROLL_FAR.read_real(input)?;
                Ok(result.with_metric(Metric::new(
                    "Roll cost",
                    roll_cost(near, next),
                    Unit::Price,
                    2,
                )))
            }
            Strategy::PartialHedge => {
                let value = PORTFOLIO_VALUE.read_real(input)?;
                let pct = HEDGE_PCT.read_real(input)?;
                Ok(result.with_metric(Metric::new(
                    "Hedged value",
                    partial_hedge_value(value, pct),
                    Unit::Rupees,
                    0,
                )))
            }
            Strategy::OverHedge => Ok(result.with_feedback("Too many futures → speculative risk")),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown strategy '{}'", s))
    }
}
