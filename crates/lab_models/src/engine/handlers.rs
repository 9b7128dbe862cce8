//! One pure handler per analytical module.
//!
//! Handlers read their inputs through the declarations in
//! [`super::params`] and never touch anything outside the snapshot.

use lab_core::types::{
    LabError, LabModule, Metric, ParamSpec, ScenarioInput, ScenarioResult, Unit,
};

use super::params::*;
use crate::analytics::profiles::{directional_profile, hedge_profile};
use crate::analytics::{
    basis, cost_of_carry_price, hedge_effectiveness, optimal_hedge_ratio, roll_cost,
    trades_executed, unmatched_orders,
};
use crate::catalogue::{CaseStudy, Strategy};
use crate::instruments::{Direction, FuturesPosition, LOT_SIZE};

pub(super) fn why_futures(_input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    Ok(ScenarioResult::new(LabModule::WhyFutures)
        .with_feedback("Hedgers transfer risk\nSpeculators take risk\nArbitrageurs align prices"))
}

pub(super) fn pricing(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let spot = PRICING_SPOT.read_real(input)?;
    let rate = RATE.read_real(input)?;
    let dividend_yield = DIVIDEND_YIELD.read_real(input)?;
    let horizon = HORIZON.read_real(input)?;

    let futures = cost_of_carry_price(spot, rate, dividend_yield, horizon);
    Ok(ScenarioResult::new(LabModule::Pricing)
        .with_metric(Metric::new("Futures price", futures, Unit::Price, 2)))
}

fn long_position(
    input: &ScenarioInput,
    contracts: &ParamSpec,
) -> Result<FuturesPosition<f64>, LabError> {
    let entry = ENTRY.read_real(input)?;
    let contracts = contracts.read_count(input)?;
    Ok(FuturesPosition::new(
        entry,
        f64::from(contracts),
        LOT_SIZE,
        Direction::Long,
    )?)
}

pub(super) fn mark_to_market(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let position = long_position(input, &POSITION_CONTRACTS)?;
    let price = MTM_PRICE.read_real(input)?;

    Ok(ScenarioResult::new(LabModule::MarkToMarket).with_metric(Metric::new(
        "Daily P&L",
        position.pnl(price),
        Unit::Rupees,
        0,
    )))
}

pub(super) fn trading_pnl(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let long = long_position(input, &POSITION_CONTRACTS)?;
    let price = TRADE_PRICE.read_real(input)?;
    let short = long.flipped();

    Ok(ScenarioResult::new(LabModule::TradingPnl)
        .with_metric(Metric::new("Long P&L", long.pnl(price), Unit::Rupees, 0))
        .with_metric(Metric::new("Short P&L", short.pnl(price), Unit::Rupees, 0)))
}

pub(super) fn strategy_builder(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let position = long_position(input, &STRATEGY_CONTRACTS)?;
    Ok(ScenarioResult::new(LabModule::StrategyBuilder).with_curve(directional_profile(&position)))
}

pub(super) fn hedging_builder(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let value = PORTFOLIO_VALUE.read_real(input)?;
    let beta = BETA.read_real(input)?;
    let contracts = HEDGE_CONTRACTS.read_count(input)?;
    let futures_price = HEDGE_FUTURES_PRICE.read_real(input)?;

    let [portfolio, hedged] = hedge_profile(value, beta, f64::from(contracts), futures_price);
    Ok(ScenarioResult::new(LabModule::HedgingBuilder)
        .with_curve(portfolio)
        .with_curve(hedged))
}

pub(super) fn optimal_hedge(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let value = PORTFOLIO_VALUE.read_real(input)?;
    let beta = BETA.read_real(input)?;
    let futures_price = HEDGE_FUTURES_PRICE.read_real(input)?;

    let contracts = optimal_hedge_ratio(value, beta, futures_price, LOT_SIZE)?;
    Ok(ScenarioResult::new(LabModule::OptimalHedgeRatio).with_metric(Metric::new(
        "Optimal contracts",
        contracts,
        Unit::Contracts,
        2,
    )))
}

pub(super) fn basis_convergence(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let spot = BASIS_SPOT.read_real(input)?;
    let futures = BASIS_FUTURES.read_real(input)?;

    Ok(ScenarioResult::new(LabModule::BasisConvergence)
        .with_metric(Metric::new("Basis", basis(spot, futures), Unit::Price, 2))
        .with_feedback("At expiry, basis converges to 0"))
}

pub(super) fn basis_risk(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let correlation = CORRELATION.read_real(input)?;
    Ok(ScenarioResult::new(LabModule::BasisRisk).with_metric(Metric::new(
        "Hedge effectiveness",
        hedge_effectiveness(correlation),
        Unit::Percent,
        1,
    )))
}

pub(super) fn rolling(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let near = NEAR.read_real(input)?;
    let far = ROLL_FAR.read_real(input)?;
    Ok(ScenarioResult::new(LabModule::RollingFutures).with_metric(Metric::new(
        "Roll cost",
        roll_cost(near, far),
        Unit::Price,
        2,
    )))
}

pub(super) fn matching(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let buy = BUY_ORDERS.read_count(input)?;
    let sell = SELL_ORDERS.read_count(input)?;
    Ok(ScenarioResult::new(LabModule::MatchingSystem)
        .with_metric(Metric::new(
            "Trades executed",
            f64::from(trades_executed(buy, sell)),
            Unit::Trades,
            0,
        ))
        .with_metric(Metric::new(
            "Unmatched orders",
            f64::from(unmatched_orders(buy, sell)),
            Unit::Trades,
            0,
        )))
}

pub(super) fn real_world_cases(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let case = selected_case(input)?;
    case.evaluate(input)
}

pub(super) fn advanced_strategies(input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    let strategy = selected_strategy(input)?;
    strategy.evaluate(input)
}

pub(super) fn selected_case(input: &ScenarioInput) -> Result<CaseStudy, LabError> {
    let name = CASE.read_choice(input)?;
    name.parse().map_err(|e: String| LabError::validation("case", e))
}

pub(super) fn selected_strategy(input: &ScenarioInput) -> Result<Strategy, LabError> {
    let name = STRATEGY.read_choice(input)?;
    name.parse().map_err(|e: String| LabError::validation("strategy", e))
}
