//! Property tests for the scenario engine.
//!
//! Every test goes through `engine::collect` and `engine::evaluate`, the
//! same path the command line takes.

use approx::assert_relative_eq;
use lab_core::types::{LabError, LabModule, ParamId, ScenarioInput, ScenarioResult};
use lab_models::engine;
use proptest::prelude::*;

fn run(module: LabModule, overrides: ScenarioInput) -> Result<ScenarioResult, LabError> {
    let input = engine::collect(module, &overrides);
    engine::evaluate(module, &input)
}

fn metric(result: &ScenarioResult, label: &str) -> f64 {
    result
        .metric(label)
        .unwrap_or_else(|| panic!("missing metric {}", label))
        .value
}

// =============================================================================
// Reference values
// =============================================================================

#[test]
fn test_every_module_evaluates_on_defaults() {
    for module in LabModule::ALL {
        let result = run(module, ScenarioInput::new());
        assert!(result.is_ok(), "{} failed: {:?}", module, result);
        assert_eq!(result.unwrap().module, module);
    }
}

#[test]
fn test_why_futures_roles() {
    let result = run(LabModule::WhyFutures, ScenarioInput::new()).unwrap();
    let text = result.feedback.unwrap();
    assert!(text.contains("Hedgers transfer risk"));
    assert!(text.contains("Speculators take risk"));
    assert!(text.contains("Arbitrageurs align prices"));
}

#[test]
fn test_pricing_default() {
    let result = run(LabModule::Pricing, ScenarioInput::new()).unwrap();
    let price = result.metric("Futures price").unwrap();
    assert_relative_eq!(price.value, 500.0 * 1.06_f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(price.rounded(), 514.78);
}

#[test]
fn test_mark_to_market_default() {
    let result = run(LabModule::MarkToMarket, ScenarioInput::new()).unwrap();
    assert_relative_eq!(metric(&result, "Daily P&L"), 25_000.0);
}

#[test]
fn test_optimal_hedge_reference() {
    let result = run(LabModule::OptimalHedgeRatio, ScenarioInput::new()).unwrap();
    let contracts = result.metric("Optimal contracts").unwrap();
    assert_relative_eq!(contracts.rounded(), 4.55);
}

#[test]
fn test_optimal_hedge_zero_futures_price() {
    let overrides = ScenarioInput::new().with_number(ParamId::FuturesPrice, 0.0);
    let err = run(LabModule::OptimalHedgeRatio, overrides).unwrap_err();
    assert!(matches!(err, LabError::DivisionByZero { .. }));
}

#[test]
fn test_basis_reference() {
    let result = run(LabModule::BasisConvergence, ScenarioInput::new()).unwrap();
    assert_relative_eq!(metric(&result, "Basis"), -100.0);
    assert_eq!(
        result.feedback.as_deref(),
        Some("At expiry, basis converges to 0")
    );
}

#[test]
fn test_basis_risk_effectiveness() {
    let result = run(LabModule::BasisRisk, ScenarioInput::new()).unwrap();
    let effectiveness = result.metric("Hedge effectiveness").unwrap();
    assert_relative_eq!(effectiveness.rounded(), 80.0);
    assert_eq!(effectiveness.decimals, 1);
}

#[test]
fn test_rolling_and_matching_defaults() {
    let roll = run(LabModule::RollingFutures, ScenarioInput::new()).unwrap();
    assert_relative_eq!(metric(&roll, "Roll cost"), 150.0);

    let book = run(LabModule::MatchingSystem, ScenarioInput::new()).unwrap();
    assert_relative_eq!(metric(&book, "Trades executed"), 50.0);
}

#[test]
fn test_hedging_builder_curves() {
    let result = run(LabModule::HedgingBuilder, ScenarioInput::new()).unwrap();
    let portfolio = result.curve("Portfolio").unwrap();
    let hedged = result.curve("Hedged").unwrap();
    assert_eq!(portfolio.len(), 100);
    assert_eq!(hedged.len(), 100);
    assert_relative_eq!(portfolio.points[0].0, -10.0);
    assert_relative_eq!(portfolio.points[99].0, 10.0);
}

#[test]
fn test_strategy_builder_curve() {
    let result = run(LabModule::StrategyBuilder, ScenarioInput::new()).unwrap();
    let curve = result.curve("P&L").unwrap();
    assert_eq!(curve.points.first().unwrap().0, 18000.0);
    assert_eq!(curve.points.last().unwrap().0, 26000.0);
}

#[test]
fn test_case_selection_dispatch() {
    let overrides = ScenarioInput::new()
        .with_choice(ParamId::Case, "Airline Fuel Hedge")
        .with_choice(ParamId::Decision, "None");
    let result = run(LabModule::RealWorldCases, overrides).unwrap();
    assert_eq!(result.feedback.as_deref(), Some("Best: Partial hedge"));
}

#[test]
fn test_equity_case_default() {
    let result = run(LabModule::RealWorldCases, ScenarioInput::new()).unwrap();
    assert_eq!(result.feedback.as_deref(), Some("Optimal ≈ 4.5"));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_out_of_range_names_field() {
    let cases = [
        (LabModule::Pricing, ParamId::Spot, 50.0, "spot"),
        (LabModule::Pricing, ParamId::Rate, 0.2, "rate"),
        (LabModule::MarkToMarket, ParamId::Price, 30000.0, "price"),
        (LabModule::MarkToMarket, ParamId::Contracts, 0.0, "contracts"),
        (LabModule::StrategyBuilder, ParamId::Contracts, 25.0, "contracts"),
        (LabModule::HedgingBuilder, ParamId::Beta, 2.0, "beta"),
        (LabModule::BasisRisk, ParamId::Correlation, 1.5, "correlation"),
        (LabModule::MatchingSystem, ParamId::BuyOrders, 101.0, "buy_orders"),
        (LabModule::BasisConvergence, ParamId::Spot, -1.0, "spot"),
    ];
    for (module, id, value, field) in cases {
        let err = run(module, ScenarioInput::new().with_number(id, value)).unwrap_err();
        assert_eq!(err.field(), Some(field), "{} {}={}", module, id, value);
    }
}

#[test]
fn test_fractional_contracts_rejected() {
    let err = run(
        LabModule::TradingPnl,
        ScenarioInput::new().with_number(ParamId::Contracts, 2.5),
    )
    .unwrap_err();
    assert_eq!(err.field(), Some("contracts"));
}

#[test]
fn test_text_for_number_rejected() {
    let err = run(
        LabModule::RollingFutures,
        ScenarioInput::new().with_choice(ParamId::Near, "soon"),
    )
    .unwrap_err();
    assert_eq!(err.field(), Some("near"));
}

#[test]
fn test_unknown_strategy_rejected() {
    let err = run(
        LabModule::AdvancedStrategies,
        ScenarioInput::new().with_choice(ParamId::Strategy, "Iron Condor"),
    )
    .unwrap_err();
    assert_eq!(err.field(), Some("strategy"));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_pricing_increasing_in_spot(
        s1 in 100.0f64..1000.0,
        s2 in 100.0f64..1000.0,
        rate in 0.0f64..0.15,
        dividend_yield in 0.0f64..0.10,
        horizon in 0.1f64..1.0,
    ) {
        prop_assume!(s1 < s2);
        let price = |spot: f64| {
            let overrides = ScenarioInput::new()
                .with_number(ParamId::Spot, spot)
                .with_number(ParamId::Rate, rate)
                .with_number(ParamId::DividendYield, dividend_yield)
                .with_number(ParamId::Horizon, horizon);
            metric(&run(LabModule::Pricing, overrides).unwrap(), "Futures price")
        };
        let f1 = price(s1);
        prop_assert!(f1 <= price(s2));
        let expected = s1 * (1.0 + rate - dividend_yield).powf(horizon);
        prop_assert!((f1 - expected).abs() < 1e-9);
    }

    #[test]
    fn test_long_is_minus_short(
        entry in 0.0f64..50_000.0,
        price in 18000.0f64..26000.0,
        contracts in 1u32..=50,
    ) {
        let overrides = ScenarioInput::new()
            .with_number(ParamId::Entry, entry)
            .with_number(ParamId::Price, price)
            .with_number(ParamId::Contracts, f64::from(contracts));
        let result = run(LabModule::TradingPnl, overrides).unwrap();
        prop_assert_eq!(metric(&result, "Long P&L"), -metric(&result, "Short P&L"));
    }

    #[test]
    fn test_matching_is_min(buy in 0u32..=100, sell in 0u32..=100) {
        let overrides = ScenarioInput::new()
            .with_number(ParamId::BuyOrders, f64::from(buy))
            .with_number(ParamId::SellOrders, f64::from(sell));
        let result = run(LabModule::MatchingSystem, overrides).unwrap();
        prop_assert_eq!(metric(&result, "Trades executed"), f64::from(buy.min(sell)));
    }

    #[test]
    fn test_basis_is_spot_minus_futures(
        spot in 0.0f64..100_000.0,
        futures in 0.0f64..100_000.0,
    ) {
        let overrides = ScenarioInput::new()
            .with_number(ParamId::Spot, spot)
            .with_number(ParamId::FuturesPrice, futures);
        let result = run(LabModule::BasisConvergence, overrides).unwrap();
        prop_assert_eq!(metric(&result, "Basis"), spot - futures);
    }

    #[test]
    fn test_evaluation_is_deterministic(
        value in 0.0f64..1.0e8,
        beta in 0.5f64..1.5,
        contracts in 0u32..=100,
        futures_price in 1.0f64..50_000.0,
    ) {
        let overrides = ScenarioInput::new()
            .with_number(ParamId::PortfolioValue, value)
            .with_number(ParamId::Beta, beta)
            .with_number(ParamId::Contracts, f64::from(contracts))
            .with_number(ParamId::FuturesPrice, futures_price);
        for module in [LabModule::HedgingBuilder, LabModule::OptimalHedgeRatio] {
            let input = engine::collect(module, &overrides);
            let first = engine::evaluate(module, &input).unwrap();
            let second = engine::evaluate(module, &input).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_out_of_domain_correlation_rejected(correlation in 1.0001f64..100.0) {
        let overrides = ScenarioInput::new().with_number(ParamId::Correlation, correlation);
        let err = run(LabModule::BasisRisk, overrides).unwrap_err();
        prop_assert_eq!(err.field(), Some("correlation"));
    }
}
