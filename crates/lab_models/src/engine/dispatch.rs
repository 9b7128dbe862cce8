//! Module dispatch table and input collection.

use lab_core::types::{LabError, LabModule, ParamSpec, ScenarioInput, ScenarioResult};
use tracing::{debug, warn};

use super::handlers;
use super::params::*;

/// Signature shared by all module handlers.
pub type Handler = fn(&ScenarioInput) -> Result<ScenarioResult, LabError>;

/// A row of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct ModuleEntry {
    /// Module identifier
    pub module: LabModule,
    /// Parameters read directly by the handler
    pub params: &'static [ParamSpec],
    /// Evaluation function
    pub handler: Handler,
}

/// Dispatch table in menu order.
pub static MODULE_TABLE: [ModuleEntry; 13] = [
    ModuleEntry {
        module: LabModule::WhyFutures,
        params: &[],
        handler: handlers::why_futures,
    },
    ModuleEntry {
        module: LabModule::Pricing,
        params: &[PRICING_SPOT, RATE, DIVIDEND_YIELD, HORIZON],
        handler: handlers::pricing,
    },
    ModuleEntry {
        module: LabModule::MarkToMarket,
        params: &[ENTRY, MTM_PRICE, POSITION_CONTRACTS],
        handler: handlers::mark_to_market,
    },
    ModuleEntry {
        module: LabModule::TradingPnl,
        params: &[ENTRY, TRADE_PRICE, POSITION_CONTRACTS],
        handler: handlers::trading_pnl,
    },
    ModuleEntry {
        module: LabModule::StrategyBuilder,
        params: &[ENTRY, STRATEGY_CONTRACTS],
        handler: handlers::strategy_builder,
    },
    ModuleEntry {
        module: LabModule::HedgingBuilder,
        params: &[PORTFOLIO_VALUE, BETA, HEDGE_CONTRACTS, HEDGE_FUTURES_PRICE],
        handler: handlers::hedging_builder,
    },
    ModuleEntry {
        module: LabModule::OptimalHedgeRatio,
        params: &[PORTFOLIO_VALUE, BETA, HEDGE_FUTURES_PRICE],
        handler: handlers::optimal_hedge,
    },
    ModuleEntry {
        module: LabModule::BasisConvergence,
        params: &[BASIS_SPOT, BASIS_FUTURES],
        handler: handlers::basis_convergence,
    },
    ModuleEntry {
        module: LabModule::BasisRisk,
        params: &[CORRELATION],
        handler: handlers::basis_risk,
    },
    ModuleEntry {
        module: LabModule::RollingFutures,
        params: &[NEAR, ROLL_FAR],
        handler: handlers::rolling,
    },
    ModuleEntry {
        module: LabModule::MatchingSystem,
        params: &[BUY_ORDERS, SELL_ORDERS],
        handler: handlers::matching,
    },
    ModuleEntry {
        module: LabModule::RealWorldCases,
        params: &[CASE],
        handler: handlers::real_world_cases,
    },
    ModuleEntry {
        module: LabModule::AdvancedStrategies,
        params: &[STRATEGY],
        handler: handlers::advanced_strategies,
    },
];

/// Looks up the table row for `module`.
pub fn entry(module: LabModule) -> &'static ModuleEntry {
    // Rows are stored in menu order
    &MODULE_TABLE[usize::from(module.number() - 1)]
}

/// Parameters `module` reads for the given selection snapshot, including
/// the sub-inputs of the selected case or strategy.
pub fn params_for(module: LabModule, input: &ScenarioInput) -> Vec<ParamSpec> {
    let mut specs = entry(module).params.to_vec();
    match module {
        LabModule::RealWorldCases => {
            if let Ok(case) = handlers::selected_case(input) {
                specs.extend_from_slice(case.params());
            }
        }
        LabModule::AdvancedStrategies => {
            if let Ok(strategy) = handlers::selected_strategy(input) {
                specs.extend_from_slice(strategy.params());
            }
        }
        _ => {}
    }
    specs
}

/// Builds the snapshot a collector would hand over: `overrides` layered on
/// top of the module defaults (and the defaults of the selected case or
/// strategy).
///
/// Values are copied as given; validation happens in [`evaluate`].
pub fn collect(module: LabModule, overrides: &ScenarioInput) -> ScenarioInput {
    let base = ScenarioInput::from_defaults(entry(module).params);
    let selection = overlay(base, overrides);
    let defaults = ScenarioInput::from_defaults(&params_for(module, &selection));
    overlay(defaults, overrides)
}

fn overlay(base: ScenarioInput, overrides: &ScenarioInput) -> ScenarioInput {
    overrides
        .iter()
        .fold(base, |acc, (id, value)| acc.with(id, value.clone()))
}

/// Evaluates `module` on an immutable snapshot.
///
/// # Errors
/// - `LabError::Validation` naming the first offending field
/// - `LabError::DivisionByZero` from the optimal hedge ratio
pub fn evaluate(module: LabModule, input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
    debug!(module = module.slug(), params = input.len(), "Evaluating module");
    let result = (entry(module).handler)(input);
    match &result {
        Ok(r) => debug!(
            module = module.slug(),
            metrics = r.metrics.len(),
            curves = r.curves.len(),
            "Module evaluated"
        ),
        Err(e) => warn!(module = module.slug(), error = %e, "Module evaluation failed"),
    }
    result
}
