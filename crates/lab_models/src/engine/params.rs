//! Parameter declarations of the analytical modules.
//!
//! Domains and defaults mirror the lab's input widgets. Parameters shared
//! by several modules are declared once; module-specific variants (the
//! pricing spot slider, the strategy builder's smaller contract range) get
//! their own constant.

use lab_core::types::{Domain, ParamId, ParamSpec};

use crate::catalogue::{CaseStudy, Strategy};

// Module 2: cost-of-carry pricing
/// Pricing spot slider.
pub const PRICING_SPOT: ParamSpec =
    ParamSpec::real(ParamId::Spot, Domain::closed(100.0, 1000.0), 500.0);
/// Annual interest rate as a fraction.
pub const RATE: ParamSpec = ParamSpec::real(ParamId::Rate, Domain::closed(0.0, 0.15), 0.08);
/// Annual dividend yield as a fraction.
pub const DIVIDEND_YIELD: ParamSpec =
    ParamSpec::real(ParamId::DividendYield, Domain::closed(0.0, 0.10), 0.02);
/// Time to expiry in years.
pub const HORIZON: ParamSpec = ParamSpec::real(ParamId::Horizon, Domain::closed(0.1, 1.0), 0.5);

// Modules 3 to 5: positions
/// Entry price of a futures position.
pub const ENTRY: ParamSpec = ParamSpec::real(ParamId::Entry, Domain::NON_NEGATIVE, 22000.0);
/// Current price for mark-to-market.
pub const MTM_PRICE: ParamSpec =
    ParamSpec::real(ParamId::Price, Domain::closed(18000.0, 26000.0), 22100.0);
/// Current price for the long/short comparison.
pub const TRADE_PRICE: ParamSpec =
    ParamSpec::real(ParamId::Price, Domain::closed(18000.0, 26000.0), 22000.0);
/// Contracts held in a mark-to-market or P&L position.
pub const POSITION_CONTRACTS: ParamSpec =
    ParamSpec::count(ParamId::Contracts, Domain::closed(1.0, 50.0), 5.0);
/// Contracts in a directional strategy.
pub const STRATEGY_CONTRACTS: ParamSpec =
    ParamSpec::count(ParamId::Contracts, Domain::closed(1.0, 20.0), 5.0);

// Modules 6 and 7: hedging
/// Value of the equity portfolio.
pub const PORTFOLIO_VALUE: ParamSpec =
    ParamSpec::real(ParamId::PortfolioValue, Domain::NON_NEGATIVE, 5_000_000.0);
/// Portfolio beta.
pub const BETA: ParamSpec = ParamSpec::real(ParamId::Beta, Domain::closed(0.5, 1.5), 1.0);
/// Short futures contracts in the hedge.
pub const HEDGE_CONTRACTS: ParamSpec =
    ParamSpec::count(ParamId::Contracts, Domain::closed(0.0, 100.0), 20.0);
/// Index futures price used for hedging.
pub const HEDGE_FUTURES_PRICE: ParamSpec =
    ParamSpec::real(ParamId::FuturesPrice, Domain::NON_NEGATIVE, 22000.0);

// Modules 8 and 9: basis
/// Spot index level for basis.
pub const BASIS_SPOT: ParamSpec = ParamSpec::real(ParamId::Spot, Domain::NON_NEGATIVE, 22000.0);
/// Futures price for basis.
pub const BASIS_FUTURES: ParamSpec =
    ParamSpec::real(ParamId::FuturesPrice, Domain::NON_NEGATIVE, 22100.0);
/// Correlation between exposure and hedge.
pub const CORRELATION: ParamSpec = ParamSpec::real(ParamId::Correlation, Domain::UNIT, 0.8);

// Module 10: rolling
/// Near-month contract price.
pub const NEAR: ParamSpec = ParamSpec::real(ParamId::Near, Domain::NON_NEGATIVE, 22000.0);
/// Next-month contract price.
pub const ROLL_FAR: ParamSpec = ParamSpec::real(ParamId::Far, Domain::NON_NEGATIVE, 22150.0);

// Module 11: matching
/// Resting buy orders.
pub const BUY_ORDERS: ParamSpec =
    ParamSpec::count(ParamId::BuyOrders, Domain::closed(0.0, 100.0), 60.0);
/// Resting sell orders.
pub const SELL_ORDERS: ParamSpec =
    ParamSpec::count(ParamId::SellOrders, Domain::closed(0.0, 100.0), 50.0);

// Modules 12 and 13: selections
/// Real-world case selection.
pub const CASE: ParamSpec = ParamSpec::choice(ParamId::Case, CaseStudy::NAMES, CaseStudy::NAMES[0]);
/// Advanced strategy selection.
pub const STRATEGY: ParamSpec =
    ParamSpec::choice(ParamId::Strategy, Strategy::NAMES, Strategy::NAMES[0]);
