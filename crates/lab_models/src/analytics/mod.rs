//! Closed-form futures analytics.
//!
//! This module provides:
//! - [`pricing`]: Cost-of-carry futures price and simple fair value
//! - [`hedging`]: Beta hedge exposures, optimal contract count, effectiveness
//! - [`basis`]: Basis, roll cost and calendar spread
//! - [`matching`]: Trades executed between resting buy and sell orders
//! - [`profiles`]: P&L and exposure curves on fixed evaluation grids
//! - [`error`]: Formula errors
//!
//! All formulas are generic over `T: Float`.

pub mod basis;
pub mod error;
pub mod hedging;
pub mod matching;
pub mod pricing;
pub mod profiles;

pub use basis::{basis, calendar_spread, roll_cost};
pub use error::FormulaError;
pub use hedging::{
    futures_exposure, hedge_effectiveness, hedged_exposure, optimal_hedge_ratio,
    partial_hedge_value, portfolio_exposure,
};
pub use matching::{trades_executed, unmatched_orders};
pub use pricing::{cost_of_carry_price, simple_fair_value, ArbitrageSignal};
