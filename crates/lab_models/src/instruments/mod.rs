//! Futures instrument definitions.
//!
//! - [`FuturesPosition`]: Entry price, contract count and direction with linear P&L
//! - [`Direction`]: Long or short
//! - [`LOT_SIZE`]: Units of the underlying per index futures contract

mod position;

pub use position::{Direction, FuturesPosition, LOT_SIZE};
