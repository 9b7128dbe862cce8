//! Exchange order matching.
//!
//! Every resting order is for one contract at a crossing price, so each
//! buy pairs with one sell until one side of the book is exhausted.

/// Trades executed between `buy_orders` and `sell_orders`: `min(buy, sell)`.
///
/// # Examples
/// ```
/// use lab_models::analytics::trades_executed;
///
/// assert_eq!(trades_executed(60, 50), 50);
/// ```
#[inline]
pub fn trades_executed(buy_orders: u32, sell_orders: u32) -> u32 {
    buy_orders.min(sell_orders)
}

/// Orders left resting on the heavier side after matching.
#[inline]
pub fn unmatched_orders(buy_orders: u32, sell_orders: u32) -> u32 {
    buy_orders.abs_diff(sell_orders)
}
