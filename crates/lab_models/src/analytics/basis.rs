//! Basis, rolling and calendar spreads.

use num_traits::Float;

/// Basis: `spot - futures`. Converges to zero at expiry.
///
/// # Examples
/// ```
/// use lab_models::analytics::basis;
///
/// assert_eq!(basis(22000.0_f64, 22100.0), -100.0);
/// ```
#[inline]
pub fn basis<T: Float>(spot: T, futures: T) -> T {
    spot - futures
}

/// Cost of rolling a position from the near contract into the far one: `far - near`.
#[inline]
pub fn roll_cost<T: Float>(near: T, far: T) -> T {
    far - near
}

/// Calendar spread between two expiries: `far - near`.
#[inline]
pub fn calendar_spread<T: Float>(near: T, far: T) -> T {
    far - near
}
