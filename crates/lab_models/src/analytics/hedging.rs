//! Beta hedging of an equity portfolio with index futures.
//!
//! A market move `m` (fraction, e.g. `-0.05` for a 5% fall) changes the
//! portfolio by `V * beta * m`. A short hedge of `n` contracts at futures
//! price `F` changes by `-n * lot * F * m`.

use num_traits::Float;

use super::error::FormulaError;

/// Portfolio P&L for a market move: `V * beta * move`.
#[inline]
pub fn portfolio_exposure<T: Float>(value: T, beta: T, market_move: T) -> T {
    value * beta * market_move
}

/// P&L of a short futures hedge for a market move: `-contracts * lot * F * move`.
#[inline]
pub fn futures_exposure<T: Float>(contracts: T, lot_size: T, futures_price: T, market_move: T) -> T {
    -(contracts * lot_size * futures_price * market_move)
}

/// Net P&L of the hedged portfolio for a market move.
///
/// # Examples
/// ```
/// use lab_models::analytics::hedged_exposure;
///
/// // 5M portfolio, beta 1, 20 contracts at 22000: 10% rally
/// let net = hedged_exposure(5_000_000.0_f64, 1.0, 20.0, 50.0, 22000.0, 0.10);
/// assert!((net + 1_700_000.0).abs() < 1e-6);
/// ```
#[inline]
pub fn hedged_exposure<T: Float>(
    value: T,
    beta: T,
    contracts: T,
    lot_size: T,
    futures_price: T,
    market_move: T,
) -> T {
    portfolio_exposure(value, beta, market_move)
        + futures_exposure(contracts, lot_size, futures_price, market_move)
}

/// Number of contracts that neutralises the portfolio's beta exposure:
/// `beta * V / (F * lot)`.
///
/// # Errors
/// `FormulaError::DivisionByZero` when `F * lot` is zero.
///
/// # Examples
/// ```
/// use lab_models::analytics::optimal_hedge_ratio;
///
/// let n = optimal_hedge_ratio(5_000_000.0_f64, 1.0, 22000.0, 50.0).unwrap();
/// assert!((n - 4.545454).abs() < 1e-5);
///
/// assert!(optimal_hedge_ratio(5_000_000.0_f64, 1.0, 0.0, 50.0).is_err());
/// ```
pub fn optimal_hedge_ratio<T: Float>(
    value: T,
    beta: T,
    futures_price: T,
    lot_size: T,
) -> Result<T, FormulaError> {
    let contract_value = futures_price * lot_size;
    if contract_value == T::zero() {
        return Err(FormulaError::DivisionByZero {
            operation: "optimal hedge ratio",
        });
    }
    Ok(beta * value / contract_value)
}

/// Hedge effectiveness in percent implied by a correlation: `rho * 100`.
#[inline]
pub fn hedge_effectiveness<T: Float>(correlation: T) -> T {
    correlation * hundred()
}

/// Portfolio value covered by a partial hedge: `V * pct / 100`.
#[inline]
pub fn partial_hedge_value<T: Float>(value: T, hedge_pct: T) -> T {
    value * hedge_pct / hundred()
}

#[inline]
fn hundred<T: Float>() -> T {
    T::from(100.0).unwrap_or_else(T::nan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_portfolio_exposure() {
        assert_relative_eq!(portfolio_exposure(5_000_000.0_f64, 1.2, -0.05), -300_000.0);
    }

    #[test]
    fn test_futures_exposure_offsets_rally() {
        assert_relative_eq!(
            futures_exposure(20.0_f64, 50.0, 22000.0, 0.10),
            -2_200_000.0
        );
    }

    #[test]
    fn test_no_hedge_leaves_portfolio_exposure() {
        let net = hedged_exposure(5_000_000.0_f64, 0.8, 0.0, 50.0, 22000.0, -0.1);
        assert_relative_eq!(net, portfolio_exposure(5_000_000.0, 0.8, -0.1));
    }

    #[test]
    fn test_optimal_hedge_neutralises_exposure() {
        let n = optimal_hedge_ratio(5_000_000.0_f64, 1.3, 22000.0, 50.0).unwrap();
        for m in [-0.1, -0.03, 0.0, 0.07, 0.1] {
            let net = hedged_exposure(5_000_000.0, 1.3, n, 50.0, 22000.0, m);
            assert_relative_eq!(net, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_optimal_hedge_reference_value() {
        let n = optimal_hedge_ratio(5_000_000.0_f64, 1.0, 22000.0, 50.0).unwrap();
        assert_relative_eq!(n, 5_000_000.0 / 1_100_000.0);
        assert_relative_eq!((n * 100.0).round() / 100.0, 4.55);
    }

    #[test]
    fn test_optimal_hedge_zero_futures_price() {
        assert_eq!(
            optimal_hedge_ratio(5_000_000.0_f64, 1.0, 0.0, 50.0),
            Err(FormulaError::DivisionByZero {
                operation: "optimal hedge ratio"
            })
        );
    }

    #[test]
    fn test_hedge_effectiveness() {
        assert_relative_eq!(hedge_effectiveness(0.8_f64), 80.0);
        assert_relative_eq!(hedge_effectiveness(0.0_f64), 0.0);
        assert_relative_eq!(hedge_effectiveness(1.0_f64), 100.0);
    }

    #[test]
    fn test_partial_hedge_value() {
        assert_relative_eq!(partial_hedge_value(5_000_000.0_f64, 50.0), 2_500_000.0);
        assert_relative_eq!(partial_hedge_value(5_000_000.0_f64, 0.0), 0.0);
    }
}
