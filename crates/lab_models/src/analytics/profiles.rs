//! P&L and exposure curves on fixed evaluation grids.

use lab_core::math::linspace;
use lab_core::types::Curve;

use super::hedging::{hedged_exposure, portfolio_exposure};
use crate::instruments::{FuturesPosition, LOT_SIZE};

/// Points per plotted curve.
pub const CURVE_POINTS: usize = 100;

/// Price axis of the directional P&L profile.
pub const PRICE_RANGE: (f64, f64) = (18000.0, 26000.0);

/// Market-move axis of the hedging profile, as fractions.
pub const MOVE_RANGE: (f64, f64) = (-0.10, 0.10);

/// P&L of `position` over [`PRICE_RANGE`].
pub fn directional_profile(position: &FuturesPosition<f64>) -> Curve {
    let prices = linspace(PRICE_RANGE.0, PRICE_RANGE.1, CURVE_POINTS);
    Curve::sample("P&L", "Price", "P&L (₹)", &prices, |p| position.pnl(p))
}

/// Unhedged and hedged portfolio P&L over [`MOVE_RANGE`], with `x` in percent.
///
/// Returns `[portfolio, hedged]`.
pub fn hedge_profile(value: f64, beta: f64, contracts: f64, futures_price: f64) -> [Curve; 2] {
    let moves = linspace(MOVE_RANGE.0, MOVE_RANGE.1, CURVE_POINTS);
    let x_label = "Market move (%)";
    let y_label = "P&L (₹)";

    let portfolio = Curve {
        label: "Portfolio".to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        points: moves
            .iter()
            .map(|&m| (m * 100.0, portfolio_exposure(value, beta, m)))
            .collect(),
    };
    let hedged = Curve {
        label: "Hedged".to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        points: moves
            .iter()
            .map(|&m| {
                (
                    m * 100.0,
                    hedged_exposure(value, beta, contracts, LOT_SIZE, futures_price, m),
                )
            })
            .collect(),
    };

    [portfolio, hedged]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::Direction;
    use approx::assert_relative_eq;

    #[test]
    fn test_directional_profile_shape() {
        let pos = FuturesPosition::new(22000.0, 5.0, LOT_SIZE, Direction::Long).unwrap();
        let curve = directional_profile(&pos);

        assert_eq!(curve.len(), CURVE_POINTS);
        assert_eq!(curve.points[0], (18000.0, -1_000_000.0));
        assert_eq!(curve.points[CURVE_POINTS - 1], (26000.0, 1_000_000.0));
    }

    #[test]
    fn test_directional_profile_is_linear() {
        let pos = FuturesPosition::new(21000.0, 3.0, LOT_SIZE, Direction::Long).unwrap();
        let curve = directional_profile(&pos);
        let slope = |a: (f64, f64), b: (f64, f64)| (b.1 - a.1) / (b.0 - a.0);
        for w in curve.points.windows(2) {
            assert_relative_eq!(slope(w[0], w[1]), 150.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_hedge_profile_endpoints() {
        let [portfolio, hedged] = hedge_profile(5_000_000.0, 1.0, 20.0, 22000.0);

        assert_eq!(portfolio.len(), CURVE_POINTS);
        assert_eq!(hedged.len(), CURVE_POINTS);
        assert_relative_eq!(portfolio.points[0].0, -10.0);
        assert_relative_eq!(portfolio.points[0].1, -500_000.0, epsilon = 1e-6);
        assert_relative_eq!(hedged.points[CURVE_POINTS - 1].1, -1_700_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_unhedged_profiles_coincide() {
        let [portfolio, hedged] = hedge_profile(5_000_000.0, 1.2, 0.0, 22000.0);
        assert_eq!(portfolio.points, hedged.points);
    }
}
