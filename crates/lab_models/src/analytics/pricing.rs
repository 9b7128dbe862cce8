//! Cost-of-carry pricing.

use num_traits::Float;

/// Futures price from the cost of carry, compounded annually.
///
/// `F = S * (1 + r - c)^T`
///
/// # Arguments
/// * `spot` - Spot price `S`
/// * `rate` - Annual interest rate `r` as a fraction
/// * `dividend_yield` - Annual dividend yield `c` as a fraction
/// * `horizon` - Time to expiry `T` in years
///
/// # Examples
/// ```
/// use lab_models::analytics::cost_of_carry_price;
///
/// let f = cost_of_carry_price(500.0_f64, 0.08, 0.02, 0.5);
/// assert!((f - 514.78).abs() < 0.01);
/// ```
#[inline]
pub fn cost_of_carry_price<T: Float>(spot: T, rate: T, dividend_yield: T, horizon: T) -> T {
    spot * (T::one() + rate - dividend_yield).powf(horizon)
}

/// One-period fair value with no income: `spot * (1 + r)`.
///
/// # Examples
/// ```
/// use lab_models::analytics::simple_fair_value;
///
/// assert_eq!(simple_fair_value(1000.0_f64, 0.08), 1080.0);
/// ```
#[inline]
pub fn simple_fair_value<T: Float>(spot: T, rate: T) -> T {
    spot * (T::one() + rate)
}

/// Arbitrage implied by comparing a quoted futures price with fair value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArbitrageSignal {
    /// Futures rich: buy spot, sell futures
    CashAndCarry,
    /// Futures cheap: sell spot, buy futures
    Reverse,
    /// Within tolerance of fair value
    FairlyPriced,
}

impl ArbitrageSignal {
    /// Classifies `futures - fair_value`; differences within `tolerance`
    /// are treated as fairly priced.
    pub fn classify<T: Float>(futures: T, fair_value: T, tolerance: T) -> Self {
        let mispricing = futures - fair_value;
        if mispricing > tolerance {
            ArbitrageSignal::CashAndCarry
        } else if mispricing < -tolerance {
            ArbitrageSignal::Reverse
        } else {
            ArbitrageSignal::FairlyPriced
        }
    }

    /// Explanation shown to the student.
    pub fn explanation(&self) -> &'static str {
        match self {
            ArbitrageSignal::CashAndCarry => {
                "Futures above fair value → cash-and-carry: buy spot, sell futures"
            }
            ArbitrageSignal::Reverse => {
                "Futures below fair value → reverse arbitrage: sell spot, buy futures"
            }
            ArbitrageSignal::FairlyPriced => "Futures at fair value → no arbitrage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cost_of_carry_default_widgets() {
        // 500 * 1.06^0.5
        assert_relative_eq!(
            cost_of_carry_price(500.0_f64, 0.08, 0.02, 0.5),
            500.0 * 1.06_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_cost_of_carry_no_carry() {
        assert_relative_eq!(cost_of_carry_price(750.0_f64, 0.05, 0.05, 1.0), 750.0);
    }

    #[test]
    fn test_cost_of_carry_one_year() {
        // quiz item: spot 100, r 10%, one year
        assert_relative_eq!(cost_of_carry_price(100.0_f64, 0.10, 0.0, 1.0), 110.0);
    }

    #[test]
    fn test_backwardation_when_yield_exceeds_rate() {
        assert!(cost_of_carry_price(500.0_f64, 0.0, 0.10, 1.0) < 500.0);
    }

    #[test]
    fn test_simple_fair_value() {
        assert_relative_eq!(simple_fair_value(1000.0_f64, 0.08), 1080.0);
        assert_relative_eq!(simple_fair_value(1000.0_f64, 0.0), 1000.0);
    }

    #[test]
    fn test_arbitrage_signal() {
        assert_eq!(
            ArbitrageSignal::classify(1100.0_f64, 1080.0, 0.005),
            ArbitrageSignal::CashAndCarry
        );
        assert_eq!(
            ArbitrageSignal::classify(1050.0_f64, 1080.0, 0.005),
            ArbitrageSignal::Reverse
        );
        assert_eq!(
            ArbitrageSignal::classify(1080.001_f64, 1080.0, 0.005),
            ArbitrageSignal::FairlyPriced
        );
    }

    #[test]
    fn test_arbitrage_explanations_name_the_trade() {
        assert!(ArbitrageSignal::CashAndCarry
            .explanation()
            .contains("buy spot"));
        assert!(ArbitrageSignal::Reverse.explanation().contains("sell spot"));
    }
}
