//! Futures position with linear P&L.

use num_traits::Float;

use crate::analytics::FormulaError;

/// Units of the underlying index per futures contract.
pub const LOT_SIZE: f64 = 50.0;

/// Side of a futures position.
///
/// # Variants
/// - `Long`: Buyer (profits when the price rises)
/// - `Short`: Seller (profits when the price falls)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Long position
    Long,
    /// Short position
    Short,
}

impl Direction {
    /// Returns whether this is a long position.
    #[inline]
    pub fn is_long(&self) -> bool {
        matches!(self, Direction::Long)
    }

    /// Returns the opposite side.
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Long => Direction::Short,
            Direction::Short => Direction::Long,
        }
    }
}

/// An open futures position.
///
/// P&L is linear in the futures price:
/// - Long: `(price - entry) * contracts * lot_size`
/// - Short: `(entry - price) * contracts * lot_size`
///
/// # Examples
/// ```
/// use lab_models::instruments::{Direction, FuturesPosition, LOT_SIZE};
///
/// let long = FuturesPosition::new(22000.0_f64, 5.0, LOT_SIZE, Direction::Long).unwrap();
/// assert_eq!(long.pnl(22100.0), 25_000.0);
///
/// let short = long.flipped();
/// assert_eq!(short.pnl(22100.0), -25_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuturesPosition<T: Float> {
    entry: T,
    contracts: T,
    lot_size: T,
    direction: Direction,
}

impl<T: Float> FuturesPosition<T> {
    /// Creates a position.
    ///
    /// # Arguments
    /// * `entry` - Entry price (finite)
    /// * `contracts` - Number of contracts (non-negative)
    /// * `lot_size` - Units per contract (positive)
    /// * `direction` - Long or Short
    pub fn new(
        entry: T,
        contracts: T,
        lot_size: T,
        direction: Direction,
    ) -> Result<Self, FormulaError> {
        if !entry.is_finite() {
            return Err(FormulaError::InvalidPosition {
                message: "entry price must be finite".to_string(),
            });
        }
        if !(contracts >= T::zero()) {
            return Err(FormulaError::InvalidPosition {
                message: "contract count must be non-negative".to_string(),
            });
        }
        if !(lot_size > T::zero()) {
            return Err(FormulaError::InvalidPosition {
                message: "lot size must be positive".to_string(),
            });
        }

        Ok(Self {
            entry,
            contracts,
            lot_size,
            direction,
        })
    }

    /// P&L of the position marked at `price`.
    #[inline]
    pub fn pnl(&self, price: T) -> T {
        let long = (price - self.entry) * self.multiplier();
        match self.direction {
            Direction::Long => long,
            Direction::Short => -long,
        }
    }

    /// Units of the underlying controlled by the position.
    #[inline]
    pub fn multiplier(&self) -> T {
        self.contracts * self.lot_size
    }

    /// The same position on the other side.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            direction: self.direction.opposite(),
            ..*self
        }
    }

    /// Entry price.
    #[inline]
    pub fn entry(&self) -> T {
        self.entry
    }

    /// Contract count.
    #[inline]
    pub fn contracts(&self) -> T {
        self.contracts
    }

    /// Direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
