//! Evenly spaced evaluation grids.

use num_traits::Float;

/// Returns `n` evenly spaced values over the closed interval `[start, end]`.
///
/// Both endpoints are included; the last point is set to `end` exactly so
/// that accumulated rounding never shifts the right edge of a plot.
/// `n == 0` yields an empty grid and `n == 1` yields `[start]`.
///
/// # Examples
/// ```
/// use lab_core::math::linspace;
///
/// let xs = linspace(18000.0_f64, 26000.0, 100);
/// assert_eq!(xs.len(), 100);
/// assert_eq!(xs[0], 18000.0);
/// assert_eq!(xs[99], 26000.0);
/// ```
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let intervals = match T::from(n - 1) {
                Some(v) => v,
                None => return vec![start, end],
            };
            let step = (end - start) / intervals;
            let mut grid: Vec<T> = (0..n)
                .map(|i| start + step * T::from(i).unwrap_or_else(T::zero))
                .collect();
            grid[n - 1] = end;
            grid
        }
    }
}
