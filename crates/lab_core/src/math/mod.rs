//! Numerical helpers.
//!
//! - [`grid`]: Evenly spaced evaluation grids for plotted curves

pub mod grid;

pub use grid::linspace;
