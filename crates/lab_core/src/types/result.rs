//! Scenario result records handed to the presentation layer.

use super::module::LabModule;

/// Display unit of a scalar metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Unit {
    /// Index or futures price points
    Price,
    /// Cash amount in rupees
    Rupees,
    /// Percentage
    Percent,
    /// Number of futures contracts (may be fractional)
    Contracts,
    /// Number of executed trades
    Trades,
}

/// A labelled scalar output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metric {
    /// Label, e.g. "Futures price"
    pub label: String,
    /// Unrounded value
    pub value: f64,
    /// Display unit
    pub unit: Unit,
    /// Decimal places shown by the presentation layer
    pub decimals: usize,
}

impl Metric {
    /// Creates a metric shown with `decimals` decimal places.
    pub fn new(label: impl Into<String>, value: f64, unit: Unit, decimals: usize) -> Self {
        Self {
            label: label.into(),
            value,
            unit,
            decimals,
        }
    }

    /// Value rounded half away from zero to the display precision.
    ///
    /// # Examples
    /// ```
    /// use lab_core::types::{Metric, Unit};
    ///
    /// let m = Metric::new("Optimal contracts", 4.545454, Unit::Contracts, 2);
    /// assert_eq!(m.rounded(), 4.55);
    /// ```
    pub fn rounded(&self) -> f64 {
        let scale = 10f64.powi(self.decimals as i32);
        (self.value * scale).round() / scale
    }
}

/// An ordered `(x, y)` series for a 2-D line plot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    /// Legend label
    pub label: String,
    /// Independent-variable axis label
    pub x_label: String,
    /// Dependent-variable axis label
    pub y_label: String,
    /// Points in increasing `x`
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    /// Builds a curve by evaluating `f` at each grid point.
    pub fn sample<F>(
        label: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        xs: &[f64],
        f: F,
    ) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            label: label.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            points: xs.iter().map(|&x| (x, f(x))).collect(),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the `y` value at the point whose `x` is closest to `x`.
    pub fn nearest(&self, x: f64) -> Option<f64> {
        self.points
            .iter()
            .min_by(|a, b| {
                (a.0 - x)
                    .abs()
                    .partial_cmp(&(b.0 - x).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|p| p.1)
    }
}

/// Output of one module evaluation.
///
/// Computed fresh per interaction and discarded after display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioResult {
    /// Module that produced the result
    pub module: LabModule,
    /// Scalar outputs in display order
    pub metrics: Vec<Metric>,
    /// Plotted series
    pub curves: Vec<Curve>,
    /// Explanatory or corrective text
    pub feedback: Option<String>,
}

impl ScenarioResult {
    /// Creates an empty result for `module`.
    pub fn new(module: LabModule) -> Self {
        Self {
            module,
            metrics: Vec::new(),
            curves: Vec::new(),
            feedback: None,
        }
    }

    /// Appends a metric.
    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Appends a curve.
    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curves.push(curve);
        self
    }

    /// Sets the feedback text.
    #[must_use]
    pub fn with_feedback(mut self, text: impl Into<String>) -> Self {
        self.feedback = Some(text.into());
        self
    }

    /// Looks up a metric by label.
    pub fn metric(&self, label: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.label == label)
    }

    /// Looks up a curve by label.
    pub fn curve(&self, label: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.label == label)
    }
}
