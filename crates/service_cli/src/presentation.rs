//! Rendering of scenario results for the terminal.

use lab_core::types::{Curve, LabModule, Metric, ParamSpec, ScenarioInput, ScenarioResult, Unit};
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Output format of `futures-lab run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text for reading
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// One row per metric, curve point and feedback line
    Csv,
}

/// Points of each curve shown in table output.
const TABLE_SAMPLES: usize = 5;

#[derive(Serialize)]
struct RunReport<'a> {
    module: LabModule,
    inputs: &'a ScenarioInput,
    result: &'a ScenarioResult,
}

/// Renders `result` in `format`. `specs` lists the inputs shown in table output.
pub fn render(
    result: &ScenarioResult,
    input: &ScenarioInput,
    specs: &[ParamSpec],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(result, input, specs)),
        OutputFormat::Json => {
            let report = RunReport {
                module: result.module,
                inputs: input,
                result,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Csv => render_csv(result),
    }
}

fn render_table(result: &ScenarioResult, input: &ScenarioInput, specs: &[ParamSpec]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", result.module));

    if !specs.is_empty() {
        out.push_str("\nInputs\n");
        for spec in specs {
            let value = input
                .get(spec.id)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "  {:<16} {:>14}   {}\n",
                spec.id.label(),
                value,
                spec.describe()
            ));
        }
    }

    if !result.metrics.is_empty() {
        out.push_str("\nMetrics\n");
        for metric in &result.metrics {
            out.push_str(&format!(
                "  {:<20} {:>16}\n",
                metric.label,
                format_metric(metric)
            ));
        }
    }

    for curve in &result.curves {
        out.push_str(&format!("\n{}\n", describe_curve(curve)));
        out.push_str(&format!("  {:>16} {:>16}\n", curve.x_label, curve.y_label));
        for &(x, y) in sample_points(curve, TABLE_SAMPLES).iter() {
            out.push_str(&format!(
                "  {:>16} {:>16}\n",
                group_thousands(x, 2),
                group_thousands(y, 0)
            ));
        }
    }

    if let Some(feedback) = &result.feedback {
        out.push_str("\nFeedback\n");
        for line in feedback.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out
}

fn render_csv(result: &ScenarioResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["kind", "label", "x", "value", "unit"])?;

    for metric in &result.metrics {
        writer.write_record([
            "metric",
            metric.label.as_str(),
            "",
            metric.rounded().to_string().as_str(),
            unit_name(metric.unit),
        ])?;
    }
    for curve in &result.curves {
        for &(x, y) in &curve.points {
            writer.write_record([
                "curve",
                curve.label.as_str(),
                x.to_string().as_str(),
                y.to_string().as_str(),
                "",
            ])?;
        }
    }
    if let Some(feedback) = &result.feedback {
        for line in feedback.lines() {
            writer.write_record(["feedback", "", "", line, ""])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Output(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Output(e.to_string()))
}

fn unit_name(unit: Unit) -> &'static str {
    match unit {
        Unit::Price => "price",
        Unit::Rupees => "rupees",
        Unit::Percent => "percent",
        Unit::Contracts => "contracts",
        Unit::Trades => "trades",
    }
}

/// Metric value at display precision, with its unit.
pub fn format_metric(metric: &Metric) -> String {
    let value = group_thousands(metric.value, metric.decimals);
    match metric.unit {
        Unit::Rupees => match value.strip_prefix('-') {
            Some(magnitude) => format!("-₹{}", magnitude),
            None => format!("₹{}", value),
        },
        Unit::Percent => format!("{}%", value),
        Unit::Price | Unit::Contracts | Unit::Trades => value,
    }
}

/// Formats `value` to `decimals` places with comma thousands separators.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) if rest.chars().any(|c| c.is_ascii_digit() && c != '0') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

fn describe_curve(curve: &Curve) -> String {
    match (curve.points.first(), curve.points.last()) {
        (Some(first), Some(last)) => format!(
            "Curve '{}': {} points, {} from {} to {}",
            curve.label,
            curve.len(),
            curve.x_label,
            group_thousands(first.0, 2),
            group_thousands(last.0, 2)
        ),
        _ => format!("Curve '{}': empty", curve.label),
    }
}

/// Evenly spaced points including both ends.
fn sample_points(curve: &Curve, count: usize) -> Vec<(f64, f64)> {
    let n = curve.len();
    if n <= count || count < 2 {
        return curve.points.clone();
    }
    (0..count)
        .map(|i| curve.points[i * (n - 1) / (count - 1)])
        .collect()
}
