//! Real-world hedging cases.
//!
//! Each case shows a prompt, collects one response and answers with fixed
//! feedback. Responses are validated but never graded.

use std::fmt;
use std::str::FromStr;

use lab_core::types::{
    Domain, LabError, LabModule, Metric, ParamId, ParamSpec, ScenarioInput, ScenarioResult, Unit,
};

use crate::analytics::optimal_hedge_ratio;
use crate::instruments::LOT_SIZE;

/// Contract count typed in for the equity case.
pub const EQUITY_ANSWER: ParamSpec = ParamSpec::real(ParamId::Answer, Domain::NON_NEGATIVE, 0.0);

/// Hedge decision for the airline case.
pub const AIRLINE_DECISION: ParamSpec =
    ParamSpec::choice(ParamId::Decision, &["Full", "Partial", "None"], "Full");

/// Futures side for the exporter case.
pub const EXPORTER_DECISION: ParamSpec =
    ParamSpec::choice(ParamId::Decision, &["Long USD", "Short USD"], "Long USD");

const EQUITY_PORTFOLIO: f64 = 5_000_000.0;
const EQUITY_FUTURES: f64 = 22000.0;

/// A practice case.
///
/// # Examples
/// ```
/// use lab_models::catalogue::CaseStudy;
///
/// let case: CaseStudy = "exporter hedge".parse().unwrap();
/// assert_eq!(case, CaseStudy::ExporterHedge);
/// assert_eq!(case.prompt(), "Exporter receives USD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseStudy {
    /// Size a beta hedge for an equity portfolio
    EquityPortfolioHedge,
    /// Choose how much jet-fuel exposure to hedge
    AirlineFuelHedge,
    /// Choose the futures side for USD receivables
    ExporterHedge,
}

impl CaseStudy {
    /// All cases in menu order.
    pub const ALL: [CaseStudy; 3] = [
        CaseStudy::EquityPortfolioHedge,
        CaseStudy::AirlineFuelHedge,
        CaseStudy::ExporterHedge,
    ];

    /// Menu names, as accepted by the `case` parameter.
    pub const NAMES: &'static [&'static str] =
        &["Equity Portfolio Hedge", "Airline Fuel Hedge", "Exporter Hedge"];

    /// Menu name.
    pub fn name(&self) -> &'static str {
        match self {
            CaseStudy::EquityPortfolioHedge => Self::NAMES[0],
            CaseStudy::AirlineFuelHedge => Self::NAMES[1],
            CaseStudy::ExporterHedge => Self::NAMES[2],
        }
    }

    /// Prompt shown to the student.
    pub fn prompt(&self) -> &'static str {
        match self {
            CaseStudy::EquityPortfolioHedge => "₹5Cr portfolio, futures 22000, size 50",
            CaseStudy::AirlineFuelHedge => "Fuel exposure, corr=0.8",
            CaseStudy::ExporterHedge => "Exporter receives USD",
        }
    }

    /// Response parameter collected for this case.
    pub fn params(&self) -> &'static [ParamSpec] {
        match self {
            CaseStudy::EquityPortfolioHedge => &[EQUITY_ANSWER],
            CaseStudy::AirlineFuelHedge => &[AIRLINE_DECISION],
            CaseStudy::ExporterHedge => &[EXPORTER_DECISION],
        }
    }

    /// Validates the response and returns the case feedback.
    pub fn evaluate(&self, input: &ScenarioInput) -> Result<ScenarioResult, LabError> {
        let result = ScenarioResult::new(LabModule::RealWorldCases);
        match self {
            CaseStudy::EquityPortfolioHedge => {
                EQUITY_ANSWER.read_real(input)?;
                let expected = optimal_hedge_ratio(EQUITY_PORTFOLIO, 1.0, EQUITY_FUTURES, LOT_SIZE)?;
                Ok(result
                    .with_metric(Metric::new("Optimal contracts", expected, Unit::Contracts, 1))
                    .with_feedback(format!("Optimal ≈ {:.1}", expected)))
            }
            CaseStudy::AirlineFuelHedge => {
                AIRLINE_DECISION.read_choice(input)?;
                Ok(result.with_feedback("Best: Partial hedge"))
            }
            CaseStudy::ExporterHedge => {
                EXPORTER_DECISION.read_choice(input)?;
                Ok(result.with_feedback("Correct: Short USD futures"))
            }
        }
    }
}

impl fmt::Display for CaseStudy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStudy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|case| case.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown case '{}'", s))
    }
}
