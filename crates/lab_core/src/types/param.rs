//! Scenario parameter declarations.
//!
//! Every analytical module declares the parameters it consumes as
//! `ParamSpec` constants: an identifier, a kind with its closed-interval
//! domain (or option menu), and the default the input collector starts from.
//! Handlers read their inputs exclusively through these declarations, so a
//! value outside its domain is rejected with the field named and never
//! clamped.

use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;
use super::input::ScenarioInput;

/// Identifier of a named scenario parameter.
///
/// The snake-case name returned by [`ParamId::name`] is the key used by
/// collectors (`spot=500`) and by serialised snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParamId {
    /// Spot price of the underlying
    Spot,
    /// Annual interest rate as a fraction
    Rate,
    /// Annual dividend yield as a fraction
    DividendYield,
    /// Time to expiry in years
    Horizon,
    /// Entry price of a futures position
    Entry,
    /// Current futures price
    Price,
    /// Number of futures contracts
    Contracts,
    /// Value of the underlying portfolio
    PortfolioValue,
    /// Portfolio beta against the index
    Beta,
    /// Futures price used for hedging and basis
    FuturesPrice,
    /// Correlation between exposure and hedge instrument
    Correlation,
    /// Near-month contract price
    Near,
    /// Far (next) month contract price
    Far,
    /// Number of resting buy orders
    BuyOrders,
    /// Number of resting sell orders
    SellOrders,
    /// Share of the portfolio hedged, in percent
    HedgePct,
    /// Selected real-world case
    Case,
    /// Selected advanced strategy
    Strategy,
    /// Numeric response to a case prompt
    Answer,
    /// Categorical response to a case prompt
    Decision,
}

impl ParamId {
    /// All parameter identifiers.
    pub const ALL: [ParamId; 20] = [
        ParamId::Spot,
        ParamId::Rate,
        ParamId::DividendYield,
        ParamId::Horizon,
        ParamId::Entry,
        ParamId::Price,
        ParamId::Contracts,
        ParamId::PortfolioValue,
        ParamId::Beta,
        ParamId::FuturesPrice,
        ParamId::Correlation,
        ParamId::Near,
        ParamId::Far,
        ParamId::BuyOrders,
        ParamId::SellOrders,
        ParamId::HedgePct,
        ParamId::Case,
        ParamId::Strategy,
        ParamId::Answer,
        ParamId::Decision,
    ];

    /// Returns the snake-case key of this parameter.
    pub fn name(&self) -> &'static str {
        match self {
            ParamId::Spot => "spot",
            ParamId::Rate => "rate",
            ParamId::DividendYield => "dividend_yield",
            ParamId::Horizon => "horizon",
            ParamId::Entry => "entry",
            ParamId::Price => "price",
            ParamId::Contracts => "contracts",
            ParamId::PortfolioValue => "portfolio_value",
            ParamId::Beta => "beta",
            ParamId::FuturesPrice => "futures_price",
            ParamId::Correlation => "correlation",
            ParamId::Near => "near",
            ParamId::Far => "far",
            ParamId::BuyOrders => "buy_orders",
            ParamId::SellOrders => "sell_orders",
            ParamId::HedgePct => "hedge_pct",
            ParamId::Case => "case",
            ParamId::Strategy => "strategy",
            ParamId::Answer => "answer",
            ParamId::Decision => "decision",
        }
    }

    /// Returns the widget label shown next to this parameter.
    pub fn label(&self) -> &'static str {
        match self {
            ParamId::Spot => "Spot",
            ParamId::Rate => "Interest rate",
            ParamId::DividendYield => "Dividend yield",
            ParamId::Horizon => "Time (years)",
            ParamId::Entry => "Entry price",
            ParamId::Price => "Current price",
            ParamId::Contracts => "Contracts",
            ParamId::PortfolioValue => "Portfolio value",
            ParamId::Beta => "Beta",
            ParamId::FuturesPrice => "Futures price",
            ParamId::Correlation => "Correlation",
            ParamId::Near => "Near contract",
            ParamId::Far => "Next contract",
            ParamId::BuyOrders => "Buy orders",
            ParamId::SellOrders => "Sell orders",
            ParamId::HedgePct => "Hedge %",
            ParamId::Case => "Case",
            ParamId::Strategy => "Strategy",
            ParamId::Answer => "Answer",
            ParamId::Decision => "Decision",
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        ParamId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == key)
            .ok_or_else(|| format!("unknown parameter '{}'", s))
    }
}

/// A single parameter value as reported by the input collector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    /// Numeric value (prices, rates, counts)
    Number(f64),
    /// Categorical value (case, strategy, decision)
    Choice(String),
}

impl ParamValue {
    /// Parses collector text: anything that reads as a float is a number,
    /// everything else is a choice.
    ///
    /// # Examples
    /// ```
    /// use lab_core::types::ParamValue;
    ///
    /// assert_eq!(ParamValue::parse("22000"), ParamValue::Number(22000.0));
    /// assert_eq!(ParamValue::parse("Short USD"), ParamValue::Choice("Short USD".into()));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(v) => ParamValue::Number(v),
            Err(_) => ParamValue::Choice(trimmed.to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(v) => write!(f, "{}", v),
            ParamValue::Choice(s) => f.write_str(s),
        }
    }
}

/// Closed interval `[min, max]` a numeric parameter must lie in.
///
/// An infinite `max` models an unbounded number input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// `[0, ∞)`: prices, portfolio values, free numeric answers.
    pub const NON_NEGATIVE: Domain = Domain {
        min: 0.0,
        max: f64::INFINITY,
    };

    /// `[0, 1]`: correlations.
    pub const UNIT: Domain = Domain { min: 0.0, max: 1.0 };

    /// Creates the closed interval `[min, max]`.
    pub const fn closed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns whether `value` lies in the interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Validates `value` for `field`, returning it unchanged on success.
    pub fn check(&self, field: ParamId, value: f64) -> Result<f64, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { field, value });
        }
        if !self.contains(value) {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max.is_infinite() {
            write!(f, "[{}, ∞)", self.min)
        } else {
            write!(f, "[{}, {}]", self.min, self.max)
        }
    }
}

/// Kind of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    /// Real number within a domain
    Real(Domain),
    /// Whole number within a domain
    Count(Domain),
    /// One of a fixed menu of options
    Choice(&'static [&'static str]),
}

/// Default value offered by the input collector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    /// Numeric default
    Number(f64),
    /// Categorical default
    Choice(&'static str),
}

impl ParamDefault {
    /// Converts the default into a collector value.
    pub fn to_value(&self) -> ParamValue {
        match self {
            ParamDefault::Number(v) => ParamValue::Number(*v),
            ParamDefault::Choice(s) => ParamValue::Choice((*s).to_string()),
        }
    }
}

/// Declaration of one parameter a module consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Parameter identifier
    pub id: ParamId,
    /// Kind and domain
    pub kind: ParamKind,
    /// Collector default
    pub default: ParamDefault,
}

impl ParamSpec {
    /// Declares a real-valued parameter.
    pub const fn real(id: ParamId, domain: Domain, default: f64) -> Self {
        Self {
            id,
            kind: ParamKind::Real(domain),
            default: ParamDefault::Number(default),
        }
    }

    /// Declares a whole-number parameter.
    pub const fn count(id: ParamId, domain: Domain, default: f64) -> Self {
        Self {
            id,
            kind: ParamKind::Count(domain),
            default: ParamDefault::Number(default),
        }
    }

    /// Declares a categorical parameter.
    pub const fn choice(
        id: ParamId,
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            id,
            kind: ParamKind::Choice(options),
            default: ParamDefault::Choice(default),
        }
    }

    fn lookup<'a>(&self, input: &'a ScenarioInput) -> Result<&'a ParamValue, ValidationError> {
        input
            .get(self.id)
            .ok_or(ValidationError::Missing { field: self.id })
    }

    /// Reads a numeric parameter, enforcing finiteness, integrality for
    /// counts, and the declared domain.
    pub fn read_real(&self, input: &ScenarioInput) -> Result<f64, ValidationError> {
        let field = self.id;
        let value = match self.lookup(input)? {
            ParamValue::Number(v) => *v,
            ParamValue::Choice(_) => {
                return Err(ValidationError::WrongKind {
                    field,
                    expected: "a number",
                })
            }
        };

        match self.kind {
            ParamKind::Real(domain) => domain.check(field, value),
            ParamKind::Count(domain) => {
                if value.is_finite() && value.fract() != 0.0 {
                    return Err(ValidationError::NotInteger { field, value });
                }
                domain.check(field, value)
            }
            ParamKind::Choice(_) => Err(ValidationError::WrongKind {
                field,
                expected: "one of the listed options",
            }),
        }
    }

    /// Reads a whole-number parameter.
    pub fn read_count(&self, input: &ScenarioInput) -> Result<u32, ValidationError> {
        let value = self.read_real(input)?;
        if value.fract() != 0.0 {
            return Err(ValidationError::NotInteger {
                field: self.id,
                value,
            });
        }
        if value < 0.0 || value > f64::from(u32::MAX) {
            return Err(ValidationError::OutOfRange {
                field: self.id,
                value,
                min: 0.0,
                max: f64::from(u32::MAX),
            });
        }
        Ok(value as u32)
    }

    /// Reads a categorical parameter and returns the canonical option.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn read_choice(&self, input: &ScenarioInput) -> Result<&'static str, ValidationError> {
        let field = self.id;
        let options = match self.kind {
            ParamKind::Choice(options) => options,
            _ => {
                return Err(ValidationError::WrongKind {
                    field,
                    expected: "a number",
                })
            }
        };
        let raw = match self.lookup(input)? {
            ParamValue::Choice(s) => s.as_str(),
            ParamValue::Number(_) => {
                return Err(ValidationError::WrongKind {
                    field,
                    expected: "one of the listed options",
                })
            }
        };

        match_option(options, raw).ok_or_else(|| ValidationError::UnknownChoice {
            field,
            value: raw.to_string(),
            allowed: options.join(", "),
        })
    }

    /// Validates the parameter without returning it.
    pub fn check(&self, input: &ScenarioInput) -> Result<(), ValidationError> {
        match self.kind {
            ParamKind::Real(_) | ParamKind::Count(_) => self.read_real(input).map(|_| ()),
            ParamKind::Choice(_) => self.read_choice(input).map(|_| ()),
        }
    }

    /// Human-readable domain or option menu.
    pub fn describe(&self) -> String {
        match self.kind {
            ParamKind::Real(domain) => domain.to_string(),
            ParamKind::Count(domain) => format!("{} (whole)", domain),
            ParamKind::Choice(options) => options.join(" | "),
        }
    }
}

/// Finds `raw` in `options`, ignoring ASCII case and surrounding whitespace.
pub fn match_option(options: &'static [&'static str], raw: &str) -> Option<&'static str> {
    let needle = raw.trim();
    options
        .iter()
        .copied()
        .find(|opt| opt.eq_ignore_ascii_case(needle))
}
