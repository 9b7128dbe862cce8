//! Analytical module identifiers.

use std::fmt;
use std::str::FromStr;

/// One of the thirteen analytical lab modules.
///
/// The quiz and certificate (module 14) are not scenario modules and live
/// in `lab_quiz`.
///
/// # Examples
/// ```
/// use lab_core::types::LabModule;
///
/// let module: LabModule = "optimal-hedge".parse().unwrap();
/// assert_eq!(module, LabModule::OptimalHedgeRatio);
/// assert_eq!(module.number(), 7);
/// assert_eq!("7".parse::<LabModule>().unwrap(), module);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LabModule {
    /// Roles of hedgers, speculators and arbitrageurs
    WhyFutures,
    /// Cost-of-carry futures pricing
    Pricing,
    /// Daily mark-to-market settlement
    MarkToMarket,
    /// Long versus short P&L
    TradingPnl,
    /// Directional P&L profile
    StrategyBuilder,
    /// Portfolio hedge profile
    HedgingBuilder,
    /// Beta-adjusted contract count
    OptimalHedgeRatio,
    /// Spot minus futures
    BasisConvergence,
    /// Hedge effectiveness from correlation
    BasisRisk,
    /// Cost of rolling into the next contract
    RollingFutures,
    /// Exchange order matching
    MatchingSystem,
    /// Case practice with fixed feedback
    RealWorldCases,
    /// Strategy menu
    AdvancedStrategies,
}

impl LabModule {
    /// All modules in menu order.
    pub const ALL: [LabModule; 13] = [
        LabModule::WhyFutures,
        LabModule::Pricing,
        LabModule::MarkToMarket,
        LabModule::TradingPnl,
        LabModule::StrategyBuilder,
        LabModule::HedgingBuilder,
        LabModule::OptimalHedgeRatio,
        LabModule::BasisConvergence,
        LabModule::BasisRisk,
        LabModule::RollingFutures,
        LabModule::MatchingSystem,
        LabModule::RealWorldCases,
        LabModule::AdvancedStrategies,
    ];

    /// Menu number, starting at 1.
    pub fn number(&self) -> u8 {
        match self {
            LabModule::WhyFutures => 1,
            LabModule::Pricing => 2,
            LabModule::MarkToMarket => 3,
            LabModule::TradingPnl => 4,
            LabModule::StrategyBuilder => 5,
            LabModule::HedgingBuilder => 6,
            LabModule::OptimalHedgeRatio => 7,
            LabModule::BasisConvergence => 8,
            LabModule::BasisRisk => 9,
            LabModule::RollingFutures => 10,
            LabModule::MatchingSystem => 11,
            LabModule::RealWorldCases => 12,
            LabModule::AdvancedStrategies => 13,
        }
    }

    /// Command-line identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            LabModule::WhyFutures => "why-futures",
            LabModule::Pricing => "pricing",
            LabModule::MarkToMarket => "mtm",
            LabModule::TradingPnl => "trading-pnl",
            LabModule::StrategyBuilder => "strategy-builder",
            LabModule::HedgingBuilder => "hedging-builder",
            LabModule::OptimalHedgeRatio => "optimal-hedge",
            LabModule::BasisConvergence => "basis",
            LabModule::BasisRisk => "basis-risk",
            LabModule::RollingFutures => "rolling",
            LabModule::MatchingSystem => "matching",
            LabModule::RealWorldCases => "cases",
            LabModule::AdvancedStrategies => "strategies",
        }
    }

    /// Menu title.
    pub fn title(&self) -> &'static str {
        match self {
            LabModule::WhyFutures => "Why Futures",
            LabModule::Pricing => "Futures Pricing",
            LabModule::MarkToMarket => "MTM & Margins",
            LabModule::TradingPnl => "Trading P&L",
            LabModule::StrategyBuilder => "Trading Strategy Builder",
            LabModule::HedgingBuilder => "Hedging Strategy Builder",
            LabModule::OptimalHedgeRatio => "Optimal Hedge Ratio",
            LabModule::BasisConvergence => "Basis & Convergence",
            LabModule::BasisRisk => "Basis Risk",
            LabModule::RollingFutures => "Rolling Futures",
            LabModule::MatchingSystem => "Matching System",
            LabModule::RealWorldCases => "Real-World Cases",
            LabModule::AdvancedStrategies => "Advanced Strategies",
        }
    }
}

impl fmt::Display for LabModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

impl FromStr for LabModule {
    type Err = String;

    /// Accepts the slug, the menu number, or the title (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        LabModule::ALL
            .iter()
            .copied()
            .find(|m| {
                m.slug().eq_ignore_ascii_case(key)
                    || m.title().eq_ignore_ascii_case(key)
                    || key.parse::<u8>().ok() == Some(m.number())
            })
            .ok_or_else(|| format!("unknown module '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_menu_order() {
        for (idx, module) in LabModule::ALL.iter().enumerate() {
            assert_eq!(module.number() as usize, idx + 1);
        }
    }

    #[test]
    fn test_slugs_are_unique_and_parse_back() {
        for module in LabModule::ALL {
            assert_eq!(module.slug().parse::<LabModule>().unwrap(), module);
            assert_eq!(module.title().parse::<LabModule>().unwrap(), module);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(LabModule::Pricing.to_string(), "2. Futures Pricing");
    }

    #[test]
    fn test_unknown_module() {
        assert!("14".parse::<LabModule>().is_err());
        assert!("options".parse::<LabModule>().is_err());
    }
}
