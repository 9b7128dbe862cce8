//! Run command implementation
//!
//! Evaluates one module: collects the parameter snapshot from the module
//! defaults and `key=value` overrides, dispatches it to the scenario
//! engine, and prints the result.

use lab_core::types::{LabModule, ParamId, ParamValue, ScenarioInput};
use lab_models::engine;
use tracing::{debug, info};

use crate::presentation::{self, OutputFormat};
use crate::{CliError, Result};

/// Parses a `key=value` parameter override.
pub fn parse_param(raw: &str) -> std::result::Result<(ParamId, ParamValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let id: ParamId = key.parse()?;
    Ok((id, ParamValue::parse(value)))
}

/// Builds the override snapshot from command-line selections.
pub fn overrides(
    case: Option<&str>,
    strategy: Option<&str>,
    params: &[(ParamId, ParamValue)],
) -> ScenarioInput {
    let mut input: ScenarioInput = params.iter().cloned().collect();
    if let Some(case) = case {
        input = input.with_choice(ParamId::Case, case);
    }
    if let Some(strategy) = strategy {
        input = input.with_choice(ParamId::Strategy, strategy);
    }
    input
}

/// Run the run command
pub fn run(
    module: &str,
    case: Option<&str>,
    strategy: Option<&str>,
    params: &[(ParamId, ParamValue)],
    format: OutputFormat,
) -> Result<()> {
    let module: LabModule = module.parse().map_err(CliError::InvalidArgument)?;
    if case.is_some() && module != LabModule::RealWorldCases {
        return Err(CliError::InvalidArgument(format!(
            "--case only applies to '{}'",
            LabModule::RealWorldCases.slug()
        )));
    }
    if strategy.is_some() && module != LabModule::AdvancedStrategies {
        return Err(CliError::InvalidArgument(format!(
            "--strategy only applies to '{}'",
            LabModule::AdvancedStrategies.slug()
        )));
    }

    let input = engine::collect(module, &overrides(case, strategy, params));
    debug!(module = module.slug(), ?format, "Collected input snapshot");

    let result = engine::evaluate(module, &input)?;
    let specs = engine::params_for(module, &input);
    if let Some((id, _)) = params
        .iter()
        .find(|(id, _)| !specs.iter().any(|spec| spec.id == *id))
    {
        return Err(CliError::InvalidArgument(format!(
            "parameter '{}' is not used by '{}'",
            id.name(),
            module.slug()
        )));
    }
    print!("{}", presentation::render(&result, &input, &specs, format)?);

    info!(module = module.slug(), "Run complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("futures-price=0").unwrap(),
            (ParamId::FuturesPrice, ParamValue::Number(0.0))
        );
        assert_eq!(
            parse_param("decision=Short USD").unwrap(),
            (ParamId::Decision, ParamValue::Choice("Short USD".into()))
        );
        assert!(parse_param("spot").is_err());
        assert!(parse_param("volatility=0.2").is_err());
    }

    #[test]
    fn test_selection_flags_become_overrides() {
        let input = overrides(Some("Airline Fuel Hedge"), None, &[]);
        assert_eq!(
            input.get(ParamId::Case),
            Some(&ParamValue::Choice("Airline Fuel Hedge".into()))
        );
        assert!(!input.contains(ParamId::Strategy));
    }

    #[test]
    fn test_strategy_flag_rejected_elsewhere() {
        let err = run("pricing", None, Some("Over Hedge"), &[], OutputFormat::Table).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_out_of_range_param_fails() {
        let params = [(ParamId::Correlation, ParamValue::Number(1.2))];
        let err = run("basis-risk", None, None, &params, OutputFormat::Table).unwrap_err();
        assert!(matches!(err, CliError::Lab(_)));
    }

    #[test]
    fn test_unused_param_rejected() {
        let params = [(ParamId::Correlation, ParamValue::Number(5.0))];
        let err = run("pricing", None, None, &params, OutputFormat::Table).unwrap_err();
        match err {
            CliError::InvalidArgument(message) => {
                assert!(message.contains("correlation"));
                assert!(message.contains("pricing"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_selected_case_params_accepted() {
        let params = [(ParamId::Decision, ParamValue::Choice("Partial".into()))];
        assert!(run(
            "cases",
            Some("Airline Fuel Hedge"),
            None,
            &params,
            OutputFormat::Json
        )
        .is_ok());
    }
}
