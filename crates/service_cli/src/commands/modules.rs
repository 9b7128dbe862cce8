//! Modules command implementation
//!
//! Lists the analytical modules with their parameters, the case and
//! strategy menus, and the quiz questions.

use lab_core::types::{LabModule, ParamSpec, ScenarioInput};
use lab_models::catalogue::{CaseStudy, Strategy};
use lab_models::engine;
use lab_quiz::QUESTIONS;

use crate::Result;

/// Run the modules command
pub fn run() -> Result<()> {
    print!("{}", listing());
    Ok(())
}

fn listing() -> String {
    let mut out = String::new();
    for module in LabModule::ALL {
        out.push_str(&format!("{}  [{}]\n", module, module.slug()));
        push_params(&mut out, engine::entry(module).params, "    ");

        match module {
            LabModule::RealWorldCases => {
                for case in CaseStudy::ALL {
                    out.push_str(&format!("    - {}: {}\n", case, case.prompt()));
                    push_params(&mut out, case.params(), "        ");
                }
            }
            LabModule::AdvancedStrategies => {
                for strategy in Strategy::ALL {
                    out.push_str(&format!("    - {}\n", strategy));
                    push_params(&mut out, strategy.params(), "        ");
                }
            }
            _ => {}
        }
    }

    out.push_str("14. Quiz & Certificate  [quiz]\n");
    for question in &QUESTIONS {
        let options = question.options();
        if options.is_empty() {
            out.push_str(&format!("    {}  (number)\n", question));
        } else {
            out.push_str(&format!("    {}  ({})\n", question, options.join(" | ")));
        }
    }
    out
}

fn push_params(out: &mut String, specs: &[ParamSpec], indent: &str) {
    let defaults = ScenarioInput::from_defaults(specs);
    for spec in specs {
        let default = defaults
            .get(spec.id)
            .map(|v| v.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{}{:<16} {:<28} default {}\n",
            indent,
            spec.id.name(),
            spec.describe(),
            default
        ));
    }
}
