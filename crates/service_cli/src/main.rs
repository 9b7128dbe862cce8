//! Futures Lab CLI - Scenario Engine and Quiz for Futures Teaching
//!
//! Command-line front end of the futures teaching lab.
//!
//! # Commands
//!
//! - `futures-lab modules` - List modules, parameters, cases, strategies and quiz questions
//! - `futures-lab run <module> [-p key=value]...` - Evaluate one module
//! - `futures-lab quiz [-a N=answer]... [--name NAME]` - Grade the quiz and issue a certificate
//!
//! # Architecture
//!
//! The binary plays the input collector (module defaults plus `key=value`
//! overrides) and the presentation layer (table, JSON or CSV output, the
//! certificate file). All computation lives in `lab_models` and `lab_quiz`.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use lab_core::types::{ParamId, ParamValue};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod presentation;

pub use error::{CliError, Result};

use config::LabConfig;
use presentation::OutputFormat;

/// Futures Teaching & Practice Lab
#[derive(Parser)]
#[command(name = "futures-lab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "futures_lab.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List modules, their parameters and defaults
    Modules,

    /// Evaluate one module from its defaults and overrides
    Run {
        /// Module slug, number or title (e.g. pricing, 7, "Basis Risk")
        module: String,

        /// Case for the real-world cases module
        #[arg(long)]
        case: Option<String>,

        /// Strategy for the advanced strategies module
        #[arg(long)]
        strategy: Option<String>,

        /// Parameter override, repeatable (e.g. -p spot=750)
        #[arg(short = 'p', long = "param", value_parser = commands::run::parse_param)]
        params: Vec<(ParamId, ParamValue)>,

        /// Output format [default: from config, else table]
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Grade the quiz and issue a certificate on a pass
    Quiz {
        /// Answer, repeatable (e.g. -a 1=Short -a 3=110)
        #[arg(short = 'a', long = "answer", value_parser = commands::quiz::parse_answer)]
        answers: Vec<(u8, String)>,

        /// Name printed on the certificate
        #[arg(short, long)]
        name: Option<String>,

        /// Directory for the certificate [default: from config]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = LabConfig::load_with_env_and_validate(&cli.config)?;
    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    init_tracing(log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config.display(), ?config, "Configuration loaded");

    match cli.command {
        Commands::Modules => commands::modules::run()?,
        Commands::Run {
            module,
            case,
            strategy,
            params,
            format,
        } => commands::run::run(
            &module,
            case.as_deref(),
            strategy.as_deref(),
            &params,
            format.unwrap_or(config.format),
        )?,
        Commands::Quiz {
            answers,
            name,
            output,
        } => {
            let output_dir: &Path = output.as_deref().unwrap_or(&config.output_dir);
            commands::quiz::run(
                &answers,
                name.as_deref(),
                output_dir,
                &config.instructor,
                chrono::Local::now().date_naive(),
            )?
        }
    }
    Ok(())
}
