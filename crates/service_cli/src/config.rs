//! Lab configuration.
//!
//! Loaded from a TOML file when one exists, then overridden from the
//! environment and validated as a whole.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::presentation::OutputFormat;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Config file is not valid TOML for [`LabConfig`]
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// One or more settings are invalid
    #[error("Invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Settings of the `futures-lab` binary.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LabConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory certificates are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Instructor printed on certificates
    #[serde(default = "default_instructor")]
    pub instructor: String,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_instructor() -> String {
    lab_quiz::DEFAULT_INSTRUCTOR.to_string()
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_dir: default_output_dir(),
            instructor: default_instructor(),
            format: OutputFormat::default(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl LabConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Loads `path` if it exists, otherwise starts from defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies `FUTURES_LAB_*` environment overrides.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(level) = var("FUTURES_LAB_LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(dir) = var("FUTURES_LAB_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(instructor) = var("FUTURES_LAB_INSTRUCTOR") {
            self.instructor = instructor;
        }
        self
    }

    /// Validates the configuration, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, LOG_LEVELS
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push("output_dir cannot be empty".to_string());
        }

        if self.instructor.trim().is_empty() {
            errors.push("instructor cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Loads, applies environment overrides, and validates.
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}
