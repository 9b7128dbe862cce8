//! Core parameter, result, and error types.
//!
//! This module provides:
//! - `module`: Identifiers for the analytical lab modules
//! - `param`: Parameter identifiers, values, domains and declarations
//! - `input`: The immutable parameter snapshot handed to every evaluation
//! - `result`: Metrics, curves and feedback produced by an evaluation
//! - `error`: Structured error types for validation and computation failures
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod error;
pub mod input;
pub mod module;
pub mod param;
pub mod result;

pub use error::{LabError, ValidationError};
pub use input::ScenarioInput;
pub use module::LabModule;
pub use param::{Domain, ParamDefault, ParamId, ParamKind, ParamSpec, ParamValue};
pub use result::{Curve, Metric, ScenarioResult, Unit};
