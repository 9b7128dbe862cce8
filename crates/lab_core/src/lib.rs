//! # lab_core: Foundation Types for the Futures Teaching Lab
//!
//! ## Layer 1 (Foundation) Role
//!
//! lab_core is the bottom layer of the workspace, providing:
//! - Module identifiers: `LabModule` (`types::module`)
//! - Parameter declarations and validation: `ParamId`, `ParamSpec`, `Domain` (`types::param`)
//! - Immutable input snapshots: `ScenarioInput` (`types::input`)
//! - Result records: `ScenarioResult`, `Metric`, `Curve` (`types::result`)
//! - Error types: `LabError`, `ValidationError` (`types::error`)
//! - Evaluation grids: `linspace` (`math::grid`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other lab_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use lab_core::types::{Domain, ParamId, ParamSpec, ParamValue, ScenarioInput};
//!
//! const CORRELATION: ParamSpec = ParamSpec::real(ParamId::Correlation, Domain::UNIT, 0.8);
//!
//! let input = ScenarioInput::new().with(ParamId::Correlation, ParamValue::Number(0.9));
//! assert_eq!(CORRELATION.read_real(&input).unwrap(), 0.9);
//!
//! let bad = ScenarioInput::new().with(ParamId::Correlation, ParamValue::Number(1.2));
//! assert!(CORRELATION.read_real(&bad).is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for inputs and results

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;
