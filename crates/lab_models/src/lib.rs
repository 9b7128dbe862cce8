//! # Lab Models (L2: Business Logic)
//!
//! Futures formulas, the case and strategy catalogue, and the scenario
//! engine that maps a module selection and a parameter snapshot to a
//! result record.
//!
//! This crate provides:
//! - Futures positions with linear P&L (`instruments`)
//! - Cost-of-carry pricing, hedging, basis and matching formulas (`analytics`)
//! - Real-world cases and advanced strategies (`catalogue`)
//! - Parameter declarations and the module dispatch table (`engine`)
//!
//! ## Design Principles
//!
//! - **Pure evaluation**: every handler is a function of its input snapshot only
//! - **Table dispatch**: module identifiers map to handler functions, not a branch ladder
//! - **Generic formulas** over `num_traits::Float`
//!
//! ## Example
//!
//! ```
//! use lab_core::types::{LabModule, ParamId, ScenarioInput};
//! use lab_models::engine;
//!
//! let input = engine::collect(
//!     LabModule::MatchingSystem,
//!     &ScenarioInput::new().with_number(ParamId::BuyOrders, 60.0),
//! );
//! let result = engine::evaluate(LabModule::MatchingSystem, &input).unwrap();
//! assert_eq!(result.metric("Trades executed").unwrap().value, 50.0);
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytics;
pub mod catalogue;
pub mod engine;
pub mod instruments;
