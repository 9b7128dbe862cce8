//! Scenario engine.
//!
//! Maps a module selection and an immutable parameter snapshot to a
//! [`ScenarioResult`](lab_core::types::ScenarioResult). Every module is a
//! row in [`MODULE_TABLE`]; case and strategy selections dispatch the same
//! way within their module.

mod dispatch;
mod handlers;
pub mod params;

pub use dispatch::{collect, entry, evaluate, params_for, Handler, ModuleEntry, MODULE_TABLE};
