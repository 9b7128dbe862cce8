//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod modules;
pub mod quiz;
pub mod run;
