//! Real-world cases (module 12) and advanced strategies (module 13).
//!
//! Both modules take a selection parameter and dispatch to the chosen
//! entry, which declares its own sub-inputs.

pub mod cases;
pub mod strategies;

pub use cases::CaseStudy;
pub use strategies::Strategy;
