//! Random instance generation.
//!
//! Produces uniformly random items and a capacity of half their total
//! weight, the stress setting used to compare the solvers.

mod config;
mod instance;

pub use config::GeneratorConfig;
pub use instance::{Instance, ItemGenerator};
