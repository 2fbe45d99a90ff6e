//! Side-by-side comparison of the solvers.
//!
//! Runs each configured [`Algorithm`](crate::Algorithm) on an independent
//! copy of one instance, times it, skips the ones whose item limit is
//! exceeded, and renders the results as text.

mod config;
mod runner;

pub use config::CompareConfig;
pub use runner::{AlgorithmRun, CompareRunner, ComparisonReport, RunOutcome};
