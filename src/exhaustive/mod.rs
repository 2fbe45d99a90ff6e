//! Exhaustive search.
//!
//! The brute-force baseline: every item is tried in, then out, and every
//! complete assignment is scored. No pruning. The cost doubles with each
//! item, so callers cap the instance size (the comparison harness defaults
//! to 25 items).
//!
//! # References
//!
//! - Martello, S. & Toth, P. (1990). *Knapsack Problems: Algorithms and Computer Implementations*. Wiley.

mod runner;

pub use runner::ExhaustiveRunner;
