//! Bounded branch-and-bound.
//!
//! Extends exhaustive search with three cuts:
//!
//! - a node is abandoned when `current_value + remaining_value` is below the
//!   best complete value found so far;
//! - the include branch is skipped when the item does not fit;
//! - the exclude branch is skipped when the bound without the item's value
//!   cannot exceed the best value.
//!
//! Skipped branches cost nothing; abandoned nodes count as one step.
//!
//! # References
//!
//! - Kolesar, P. J. (1967). "A Branch and Bound Algorithm for the Knapsack Problem", *Management Science* 13(9), 723-735.
//! - Martello, S. & Toth, P. (1990). *Knapsack Problems: Algorithms and Computer Implementations*. Wiley.

mod runner;

pub use runner::BnbRunner;
