//! Exact 0/1 knapsack solvers.
//!
//! Given items with a value and a weight, select the subset of maximum total
//! value whose total weight does not exceed a capacity. Four strategies of
//! increasing sophistication are provided, all exact:
//!
//! - **Exhaustive search**: every include/exclude assignment, O(2^n).
//! - **Branch-and-bound (BnB)**: depth-first search cut by an optimistic
//!   value bound and a weight check.
//! - **Blocking search**: BnB plus dominance pruning. An item that is
//!   excluded blocks every item it dominates (no more valuable, no lighter)
//!   for the rest of that subtree. Optionally reorders items so the
//!   strongest dominators are decided first.
//! - **Dynamic programming (DP)**: O(n * capacity) table filling with
//!   back-pointer reconstruction.
//!
//! Each strategy takes `(items, capacity)` and returns a [`model::Solution`]
//! holding the selection, its value, and a step count for comparing how
//! much work the searches did. [`Algorithm`] puts them behind the common
//! [`model::KnapsackSolver`] trait.
//!
//! # Supporting modules
//!
//! - [`dominance`]: the dominance relation and the blocking table
//! - [`generator`]: seeded random instances
//! - [`compare`]: run several algorithms on one instance and report
//!
//! # Quick start
//!
//! ```
//! use u_knapsack::{Algorithm, model::{items_from_pairs, KnapsackSolver}};
//!
//! let items = items_from_pairs(&[(9, 5), (10, 4), (7, 5), (5, 6), (4, 5)]);
//! let solution = Algorithm::BlockingSorted.solve(&items, 14).unwrap();
//! assert_eq!(solution.value, 26);
//! assert_eq!(solution.selected_ids(), vec![0, 1, 2]);
//! ```
//!
//! # Logging
//!
//! Solvers emit `tracing` events (`solve_start`, `solve_end`) and never
//! install a subscriber.

pub mod algorithm;
pub mod blocking;
pub mod bnb;
pub mod compare;
pub mod dominance;
pub mod dp;
pub mod error;
pub mod exhaustive;
pub mod generator;
pub mod model;

pub use algorithm::Algorithm;
pub use error::{KnapsackError, Result};
