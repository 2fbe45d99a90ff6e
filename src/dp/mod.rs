//! Dynamic programming.
//!
//! Classic table filling over (item, weight budget) with back-pointers for
//! reconstructing the selection. Exact and polynomial in the capacity, at
//! the cost of two `items * (capacity + 1)` tables.
//!
//! Ties between packing and skipping an item are resolved by skipping it,
//! which can select a different (equally valuable) subset than the
//! include-first searches.
//!
//! # References
//!
//! - Bellman, R. (1957). *Dynamic Programming*. Princeton University Press.
//! - Martello, S. & Toth, P. (1990). *Knapsack Problems: Algorithms and Computer Implementations*. Wiley.

mod config;
mod runner;
mod table;

pub use config::DpConfig;
pub use runner::DpRunner;
pub use table::{DpTable, MAX_TABLE_CELLS, NO_PREDECESSOR};
