//! Dominance-pruned ("blocking") branch-and-bound.
//!
//! Branch-and-bound plus a second cut: an item dominated by an item that
//! was excluded higher up on the current path is never included, because
//! swapping in its dominator never loses value and never adds weight.
//!
//! Blocks are set when the search enters an item's exclude branch and
//! released, for that item only, when it leaves. With
//! [`ItemOrder::ByDominance`] the items that dominate the most others are
//! decided first, so blocks take effect near the root.
//!
//! # References
//!
//! - Kellerer, H., Pferschy, U. & Pisinger, D. (2004). *Knapsack Problems*, Section 3.4 (dominance). Springer.
//! - Stephens, R. (2019). *Essential Algorithms*, 2nd ed., Chapter 12. Wiley.

mod config;
mod runner;

pub use config::{BlockingConfig, ItemOrder};
pub use runner::BlockingRunner;
