//! Item dominance and blocking.
//!
//! Item A dominates item B when A is at least as valuable and no heavier.
//! While A is excluded on the current search path, including B can never
//! beat the same selection with A swapped in, so B is *blocked*.
//!
//! # Key Types
//!
//! - [`DominanceGraph`]: who dominates whom, by position
//! - [`BlockTable`]: which positions are blocked, and by whom
//!
//! [`dominance_order`] and [`reorder`] implement the preprocessing step
//! that moves the strongest dominators to the front of the search.

mod blocking;
mod graph;

pub use blocking::BlockTable;
pub use graph::{dominance_order, reorder, DominanceGraph};
