//! Item model and the solver contract.
//!
//! # Key Types
//!
//! - [`Item`]: value, weight, and the mutable `is_selected` flag
//! - [`Solution`]: full selection, its value, and the step count
//! - [`KnapsackSolver`]: uniform `solve(items, capacity)` contract
//!
//! The free functions ([`total_value`], [`total_weight`], [`is_feasible`],
//! [`solution_score`]) are shared by every algorithm.

mod incumbent;
mod item;
mod solution;

pub(crate) use incumbent::Incumbent;
pub use item::{
    is_feasible, items_from_pairs, solution_score, total_value, total_weight, validate_instance,
    Item, INFEASIBLE_SCORE,
};
pub use solution::{KnapsackSolver, Solution};
