//! Error types for u-knapsack.

use thiserror::Error;

/// Precondition and configuration failures.
///
/// An infeasible assignment is never an error: it is ranked below the
/// empty solution and simply loses. Errors are reserved for inputs the
/// solvers refuse to search at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// The item collection is empty.
    #[error("instance has no items")]
    EmptyInstance,

    /// An item has a non-positive value or weight.
    #[error("invalid item at index {index}: {reason}")]
    InvalidItem {
        /// Position of the offending item.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// The capacity is below zero.
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    /// A configuration struct failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The dynamic-programming table would exceed the configured cell limit.
    #[error("dynamic programming table needs {cells} cells, limit is {limit}")]
    TableTooLarge {
        /// Cells required (`items * (capacity + 1)`).
        cells: usize,
        /// Configured limit.
        limit: usize,
    },
}

/// Result type alias for u-knapsack operations.
pub type Result<T> = std::result::Result<T, KnapsackError>;
