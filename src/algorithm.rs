//! The solving strategies behind one interface.

use std::fmt;

use crate::blocking::{BlockingConfig, BlockingRunner};
use crate::bnb::BnbRunner;
use crate::dp::{DpConfig, DpRunner};
use crate::error::Result;
use crate::exhaustive::ExhaustiveRunner;
use crate::model::{Item, KnapsackSolver, Solution};

/// Every available strategy, with default configuration.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Algorithm, model::{items_from_pairs, KnapsackSolver}};
///
/// let items = items_from_pairs(&[(9, 5), (10, 4), (7, 5), (5, 6), (4, 5)]);
/// for algorithm in Algorithm::ALL {
///     assert_eq!(algorithm.solve(&items, 14).unwrap().value, 26);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// [`ExhaustiveRunner`].
    Exhaustive,
    /// [`BnbRunner`].
    BranchAndBound,
    /// [`BlockingRunner`] in the caller's item order.
    Blocking,
    /// [`BlockingRunner`] with items sorted by dominance count.
    BlockingSorted,
    /// [`DpRunner`].
    DynamicProgramming,
}

impl Algorithm {
    /// All strategies, from most to least expensive search.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Exhaustive,
        Algorithm::BranchAndBound,
        Algorithm::Blocking,
        Algorithm::BlockingSorted,
        Algorithm::DynamicProgramming,
    ];

    /// Largest item count the strategy is run on by default.
    ///
    /// The exponential searches become impractical beyond these sizes.
    pub fn default_item_limit(self) -> Option<usize> {
        match self {
            Algorithm::Exhaustive => Some(25),
            Algorithm::BranchAndBound => Some(45),
            Algorithm::Blocking => Some(85),
            Algorithm::BlockingSorted => Some(350),
            Algorithm::DynamicProgramming => None,
        }
    }

    /// Display name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "Exhaustive Search",
            Algorithm::BranchAndBound => "Branch and Bound",
            Algorithm::Blocking => "Blocking Search",
            Algorithm::BlockingSorted => "Blocking Search Sorted",
            Algorithm::DynamicProgramming => "Dynamic Programming",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl KnapsackSolver for Algorithm {
    fn name(&self) -> &str {
        self.label()
    }

    fn solve(&self, items: &[Item], capacity: i64) -> Result<Solution> {
        match self {
            Algorithm::Exhaustive => ExhaustiveRunner::run(items, capacity),
            Algorithm::BranchAndBound => BnbRunner::run(items, capacity),
            Algorithm::Blocking => BlockingRunner::run(items, capacity, &BlockingConfig::default()),
            Algorithm::BlockingSorted => {
                BlockingRunner::run(items, capacity, &BlockingConfig::sorted())
            }
            Algorithm::DynamicProgramming => DpRunner::run(items, capacity, &DpConfig::default()),
        }
    }
}
