//! Comparison harness configuration.

use std::collections::BTreeMap;

use crate::algorithm::Algorithm;
use crate::error::{KnapsackError, Result};

/// Which algorithms to run and how large an instance each may take.
///
/// # Examples
///
/// ```
/// use u_knapsack::{compare::CompareConfig, Algorithm};
///
/// let config = CompareConfig::default()
///     .with_algorithms(vec![Algorithm::BranchAndBound, Algorithm::DynamicProgramming])
///     .with_item_limit(Algorithm::BranchAndBound, Some(60));
/// assert_eq!(config.item_limit(Algorithm::BranchAndBound), Some(60));
/// assert_eq!(config.item_limit(Algorithm::DynamicProgramming), None);
/// ```
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,
    /// Per-algorithm overrides of [`Algorithm::default_item_limit`].
    /// `None` removes the limit.
    pub item_limits: BTreeMap<Algorithm, Option<usize>>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            item_limits: BTreeMap::new(),
        }
    }
}

impl CompareConfig {
    /// Sets the algorithms to run.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Overrides the item limit of one algorithm.
    pub fn with_item_limit(mut self, algorithm: Algorithm, limit: Option<usize>) -> Self {
        self.item_limits.insert(algorithm, limit);
        self
    }

    /// Removes every item limit.
    pub fn unlimited(mut self) -> Self {
        for algorithm in Algorithm::ALL {
            self.item_limits.insert(algorithm, None);
        }
        self
    }

    /// Effective item limit for `algorithm`.
    pub fn item_limit(&self, algorithm: Algorithm) -> Option<usize> {
        self.item_limits
            .get(&algorithm)
            .copied()
            .unwrap_or_else(|| algorithm.default_item_limit())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.algorithms.is_empty() {
            return Err(KnapsackError::InvalidConfig(
                "at least one algorithm is required".into(),
            ));
        }
        Ok(())
    }
}
