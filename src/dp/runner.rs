//! Dynamic programming solver entry point.

use tracing::{debug, info};

use super::config::DpConfig;
use super::table::{DpTable, MAX_TABLE_CELLS};
use crate::error::{KnapsackError, Result};
use crate::model::{validate_instance, Item, Solution};

/// Exact O(n * capacity) solver.
pub struct DpRunner;

impl DpRunner {
    /// Fills the tables and reconstructs an optimal selection.
    ///
    /// The step count is always 1: the solver makes a single structured
    /// pass rather than a variable number of decisions.
    ///
    /// # Errors
    ///
    /// Besides the instance preconditions, fails with
    /// [`KnapsackError::TableTooLarge`] when the table would exceed
    /// [`DpConfig::max_table_cells`], or [`MAX_TABLE_CELLS`] when no limit
    /// is configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::dp::{DpConfig, DpRunner};
    /// use u_knapsack::model::items_from_pairs;
    ///
    /// let items = items_from_pairs(&[(9, 5), (10, 4), (7, 5), (5, 6), (4, 5)]);
    /// let solution = DpRunner::run(&items, 14, &DpConfig::default()).unwrap();
    /// assert_eq!(solution.value, 26);
    /// assert_eq!(solution.steps, 1);
    /// ```
    pub fn run(items: &[Item], capacity: i64, config: &DpConfig) -> Result<Solution> {
        validate_instance(items, capacity)?;
        config.validate()?;

        let cells = DpTable::cell_count(items.len(), capacity);
        let limit = config
            .max_table_cells
            .map_or(MAX_TABLE_CELLS, |limit| limit.min(MAX_TABLE_CELLS));
        if cells > limit {
            return Err(KnapsackError::TableTooLarge { cells, limit });
        }

        info!(
            event = "solve_start",
            algorithm = "dynamic_programming",
            item_count = items.len(),
            capacity,
        );
        debug!(cells, "allocating tables");

        let table = DpTable::build(items, capacity)?;
        let value = table.optimal_value();
        let mask = table.reconstruct();

        info!(
            event = "solve_end",
            algorithm = "dynamic_programming",
            value,
            steps = 1u64,
        );
        Ok(Solution::from_mask(items, &mask, value, 1))
    }
}
