//! Solver output and the uniform solver contract.

use super::item::{self, Item};
use crate::error::Result;

/// Result of one solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The full item collection, in the caller's order, with `is_selected`
    /// marking the chosen subset.
    pub items: Vec<Item>,

    /// Total value of the selected items.
    pub value: i64,

    /// Algorithmic steps taken: recursive invocations for the searches,
    /// always 1 for dynamic programming. Not a wall-clock measure.
    pub steps: u64,
}

impl Solution {
    /// Builds a solution from a copy of `items` and a selection mask.
    ///
    /// `selected` is indexed by position in `items`.
    pub(crate) fn from_mask(items: &[Item], selected: &[bool], value: i64, steps: u64) -> Self {
        let items = items
            .iter()
            .zip(selected)
            .map(|(item, &is_selected)| Item {
                is_selected,
                ..*item
            })
            .collect();
        Self {
            items,
            value,
            steps,
        }
    }

    /// Identities of the selected items.
    pub fn selected_ids(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter(|item| item.is_selected)
            .map(|item| item.id)
            .collect()
    }

    /// Positions of the selected items.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of selected items.
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_selected).count()
    }

    /// Total weight of the selected items.
    pub fn total_weight(&self) -> i64 {
        item::total_weight(&self.items, true)
    }

    /// Returns true if the selection fits within `capacity`.
    pub fn is_feasible(&self, capacity: i64) -> bool {
        item::is_feasible(&self.items, capacity)
    }
}

/// A knapsack solving strategy.
///
/// Implementations copy `items` before searching, so repeated calls on the
/// same input are independent of each other.
pub trait KnapsackSolver {
    /// Short human-readable name, used in reports and log events.
    fn name(&self) -> &str;

    /// Finds a maximum-value selection whose weight does not exceed
    /// `capacity`.
    ///
    /// # Errors
    ///
    /// Fails before searching if the instance violates the preconditions
    /// checked by [`validate_instance`](super::validate_instance).
    fn solve(&self, items: &[Item], capacity: i64) -> Result<Solution>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::items_from_pairs;

    #[test]
    fn test_from_mask_copies_selection() {
        let items = items_from_pairs(&[(9, 5), (10, 4), (7, 5)]);
        let solution = Solution::from_mask(&items, &[true, false, true], 16, 3);

        assert_eq!(solution.selected_indices(), vec![0, 2]);
        assert_eq!(solution.selected_ids(), vec![0, 2]);
        assert_eq!(solution.selected_count(), 2);
        assert_eq!(solution.total_weight(), 10);
        assert!(solution.is_feasible(10));
        assert!(!solution.is_feasible(9));
        // input untouched
        assert!(items.iter().all(|item| !item.is_selected));
    }

    #[test]
    fn test_selected_ids_follow_item_identity() {
        let mut items = items_from_pairs(&[(1, 1), (2, 2)]);
        items[0].id = 7;
        items[1].id = 3;
        let solution = Solution::from_mask(&items, &[true, true], 3, 1);
        assert_eq!(solution.selected_ids(), vec![7, 3]);
        assert_eq!(solution.selected_indices(), vec![0, 1]);
    }
}
