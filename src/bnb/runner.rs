//! Branch-and-bound with an optimistic value bound.

use tracing::info;

use crate::error::Result;
use crate::model::{
    solution_score, total_value, validate_instance, Incumbent, Item, Solution, INFEASIBLE_SCORE,
};

/// Depth-first branch-and-bound.
///
/// The bound at a node is `current_value + remaining_value`: the value
/// reached if every undecided item could still be packed. A node whose bound
/// falls below the best complete value found so far is cut off.
pub struct BnbRunner;

impl BnbRunner {
    /// Returns a maximum-value feasible selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::bnb::BnbRunner;
    /// use u_knapsack::model::items_from_pairs;
    ///
    /// let items = items_from_pairs(&[(9, 5), (10, 4), (7, 5), (5, 6), (4, 5)]);
    /// let solution = BnbRunner::run(&items, 14).unwrap();
    /// assert_eq!(solution.value, 26);
    /// assert!(solution.steps < 63);
    /// ```
    pub fn run(items: &[Item], capacity: i64) -> Result<Solution> {
        validate_instance(items, capacity)?;
        info!(
            event = "solve_start",
            algorithm = "branch_and_bound",
            item_count = items.len(),
            capacity,
        );

        let mut search = Search {
            items: items.to_vec(),
            capacity,
            best_value: 0,
            incumbent: Incumbent::new(),
            steps: 0,
        };
        for item in &mut search.items {
            item.is_selected = false;
        }
        let remaining_value = total_value(&search.items, false);
        search.descend(0, 0, 0, remaining_value);

        let steps = search.steps;
        let (mask, value) = search.incumbent.into_parts(items.len());
        info!(
            event = "solve_end",
            algorithm = "branch_and_bound",
            value,
            steps,
        );
        Ok(Solution::from_mask(items, &mask, value, steps))
    }
}

struct Search {
    items: Vec<Item>,
    capacity: i64,
    /// Best complete value found anywhere in the search so far.
    best_value: i64,
    incumbent: Incumbent,
    steps: u64,
}

impl Search {
    /// Returns the best score in the subtree, or [`INFEASIBLE_SCORE`] when
    /// the subtree is cut off before reaching a leaf.
    fn descend(
        &mut self,
        next: usize,
        current_value: i64,
        current_weight: i64,
        remaining_value: i64,
    ) -> i64 {
        self.steps += 1;

        if next == self.items.len() {
            let score = solution_score(&self.items, self.capacity);
            self.best_value = self.best_value.max(score);
            self.incumbent.offer(&self.items, score);
            return score;
        }

        if current_value + remaining_value < self.best_value {
            return INFEASIBLE_SCORE;
        }

        let Item { value, weight, .. } = self.items[next];

        let mut with_item = INFEASIBLE_SCORE;
        if current_weight + weight <= self.capacity {
            self.items[next].is_selected = true;
            with_item = self.descend(
                next + 1,
                current_value + value,
                current_weight + weight,
                remaining_value - value,
            );
            self.items[next].is_selected = false;
        }

        let mut without_item = INFEASIBLE_SCORE;
        if current_value + remaining_value - value > self.best_value {
            without_item = self.descend(
                next + 1,
                current_value,
                current_weight,
                remaining_value - value,
            );
        }

        with_item.max(without_item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::ExhaustiveRunner;
    use crate::model::items_from_pairs;

    #[test]
    fn test_reference_scenario() {
        let items = items_from_pairs(&[(9, 5), (10, 4), (7, 5), (5, 6), (4, 5)]);
        let solution = BnbRunner::run(&items, 14).unwrap();

        assert_eq!(solution.value, 26);
        assert_eq!(solution.selected_indices(), vec![0, 1, 2]);
        assert!(solution.is_feasible(14));
    }

    #[test]
    fn test_prunes_relative_to_exhaustive() {
        let items = items_from_pairs(&[
            (9, 5),
            (10, 4),
            (7, 5),
            (5, 6),
            (4, 5),
            (6, 6),
            (8, 7),
            (3, 4),
            (10, 9),
            (2, 4),
        ]);
        let capacity = 27;
        let exhaustive = ExhaustiveRunner::run(&items, capacity).unwrap();
        let bnb = BnbRunner::run(&items, capacity).unwrap();

        assert_eq!(bnb.value, exhaustive.value);
        assert!(
            bnb.steps < exhaustive.steps,
            "expected pruning: {} vs {}",
            bnb.steps,
            exhaustive.steps
        );
    }

    #[test]
    fn test_tie_prefers_include_branch() {
        let items = items_from_pairs(&[(3, 2), (6, 4), (3, 2)]);
        let solution = BnbRunner::run(&items, 4).unwrap();

        assert_eq!(solution.value, 6);
        assert_eq!(solution.selected_indices(), vec![0, 2]);
    }

    #[test]
    fn test_zero_capacity_returns_empty_selection() {
        let items = items_from_pairs(&[(3, 2), (6, 4), (1, 1)]);
        let solution = BnbRunner::run(&items, 0).unwrap();

        assert_eq!(solution.value, 0);
        assert_eq!(solution.selected_count(), 0);
        assert_eq!(solution.items.len(), 3);
    }

    #[test]
    fn test_single_item_that_fits() {
        let items = items_from_pairs(&[(4, 3)]);
        let solution = BnbRunner::run(&items, 3).unwrap();

        assert_eq!(solution.value, 4);
        assert_eq!(solution.selected_indices(), vec![0]);
    }

    #[test]
    fn test_single_item_too_heavy() {
        let items = items_from_pairs(&[(4, 3)]);
        let solution = BnbRunner::run(&items, 2).unwrap();

        assert_eq!(solution.value, 0);
        assert_eq!(solution.selected_count(), 0);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let items = items_from_pairs(&[(9, 5), (10, 4), (7, 5), (5, 6), (4, 5)]);
        let first = BnbRunner::run(&items, 14).unwrap();
        let second = BnbRunner::run(&items, 14).unwrap();
        assert_eq!(first, second);
    }
}
