//! Exhaustive include/exclude enumeration.

use tracing::info;

use crate::error::Result;
use crate::model::{solution_score, validate_instance, Incumbent, Item, Solution};

/// Enumerates every assignment.
///
/// Visits all 2^n leaves, so the step count for `n` items is always
/// `2^(n+1) - 1`. Only practical for small instances.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Returns the best-scoring selection over all assignments.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::exhaustive::ExhaustiveRunner;
    /// use u_knapsack::model::items_from_pairs;
    ///
    /// let items = items_from_pairs(&[(9, 5), (10, 4), (7, 5)]);
    /// let solution = ExhaustiveRunner::run(&items, 9).unwrap();
    /// assert_eq!(solution.value, 19);
    /// assert_eq!(solution.steps, 15);
    /// ```
    pub fn run(items: &[Item], capacity: i64) -> Result<Solution> {
        validate_instance(items, capacity)?;
        info!(
            event = "solve_start",
            algorithm = "exhaustive",
            item_count = items.len(),
            capacity,
        );

        let mut search = Search {
            items: items.to_vec(),
            capacity,
            incumbent: Incumbent::new(),
            steps: 0,
        };
        for item in &mut search.items {
            item.is_selected = false;
        }
        search.descend(0);

        let steps = search.steps;
        let (mask, value) = search.incumbent.into_parts(items.len());
        info!(event = "solve_end", algorithm = "exhaustive", value, steps);
        Ok(Solution::from_mask(items, &mask, value, steps))
    }
}

struct Search {
    items: Vec<Item>,
    capacity: i64,
    incumbent: Incumbent,
    steps: u64,
}

impl Search {
    /// Returns the best score in the subtree rooted at `next`.
    fn descend(&mut self, next: usize) -> i64 {
        self.steps += 1;

        if next == self.items.len() {
            let score = solution_score(&self.items, self.capacity);
            self.incumbent.offer(&self.items, score);
            return score;
        }

        self.items[next].is_selected = true;
        let with_item = self.descend(next + 1);

        self.items[next].is_selected = false;
        let without_item = self.descend(next + 1);

        with_item.max(without_item)
    }
}
