//! Branch-and-bound with dominance blocking.

use tracing::{debug, info};

use super::config::{BlockingConfig, ItemOrder};
use crate::dominance::{dominance_order, reorder, BlockTable, DominanceGraph};
use crate::error::Result;
use crate::model::{
    solution_score, total_value, validate_instance, Incumbent, Item, Solution, INFEASIBLE_SCORE,
};

/// Dominance-pruned branch-and-bound.
///
/// Uses the same value bound and weight check as
/// [`BnbRunner`](crate::bnb::BnbRunner). In addition, when an item is
/// excluded every item it dominates is blocked for the rest of that
/// subtree, and a blocked item's include branch is skipped.
pub struct BlockingRunner;

impl BlockingRunner {
    /// Returns a maximum-value feasible selection.
    ///
    /// The returned items are in the caller's order regardless of
    /// [`BlockingConfig::order`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::blocking::{BlockingConfig, BlockingRunner};
    /// use u_knapsack::model::items_from_pairs;
    ///
    /// let items = items_from_pairs(&[(9, 5), (10, 4), (7, 5), (5, 6), (4, 5)]);
    /// let solution = BlockingRunner::run(&items, 14, &BlockingConfig::sorted()).unwrap();
    /// assert_eq!(solution.value, 26);
    /// assert_eq!(solution.selected_ids(), vec![0, 1, 2]);
    /// ```
    pub fn run(items: &[Item], capacity: i64, config: &BlockingConfig) -> Result<Solution> {
        validate_instance(items, capacity)?;
        config.validate()?;
        info!(
            event = "solve_start",
            algorithm = "blocking",
            order = ?config.order,
            item_count = items.len(),
            capacity,
        );

        let order: Vec<usize> = match config.order {
            ItemOrder::Given => (0..items.len()).collect(),
            ItemOrder::ByDominance => dominance_order(items),
        };
        let mut search_items = reorder(items, &order);
        for item in &mut search_items {
            item.is_selected = false;
        }

        let graph = DominanceGraph::build(&search_items);
        debug!(
            dominance_pairs = graph.edge_count(),
            max_dominated = (0..graph.len())
                .map(|i| graph.dominance_count(i))
                .max()
                .unwrap_or(0),
            "dominance graph built"
        );

        let mut search = Search {
            blocks: BlockTable::new(search_items.len()),
            graph,
            items: search_items,
            capacity,
            best_value: 0,
            incumbent: Incumbent::new(),
            steps: 0,
        };
        let remaining_value = total_value(&search.items, false);
        search.descend(0, 0, 0, remaining_value);
        debug_assert_eq!(search.blocks.blocked_count(), 0, "blocks leaked");

        let steps = search.steps;
        let (search_mask, value) = search.incumbent.into_parts(items.len());
        let mut mask = vec![false; items.len()];
        for (position, &original) in order.iter().enumerate() {
            mask[original] = search_mask[position];
        }

        info!(event = "solve_end", algorithm = "blocking", value, steps);
        Ok(Solution::from_mask(items, &mask, value, steps))
    }
}

struct Search {
    items: Vec<Item>,
    graph: DominanceGraph,
    blocks: BlockTable,
    capacity: i64,
    best_value: i64,
    incumbent: Incumbent,
    steps: u64,
}

impl Search {
    /// Runs `f` with the items dominated by `source` blocked, releasing
    /// the marks afterwards.
    fn with_blocks<R>(&mut self, source: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.blocks.block(source, &self.graph);
        let result = f(self);
        self.blocks.release(source, &self.graph);
        result
    }

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
        if current_weight + weight <= self.capacity && !self.blocks.is_blocked(next) {
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
            without_item = self.with_blocks(next, |search| {
                search.descend(
                    next + 1,
                    current_value,
                    current_weight,
                    remaining_value - value,
                )
            });
        }

        with_item.max(without_item)
    }
}
