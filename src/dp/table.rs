//! The value and back-pointer tables.

use crate::error::{KnapsackError, Result};
use crate::model::Item;

/// Largest number of cells whose two `i64` tables stay within the
/// allocator's `isize::MAX` byte limit.
pub const MAX_TABLE_CELLS: usize = isize::MAX as usize / (2 * std::mem::size_of::<i64>());

/// Back-pointer stored in row 0 when item 0 is packed: there is no
/// predecessor row to continue from.
pub const NO_PREDECESSOR: i64 = -1;

/// Filled dynamic-programming tables.
///
/// `value(i, w)` is the best value reachable with items `0..=i` within
/// budget `w`. `prev_weight(i, w)` is the budget to continue from in row
/// `i - 1`: equal to `w` when item `i` is left out, `w - weight[i]` when it
/// is packed, and [`NO_PREDECESSOR`] when item 0 is packed.
#[derive(Debug, Clone)]
pub struct DpTable {
    rows: usize,
    width: usize,
    best_value: Vec<i64>,
    prev_weight: Vec<i64>,
}

impl DpTable {
    /// Number of cells in a table for `rows` items and `capacity`,
    /// saturating at `usize::MAX`.
    pub fn cell_count(rows: usize, capacity: i64) -> usize {
        usize::try_from(capacity)
            .ok()
            .and_then(|c| c.checked_add(1))
            .and_then(|width| width.checked_mul(rows))
            .unwrap_or(usize::MAX)
    }

    /// Fills both tables for `items` and `capacity`.
    ///
    /// # Errors
    ///
    /// [`KnapsackError::EmptyInstance`] without items,
    /// [`KnapsackError::NegativeCapacity`] for a negative capacity and
    /// [`KnapsackError::TableTooLarge`] when the tables could not be
    /// allocated at all.
    pub fn build(items: &[Item], capacity: i64) -> Result<Self> {
        if items.is_empty() {
            return Err(KnapsackError::EmptyInstance);
        }
        if capacity < 0 {
            return Err(KnapsackError::NegativeCapacity(capacity));
        }
        let rows = items.len();
        let cells = Self::cell_count(rows, capacity);
        if cells > MAX_TABLE_CELLS {
            return Err(KnapsackError::TableTooLarge {
                cells,
                limit: MAX_TABLE_CELLS,
            });
        }
        let width = cells / rows;
        let mut table = Self {
            rows,
            width,
            best_value: vec![0; cells],
            prev_weight: vec![0; cells],
        };

        let first = items[0];
        for w in 0..width {
            let budget = w as i64;
            let cell = table.cell(0, w);
            if first.weight <= budget {
                table.best_value[cell] = first.value;
                table.prev_weight[cell] = NO_PREDECESSOR;
            } else {
                table.best_value[cell] = 0;
                table.prev_weight[cell] = budget;
            }
        }

        for (i, item) in items.iter().enumerate().skip(1) {
            for w in 0..width {
                let budget = w as i64;
                let without_item = table.best_value[table.cell(i - 1, w)];
                let with_item = if item.weight <= budget {
                    let rest = (budget - item.weight) as usize;
                    table.best_value[table.cell(i - 1, rest)] + item.value
                } else {
                    0
                };

                let cell = table.cell(i, w);
                // ties leave the item out
                if without_item >= with_item {
                    table.best_value[cell] = without_item;
                    table.prev_weight[cell] = budget;
                } else {
                    table.best_value[cell] = with_item;
                    table.prev_weight[cell] = budget - item.weight;
                }
            }
        }

        Ok(table)
    }

    #[inline]
    fn cell(&self, row: usize, w: usize) -> usize {
        row * self.width + w
    }

    /// Number of item rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The capacity the table was built for.
    pub fn capacity(&self) -> i64 {
        self.width as i64 - 1
    }

    /// Best value using items `0..=row` within budget `w`.
    pub fn value(&self, row: usize, w: usize) -> i64 {
        self.best_value[self.cell(row, w)]
    }

    /// Back-pointer at `(row, w)`.
    pub fn prev_weight(&self, row: usize, w: usize) -> i64 {
        self.prev_weight[self.cell(row, w)]
    }

    /// Optimal value for the full instance.
    pub fn optimal_value(&self) -> i64 {
        self.value(self.rows - 1, self.width - 1)
    }

    /// Walks the back-pointers from `(rows - 1, capacity)` down to row 0
    /// and returns the packed items as a mask.
    pub fn reconstruct(&self) -> Vec<bool> {
        let mut selected = vec![false; self.rows];
        let mut w = self.capacity();
        for row in (0..self.rows).rev() {
            let prev = self.prev_weight(row, w as usize);
            if prev != w {
                selected[row] = true;
                w = prev;
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::items_from_pairs;

    #[test]
    fn test_base_row() {
        let items = items_from_pairs(&[(7, 3)]);
        let table = DpTable::build(&items, 4).unwrap();

        for w in 0..3 {
            assert_eq!(table.value(0, w), 0);
            assert_eq!(table.prev_weight(0, w), w as i64);
        }
        for w in 3..=4 {
            assert_eq!(table.value(0, w), 7);
            assert_eq!(table.prev_weight(0, w), NO_PREDECESSOR);
        }
        assert_eq!(table.reconstruct(), vec![true]);
    }

    #[test]
    fn test_recurrence_and_back_pointers() {
        let items = items_from_pairs(&[(3, 2), (6, 4), (3, 2)]);
        let table = DpTable::build(&items, 4).unwrap();

        assert_eq!(table.rows(), 3);
        assert_eq!(table.capacity(), 4);
        // row 1, budget 4: packing item 1 (6) beats item 0 alone (3)
        assert_eq!(table.value(1, 4), 6);
        assert_eq!(table.prev_weight(1, 4), 0);
        // row 2, budget 4: {0, 2} ties {1}, so item 2 is left out
        assert_eq!(table.value(2, 4), 6);
        assert_eq!(table.prev_weight(2, 4), 4);
        assert_eq!(table.optimal_value(), 6);
        assert_eq!(table.reconstruct(), vec![false, true, false]);
    }

    #[test]
    fn test_zero_capacity_table() {
        let items = items_from_pairs(&[(3, 2), (6, 4)]);
        let table = DpTable::build(&items, 0).unwrap();

        assert_eq!(table.optimal_value(), 0);
        assert_eq!(table.reconstruct(), vec![false, false]);
    }

    #[test]
    fn test_oversized_table_rejected() {
        let items = items_from_pairs(&[(1, 1), (1, 1)]);

        assert!(matches!(
            DpTable::build(&items, i64::MAX / 4),
            Err(KnapsackError::TableTooLarge {
                limit: MAX_TABLE_CELLS,
                ..
            })
        ));
        assert_eq!(DpTable::cell_count(2, i64::MAX), usize::MAX);
        assert_eq!(DpTable::cell_count(3, 4), 15);
    }
}
