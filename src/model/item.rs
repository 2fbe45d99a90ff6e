//! Items and the aggregate helpers every solver builds on.

use crate::error::{KnapsackError, Result};

/// Score of a completed assignment that exceeds the capacity.
///
/// Strictly below the score of the empty selection (0), so any feasible
/// assignment, including the empty one, is preferred over an infeasible one.
pub const INFEASIBLE_SCORE: i64 = -1;

/// A knapsack item.
///
/// `is_selected` is the only field the solvers mutate; everything else is
/// fixed for the lifetime of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Stable identity, normally the position in the caller's collection.
    pub id: usize,
    /// Value gained by packing the item. Must be positive.
    pub value: i64,
    /// Weight the item adds to the knapsack. Must be positive.
    pub weight: i64,
    /// Whether the item is part of the current assignment.
    pub is_selected: bool,
}

impl Item {
    /// Creates an unselected item.
    pub fn new(id: usize, value: i64, weight: i64) -> Self {
        Self {
            id,
            value,
            weight,
            is_selected: false,
        }
    }

    /// Returns true if this item dominates `other`: at least as valuable and
    /// no heavier.
    ///
    /// Identity is not checked; callers exclude self-pairs.
    #[inline]
    pub fn dominates(&self, other: &Item) -> bool {
        self.value >= other.value && self.weight <= other.weight
    }
}

/// Builds unselected items from `(value, weight)` pairs, numbering them `0..n`.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::items_from_pairs;
///
/// let items = items_from_pairs(&[(9, 5), (10, 4)]);
/// assert_eq!(items[1].id, 1);
/// assert_eq!(items[1].value, 10);
/// ```
pub fn items_from_pairs(pairs: &[(i64, i64)]) -> Vec<Item> {
    pairs
        .iter()
        .enumerate()
        .map(|(id, &(value, weight))| Item::new(id, value, weight))
        .collect()
}

/// Sums item values, over all items or only the selected ones.
pub fn total_value(items: &[Item], selected_only: bool) -> i64 {
    items
        .iter()
        .filter(|item| !selected_only || item.is_selected)
        .map(|item| item.value)
        .sum()
}

/// Sums item weights, over all items or only the selected ones.
pub fn total_weight(items: &[Item], selected_only: bool) -> i64 {
    items
        .iter()
        .filter(|item| !selected_only || item.is_selected)
        .map(|item| item.weight)
        .sum()
}

/// Returns true if the selected items fit within `capacity`.
pub fn is_feasible(items: &[Item], capacity: i64) -> bool {
    total_weight(items, true) <= capacity
}

/// Scores the current assignment.
///
/// Feasible assignments score their selected value; infeasible ones score
/// [`INFEASIBLE_SCORE`].
pub fn solution_score(items: &[Item], capacity: i64) -> i64 {
    if is_feasible(items, capacity) {
        total_value(items, true)
    } else {
        INFEASIBLE_SCORE
    }
}

/// Checks the solver preconditions.
///
/// Rejects an empty collection, non-positive values or weights, and a
/// negative capacity. A capacity of zero is valid.
pub fn validate_instance(items: &[Item], capacity: i64) -> Result<()> {
    if items.is_empty() {
        return Err(KnapsackError::EmptyInstance);
    }
    for (index, item) in items.iter().enumerate() {
        if item.value <= 0 {
            return Err(KnapsackError::InvalidItem {
                index,
                reason: format!("value must be positive, got {}", item.value),
            });
        }
        if item.weight <= 0 {
            return Err(KnapsackError::InvalidItem {
                index,
                reason: format!("weight must be positive, got {}", item.weight),
            });
        }
    }
    if capacity < 0 {
        return Err(KnapsackError::NegativeCapacity(capacity));
    }
    Ok(())
}
