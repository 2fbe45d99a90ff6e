//! Pairwise dominance relation and the dominance-count ordering.

use crate::model::Item;

/// For every item position, the positions of the items it dominates.
///
/// Item `i` dominates `j` (`i != j`) when `value[i] >= value[j]` and
/// `weight[i] <= weight[j]`. The relation is computed over all pairs in
/// O(n^2); it is neither symmetric nor closed transitively. Positions refer
/// to the collection the graph was built from, so a reordered collection
/// needs its own graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominanceGraph {
    dominated: Vec<Vec<usize>>,
}

impl DominanceGraph {
    /// Builds the relation over `items`.
    pub fn build(items: &[Item]) -> Self {
        let dominated = items
            .iter()
            .enumerate()
            .map(|(i, a)| {
                items
                    .iter()
                    .enumerate()
                    .filter(|&(j, b)| i != j && a.dominates(b))
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();
        Self { dominated }
    }

    /// Positions dominated by the item at `position`.
    #[inline]
    pub fn dominated_by(&self, position: usize) -> &[usize] {
        &self.dominated[position]
    }

    /// Number of items dominated by the item at `position`.
    #[inline]
    pub fn dominance_count(&self, position: usize) -> usize {
        self.dominated[position].len()
    }

    /// Number of items in the graph.
    pub fn len(&self) -> usize {
        self.dominated.len()
    }

    /// Returns true if the graph has no items.
    pub fn is_empty(&self) -> bool {
        self.dominated.is_empty()
    }

    /// Total number of dominance pairs.
    pub fn edge_count(&self) -> usize {
        self.dominated.iter().map(Vec::len).sum()
    }
}

/// Positions of `items` sorted by descending dominance count.
///
/// The sort is stable: items with equal counts keep their relative order.
pub fn dominance_order(items: &[Item]) -> Vec<usize> {
    let graph = DominanceGraph::build(items);
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(graph.dominance_count(i)));
    order
}

/// Builds a fresh collection holding `items[order[k]]` at position `k`.
///
/// Item ids are copied unchanged; only positions are renumbered.
pub fn reorder(items: &[Item], order: &[usize]) -> Vec<Item> {
    order.iter().map(|&i| items[i]).collect()
}
