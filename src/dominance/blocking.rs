//! Runtime blocking state for the dominance-pruned search.

use super::graph::DominanceGraph;

/// Which item, if any, currently blocks each position.
///
/// A blocked item may not be included: its blocker was excluded on the
/// current search path, and swapping the blocker in would never lose value
/// nor add weight. Marks follow stack discipline: [`block`](Self::block) on
/// entering an exclude branch, [`release`](Self::release) with the same
/// source on every way out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTable {
    blocked_by: Vec<Option<usize>>,
}

impl BlockTable {
    /// Creates a table with nothing blocked.
    pub fn new(len: usize) -> Self {
        Self {
            blocked_by: vec![None; len],
        }
    }

    /// Blocks every item `source` dominates that is not already blocked.
    ///
    /// The first blocker wins; existing marks are never overwritten.
    /// Returns the number of marks set.
    pub fn block(&mut self, source: usize, graph: &DominanceGraph) -> usize {
        let mut set = 0;
        for &other in graph.dominated_by(source) {
            let slot = &mut self.blocked_by[other];
            if slot.is_none() {
                *slot = Some(source);
                set += 1;
            }
        }
        set
    }

    /// Clears the marks owned by `source`, leaving other blockers' marks.
    ///
    /// Returns the number of marks cleared.
    pub fn release(&mut self, source: usize, graph: &DominanceGraph) -> usize {
        let mut cleared = 0;
        for &other in graph.dominated_by(source) {
            let slot = &mut self.blocked_by[other];
            if *slot == Some(source) {
                *slot = None;
                cleared += 1;
            }
        }
        cleared
    }

    /// The item currently blocking `position`.
    #[inline]
    pub fn blocker(&self, position: usize) -> Option<usize> {
        self.blocked_by[position]
    }

    /// Returns true if `position` is blocked.
    #[inline]
    pub fn is_blocked(&self, position: usize) -> bool {
        self.blocked_by[position].is_some()
    }

    /// Number of blocked positions.
    pub fn blocked_count(&self) -> usize {
        self.blocked_by.iter().filter(|b| b.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::items_from_pairs;

    fn graph() -> DominanceGraph {
        // 1 dominates 0, 2, 3, 4; 0 dominates 2, 3, 4; 2 dominates 3, 4
        DominanceGraph::build(&items_from_pairs(&[
            (9, 5),
            (10, 4),
            (7, 5),
            (5, 6),
            (4, 5),
        ]))
    }

    #[test]
    fn test_block_and_release_round_trip() {
        let graph = graph();
        let mut table = BlockTable::new(graph.len());

        assert_eq!(table.block(2, &graph), 2);
        assert_eq!(table.blocker(3), Some(2));
        assert_eq!(table.blocker(4), Some(2));
        assert!(!table.is_blocked(0));

        assert_eq!(table.release(2, &graph), 2);
        assert_eq!(table.blocked_count(), 0);
    }

    #[test]
    fn test_first_blocker_wins() {
        let graph = graph();
        let mut table = BlockTable::new(graph.len());

        table.block(2, &graph);
        // 0 would block 2, 3, 4 but 3 and 4 already belong to 2
        assert_eq!(table.block(0, &graph), 1);
        assert_eq!(table.blocker(2), Some(0));
        assert_eq!(table.blocker(3), Some(2));
        assert_eq!(table.blocker(4), Some(2));
    }

    #[test]
    fn test_release_only_clears_own_marks() {
        let graph = graph();
        let mut table = BlockTable::new(graph.len());

        table.block(2, &graph);
        table.block(0, &graph);
        assert_eq!(table.release(0, &graph), 1);

        assert!(!table.is_blocked(2));
        assert_eq!(table.blocker(3), Some(2));
        assert_eq!(table.blocker(4), Some(2));
        assert_eq!(table.blocked_count(), 2);
    }

    #[test]
    fn test_nested_scopes_unwind_cleanly() {
        let graph = graph();
        let mut table = BlockTable::new(graph.len());

        table.block(1, &graph);
        table.block(0, &graph);
        table.block(2, &graph);
        assert_eq!(table.blocked_count(), 4);

        table.release(2, &graph);
        table.release(0, &graph);
        table.release(1, &graph);
        assert_eq!(table, BlockTable::new(graph.len()));
    }
}
