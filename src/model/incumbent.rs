//! Best-so-far full assignment, owned by one solve call.

use super::item::Item;

/// The best complete assignment seen during one search.
///
/// Leaves are offered in traversal order and only a strictly better score
/// replaces the current record. With include-first traversal this is the
/// same as preferring the include branch on ties.
#[derive(Debug, Clone, Default)]
pub(crate) struct Incumbent {
    best: Option<(Vec<bool>, i64)>,
}

impl Incumbent {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records the current assignment of `items` if `score` beats the record.
    pub(crate) fn offer(&mut self, items: &[Item], score: i64) -> bool {
        let improves = match &self.best {
            Some((_, best)) => score > *best,
            None => true,
        };
        if improves {
            let mask = items.iter().map(|item| item.is_selected).collect();
            self.best = Some((mask, score));
        }
        improves
    }

    /// Final mask and value.
    ///
    /// A search that never reached a leaf yields the empty selection.
    pub(crate) fn into_parts(self, len: usize) -> (Vec<bool>, i64) {
        self.best.unwrap_or_else(|| (vec![false; len], 0))
    }
}
