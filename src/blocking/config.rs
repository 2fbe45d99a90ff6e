//! Blocking search configuration.

use crate::error::Result;

/// Order in which the search decides items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemOrder {
    /// Decide items in the order given by the caller.
    #[default]
    Given,

    /// Decide items with the most dominated items first.
    ///
    /// Strong dominators are then excluded (and block their dominated
    /// items) near the root, which cuts far more of the tree.
    ByDominance,
}

/// Configuration for the dominance-pruned search.
///
/// # Examples
///
/// ```
/// use u_knapsack::blocking::{BlockingConfig, ItemOrder};
///
/// let config = BlockingConfig::default().with_order(ItemOrder::ByDominance);
/// assert_eq!(config.order, ItemOrder::ByDominance);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockingConfig {
    /// Item decision order.
    pub order: ItemOrder,
}

impl BlockingConfig {
    /// Configuration that reorders items by dominance count.
    pub fn sorted() -> Self {
        Self {
            order: ItemOrder::ByDominance,
        }
    }

    /// Sets the item decision order.
    pub fn with_order(mut self, order: ItemOrder) -> Self {
        self.order = order;
        self
    }

    /// Validates the configuration.
    ///
    /// Every item order is valid, so this always succeeds.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(BlockingConfig::default().order, ItemOrder::Given);
        assert_eq!(BlockingConfig::sorted().order, ItemOrder::ByDominance);
        assert!(BlockingConfig::default().validate().is_ok());
        assert!(BlockingConfig::sorted().validate().is_ok());
    }
}
