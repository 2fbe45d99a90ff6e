//! Random instance generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::GeneratorConfig;
use crate::error::Result;
use crate::model::{total_weight, Item};

/// A generated problem: items plus the capacity to solve against.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    /// The items, numbered `0..n`.
    pub items: Vec<Item>,
    /// Half the total item weight, rounded down.
    pub capacity: i64,
}

/// Draws random instances.
pub struct ItemGenerator;

impl ItemGenerator {
    /// Generates an instance.
    ///
    /// The capacity is half the total weight, which keeps roughly half of
    /// the items out of any solution and makes the searches work hardest.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::generator::{GeneratorConfig, ItemGenerator};
    ///
    /// let config = GeneratorConfig::default().with_num_items(10).with_seed(42);
    /// let a = ItemGenerator::generate(&config).unwrap();
    /// let b = ItemGenerator::generate(&config).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn generate(config: &GeneratorConfig) -> Result<Instance> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let items: Vec<Item> = (0..config.num_items)
            .map(|id| {
                let value = rng.random_range(config.min_value..=config.max_value);
                let weight = rng.random_range(config.min_weight..=config.max_weight);
                Item::new(id, value, weight)
            })
            .collect();
        let capacity = total_weight(&items, false) / 2;

        debug!(item_count = items.len(), capacity, "generated instance");
        Ok(Instance { items, capacity })
    }
}
