//! Random instance parameters.

use crate::error::{KnapsackError, Result};

/// Parameters for random item generation.
///
/// Values and weights are drawn uniformly from inclusive ranges.
///
/// # Examples
///
/// ```
/// use u_knapsack::generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_num_items(40)
///     .with_value_range(1, 20)
///     .with_seed(1337);
/// assert_eq!(config.num_items, 40);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Number of items.
    pub num_items: usize,
    /// Smallest item value.
    pub min_value: i64,
    /// Largest item value.
    pub max_value: i64,
    /// Smallest item weight.
    pub min_weight: i64,
    /// Largest item weight.
    pub max_weight: i64,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_items: 25,
            min_value: 1,
            max_value: 10,
            min_weight: 4,
            max_weight: 10,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of items.
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    /// Sets the inclusive value range.
    pub fn with_value_range(mut self, min: i64, max: i64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Sets the inclusive weight range.
    pub fn with_weight_range(mut self, min: i64, max: i64) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_items == 0 {
            return Err(KnapsackError::InvalidConfig(
                "num_items must be at least 1".into(),
            ));
        }
        if self.min_value < 1 || self.min_value > self.max_value {
            return Err(KnapsackError::InvalidConfig(format!(
                "value range must satisfy 1 <= min <= max, got {}..={}",
                self.min_value, self.max_value
            )));
        }
        if self.min_weight < 1 || self.min_weight > self.max_weight {
            return Err(KnapsackError::InvalidConfig(format!(
                "weight range must satisfy 1 <= min <= max, got {}..={}",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }
}
