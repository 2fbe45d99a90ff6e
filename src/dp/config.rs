//! Dynamic programming configuration.

use crate::error::{KnapsackError, Result};

/// Configuration for the table-filling solver.
///
/// # Examples
///
/// ```
/// use u_knapsack::dp::DpConfig;
///
/// let config = DpConfig::default().with_max_table_cells(1_000_000);
/// assert_eq!(config.max_table_cells, Some(1_000_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DpConfig {
    /// Upper bound on `items * (capacity + 1)`. `None` means unlimited.
    ///
    /// Each cell costs two `i64` entries (value and back-pointer).
    pub max_table_cells: Option<usize>,
}

impl DpConfig {
    /// Sets the table size limit.
    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = Some(cells);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_table_cells == Some(0) {
            return Err(KnapsackError::InvalidConfig(
                "max_table_cells must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        let config = DpConfig::default();
        assert!(config.max_table_cells.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(DpConfig::default().with_max_table_cells(0).validate().is_err());
    }
}
