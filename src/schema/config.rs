//! Configuration types for Game of Life runs.

use serde::{Deserialize, Serialize};

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid side length in cells.
    pub size: usize,
    /// Halt after this many generations. `None` runs until halted externally.
    #[serde(default)]
    pub max_generations: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: 100,
            max_generations: None,
        }
    }
}

impl SimulationConfig {
    /// Get total cell count (size * size).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.size * self.size
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize);
        }
        if self.size.checked_mul(self.size).is_none() {
            return Err(ConfigError::TooLarge { size: self.size });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid size must be non-zero")]
    InvalidSize,
    #[error("Grid size {size} overflows the cell count")]
    TooLarge { size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size(), 10_000);
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = SimulationConfig {
            size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSize)));
    }

    #[test]
    fn test_overflowing_size_rejected() {
        let config = SimulationConfig {
            size: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_generation_limit_optional_in_json() {
        let config: SimulationConfig = serde_json::from_str(r#"{"size": 32}"#).unwrap();
        assert_eq!(config.size, 32);
        assert_eq!(config.max_generations, None);

        let config: SimulationConfig =
            serde_json::from_str(r#"{"size": 8, "max_generations": 50}"#).unwrap();
        assert_eq!(config.max_generations, Some(50));
    }
}
