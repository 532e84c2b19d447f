use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::state::Cell;

/// Configuration for the simulation
///
/// Grid dimensions are in cells; `cell_size` is the pixel footprint of one
/// cell on the notional 600px board the grid is derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pixel size of one grid cell
    pub cell_size: usize,
    /// Number of cells per row
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
    /// Move interval at score 0
    pub base_interval: Duration,
    /// Floor the move interval never drops below
    pub min_interval: Duration,
    /// Cell the snake starts on
    pub spawn: Cell,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            columns: 30,
            rows: 30,
            base_interval: Duration::from_millis(200),
            min_interval: Duration::from_millis(100),
            spawn: Cell::new(10, 10),
        }
    }
}

impl GameConfig {
    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            columns: 10,
            rows: 10,
            spawn: Cell::new(5, 5),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("Cell size must be positive".to_string());
        }
        if !(10..=100).contains(&self.columns) || !(10..=100).contains(&self.rows) {
            return Err("Grid must be between 10 and 100 cells per side".to_string());
        }
        if self.min_interval.is_zero() {
            return Err("Minimum move interval must be positive".to_string());
        }
        if self.base_interval < self.min_interval {
            return Err("Base move interval must be at least the minimum".to_string());
        }
        if self.spawn.x >= self.columns || self.spawn.y >= self.rows {
            return Err("Spawn cell must lie inside the grid".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.columns, 30);
        assert_eq!(config.rows, 30);
        assert_eq!(config.base_interval, Duration::from_millis(200));
        assert_eq!(config.min_interval, Duration::from_millis(100));
        assert_eq!(config.spawn, Cell::new(10, 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_small_config_is_valid() {
        assert!(GameConfig::small().validate().is_ok());
    }

    #[test]
    fn test_rejects_spawn_outside_grid() {
        let config = GameConfig {
            spawn: Cell::new(30, 10),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_intervals() {
        let config = GameConfig {
            base_interval: Duration::from_millis(50),
            min_interval: Duration::from_millis(100),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            min_interval: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_degenerate_grid() {
        let config = GameConfig {
            columns: 5,
            rows: 30,
            spawn: Cell::new(1, 1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
