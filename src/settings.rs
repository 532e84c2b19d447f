//! Player-facing settings surface
//!
//! Settings are pushed into the simulation (as a derived [`GameConfig`])
//! and into the renderer (theme and grid flags); the core never reads them
//! directly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::game::{Cell, GameConfig};
use crate::render::Theme;

/// Side of the square board, in pixels; grid dimensions derive from it
pub const BOARD_PX: usize = 600;

/// Move interval at 1x speed
pub const BASE_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    /// Speed multiplier, 1 (slowest) to 5 (fastest)
    pub speed: u32,
    /// Pixel size of one grid cell, 15 to 30
    pub cell_size: usize,
    pub theme: Theme,
    /// Draw dots on empty cells
    pub show_grid: bool,
    /// Ring the terminal bell when food is eaten
    pub sound_enabled: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            speed: 1,
            cell_size: 20,
            theme: Theme::Dark,
            show_grid: true,
            sound_enabled: false,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.speed) {
            return Err("Speed must be between 1x and 5x".to_string());
        }
        if !(15..=30).contains(&self.cell_size) {
            return Err("Cell size must be between 15 and 30 pixels".to_string());
        }
        Ok(())
    }

    /// Derive the simulation config
    ///
    /// Speed divides the base interval; cell size fixes the grid
    /// resolution. The minimum interval scales with the base so higher
    /// speeds keep headroom for score scaling.
    pub fn to_config(&self) -> GameConfig {
        let base_interval = BASE_INTERVAL / self.speed;
        GameConfig {
            cell_size: self.cell_size,
            columns: BOARD_PX / self.cell_size,
            rows: BOARD_PX / self.cell_size,
            base_interval,
            min_interval: base_interval / 2,
            spawn: Cell::new(10, 10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GameSettings::default();
        assert_eq!(settings.speed, 1);
        assert_eq!(settings.cell_size, 20);
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.show_grid);
        assert!(!settings.sound_enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_default_config_matches_board() {
        let config = GameSettings::default().to_config();
        assert_eq!(config.columns, 30);
        assert_eq!(config.rows, 30);
        assert_eq!(config.base_interval, Duration::from_millis(200));
        assert_eq!(config.min_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_speed_divides_interval() {
        let settings = GameSettings {
            speed: 4,
            ..Default::default()
        };
        let config = settings.to_config();
        assert_eq!(config.base_interval, Duration::from_millis(50));
        assert_eq!(config.min_interval, Duration::from_millis(25));
    }

    #[test]
    fn test_cell_size_sets_grid_resolution() {
        let settings = GameSettings {
            cell_size: 30,
            ..Default::default()
        };
        assert_eq!(settings.to_config().columns, 20);

        let settings = GameSettings {
            cell_size: 15,
            ..Default::default()
        };
        assert_eq!(settings.to_config().columns, 40);
    }

    #[test]
    fn test_validation_bounds() {
        let settings = GameSettings {
            speed: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            speed: 6,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            cell_size: 14,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            cell_size: 31,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_every_valid_setting_yields_valid_config() {
        for speed in 1..=5 {
            for cell_size in 15..=30 {
                let settings = GameSettings {
                    speed,
                    cell_size,
                    ..Default::default()
                };
                assert!(
                    settings.to_config().validate().is_ok(),
                    "speed {} cell size {}",
                    speed,
                    cell_size
                );
            }
        }
    }
}
