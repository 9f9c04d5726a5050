use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest grid edge accepted by [`GameConfig::validate`]
pub const MIN_GRID_SIZE: usize = 5;

/// Largest grid edge accepted; keeps coordinates and terminal sizes well inside `u16`
pub const MAX_GRID_SIZE: usize = 1_000;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Score awarded per food eaten
    pub food_value: u32,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
    /// Milliseconds between rendered frames (arcade only)
    pub render_interval_ms: u64,
    /// Random draws made before food placement falls back to scanning free cells.
    /// `None` means four times the cell count.
    pub max_food_attempts: Option<usize>,
    /// Seed for food placement; entropy when absent
    pub seed: Option<u64>,
    /// Key name to action overrides, e.g. `"k": "up"`
    pub bindings: BTreeMap<String, String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            food_value: 10,
            tick_interval_ms: 100,
            render_interval_ms: 16,
            max_food_attempts: None,
            seed: None,
            bindings: BTreeMap::new(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// The 40x20 board of the console variant
    pub fn classic() -> Self {
        Self::new(40, 20)
    }

    /// The 50x35 board of the arcade variant
    pub fn arcade() -> Self {
        Self::new(50, 35)
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise start from `fallback`
    pub fn load_or(path: Option<&Path>, fallback: Self) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(fallback),
        }
    }

    /// Check that the values describe a playable board
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < MIN_GRID_SIZE || self.grid_height < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                min: MIN_GRID_SIZE,
            });
        }

        if self.grid_width > MAX_GRID_SIZE || self.grid_height > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: MAX_GRID_SIZE,
            });
        }

        // The seeded body trails left from the centre column
        if self.initial_snake_length == 0 || self.initial_snake_length > self.grid_width / 2 + 1 {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_snake_length,
                width: self.grid_width,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("tick_interval_ms"));
        }
        if self.render_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("render_interval_ms"));
        }

        Ok(())
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }

    /// Random placement attempts before the free-cell scan takes over
    pub fn food_attempts(&self) -> usize {
        self.max_food_attempts.unwrap_or(self.cell_count() * 4)
    }
}
