use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid, in cells
    pub grid_width: usize,
    /// Height of the game grid, in cells
    pub grid_height: usize,
    /// Simulation ticks per second
    pub ticks_per_second: u32,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_screen(640, 480, 20)
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

    /// Derive the grid from a screen size and a cell size, both in pixels
    pub fn from_screen(screen_width: usize, screen_height: usize, cell_size: usize) -> Self {
        let cell = cell_size.max(1);
        Self {
            grid_width: screen_width / cell,
            grid_height: screen_height / cell,
            ticks_per_second: 10,
            seed: None,
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(64, 48)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse config file")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.grid_width * self.grid_height >= 2,
            "grid needs room for both the snake and the food"
        );
        ensure!(
            self.grid_width <= i32::MAX as usize && self.grid_height <= i32::MAX as usize,
            "grid dimensions too large"
        );
        ensure!(self.ticks_per_second > 0, "tick rate must be positive");
        Ok(())
    }

    /// Time between two simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.ticks_per_second.max(1)))
    }
}
