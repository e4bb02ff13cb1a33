use serde::{Deserialize, Serialize};

/// Smallest playable grid side; anything under this cannot hold the starting
/// snake with room to move
pub const MIN_GRID_SIDE: usize = 8;

/// Configuration for the game rules
///
/// All values are documented defaults rather than hard requirements; the CLI
/// exposes each of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Length of the snake after a reset
    pub initial_snake_length: usize,

    // Target obstacle counts, replenished after every consumption
    /// Apples that grow the snake by one segment
    pub good_apple_count: usize,
    /// Apples that shrink the snake by one segment
    pub bad_apple_count: usize,
    /// Stones that end the game on contact
    pub stone_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        // 4:3 field, comfortable at 20px cells on a 640x480 window
        Self {
            grid_width: 32,
            grid_height: 24,
            initial_snake_length: 3,
            good_apple_count: 1,
            bad_apple_count: 2,
            stone_count: 3,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size. Sides below
    /// [`MIN_GRID_SIDE`] are raised to it.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width.max(MIN_GRID_SIDE),
            grid_height: height.max(MIN_GRID_SIDE),
            ..Default::default()
        }
    }

    /// Small grid used by tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }
}
