use super::food::Food;
use super::grid::GridSpace;
use super::snake::Snake;

/// Complete simulation state, owned by whoever drives the ticks
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid: GridSpace,
    /// Ticks since the session started, across resets
    pub ticks: u64,
}

impl GameState {
    pub fn new(snake: Snake, food: Food, grid: GridSpace) -> Self {
        Self {
            snake,
            food,
            grid,
            ticks: 0,
        }
    }

    pub fn food_overlaps_snake(&self) -> bool {
        self.snake.occupies(self.food.position())
    }
}
