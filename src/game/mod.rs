//! Core simulation for Snake on a wrap-around grid
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Everything here is driven one tick at a time by `GameEngine::step`.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepResult, TickEvent};
pub use food::Food;
pub use grid::{Cell, GridSpace};
pub use snake::Snake;
pub use state::GameState;
