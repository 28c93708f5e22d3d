use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use super::{
    config::GameConfig,
    direction::Direction,
    food::Food,
    grid::GridSpace,
    snake::Snake,
    state::GameState,
};

/// What a tick did to the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Plain move
    Moved,
    /// Head reached the food; the snake will grow on the next tick
    AteFood,
    /// Head ran into the body and the snake was reset
    Collided,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub event: TickEvent,
    /// Tick number this result belongs to
    pub tick: u64,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration.
    ///
    /// The configuration should already have passed `GameConfig::validate`.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    /// Start a new session: snake at the center heading right, food placed
    /// off the snake
    pub fn reset(&mut self) -> GameState {
        let grid = GridSpace::new(self.config.grid_width, self.config.grid_height);
        let center = grid.center();
        let snake = Snake::new(center, Direction::Right);

        let mut food = Food::new(center);
        food.relocate(&grid, &mut self.rng, snake.body());

        debug!(?center, food = ?food.position(), "new session");
        GameState::new(snake, food, grid)
    }

    /// Execute one tick on the state's own grid. `inputs` are the direction
    /// requests buffered since the previous tick, oldest first.
    pub fn step<I>(&mut self, state: &mut GameState, inputs: I) -> StepResult
    where
        I: IntoIterator<Item = Direction>,
    {
        for direction in inputs {
            state.snake.set_pending_heading(direction);
        }

        let grid = state.grid;
        state.snake.advance(&grid);
        state.ticks += 1;

        if state.snake.self_collision() {
            debug!(
                tick = state.ticks,
                length = state.snake.len(),
                head = ?state.snake.head(),
                "self collision, resetting snake"
            );
            state.snake.reset(&mut self.rng);
            // The reset body sits on the start cell, which the food may occupy
            if state.food_overlaps_snake() {
                state.food.relocate(&grid, &mut self.rng, state.snake.body());
            }
            return StepResult {
                event: TickEvent::Collided,
                tick: state.ticks,
            };
        }

        if state.snake.head() == state.food.position() {
            state.snake.grow();
            state
                .food
                .relocate(&grid, &mut self.rng, state.snake.body());
            debug!(
                tick = state.ticks,
                target_length = state.snake.target_length(),
                food = ?state.food.position(),
                "food eaten"
            );
            return StepResult {
                event: TickEvent::AteFood,
                tick: state.ticks,
            };
        }

        StepResult {
            event: TickEvent::Moved,
            tick: state.ticks,
        }
    }
}
