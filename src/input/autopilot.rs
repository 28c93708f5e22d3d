use crate::game::{Cell, Direction, GameState};

use super::InputSource;

/// Greedy bot: turns toward the food along the shortest wrapped path,
/// skipping moves that would bite the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    pub fn choose(&self, state: &GameState) -> Option<Direction> {
        let snake = &state.snake;
        let heading = snake.heading();
        let food = state.food.position();

        let mut best: Option<(Direction, i32)> = None;
        for dir in Direction::ALL {
            if dir.is_opposite(heading) {
                continue;
            }
            let next = state.grid.wrap(snake.head(), dir);
            if !Self::is_safe(state, next) {
                continue;
            }

            let (dx, dy) = state.grid.offset(next, food);
            let distance = dx.abs() + dy.abs();
            // Ties keep the current heading
            let better = match best {
                None => true,
                Some((_, d)) => distance < d || (distance == d && dir == heading),
            };
            if better {
                best = Some((dir, distance));
            }
        }

        best.map(|(dir, _)| dir)
    }

    fn is_safe(state: &GameState, next: Cell) -> bool {
        let body = state.snake.body();
        // The tail moves out of the way unless the snake is still growing
        let blocking = if body.len() >= state.snake.target_length() {
            &body[..body.len() - 1]
        } else {
            body
        };
        !blocking.contains(&next)
    }
}

impl InputSource for Autopilot {
    fn drain(&mut self, state: &GameState) -> Vec<Direction> {
        match self.choose(state) {
            Some(dir) if dir != state.snake.heading() => vec![dir],
            _ => Vec::new(),
        }
    }
}
