use anyhow::Result;
use tracing::{info, trace};

use crate::game::{GameState, StepResult, TickEvent};

/// Presentation collaborator, called once per tick after the simulation step
pub trait FrameSink {
    fn present(&mut self, state: &GameState, result: &StepResult) -> Result<()>;
}

/// Writes a one-line frame summary through `tracing`
#[derive(Debug, Default)]
pub struct LogSink;

impl FrameSink for LogSink {
    fn present(&mut self, state: &GameState, result: &StepResult) -> Result<()> {
        let snake = &state.snake;
        match result.event {
            TickEvent::Collided => {
                info!(tick = result.tick, "snake collided with itself, restarting")
            }
            TickEvent::AteFood => info!(
                tick = result.tick,
                target_length = snake.target_length(),
                "food eaten"
            ),
            TickEvent::Moved => {}
        }

        trace!(
            tick = result.tick,
            head = ?snake.head(),
            length = snake.len(),
            vacated = ?snake.last_vacated(),
            food = ?state.food.position(),
            "frame"
        );
        Ok(())
    }
}
