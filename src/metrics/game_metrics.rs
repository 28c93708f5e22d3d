use std::time::{Duration, Instant};

use crate::game::{GameState, StepResult, TickEvent};

/// Running statistics for one session
#[derive(Debug)]
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub food_eaten: u32,
    pub restarts: u32,
    pub longest: usize,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            food_eaten: 0,
            restarts: 0,
            longest: 1,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold one tick into the totals
    pub fn record(&mut self, result: &StepResult, state: &GameState) {
        self.ticks = result.tick;
        match result.event {
            TickEvent::AteFood => self.food_eaten += 1,
            TickEvent::Collided => self.restarts += 1,
            TickEvent::Moved => {}
        }
        self.longest = self.longest.max(state.snake.len());
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine};

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_record_events() {
        let mut engine = GameEngine::new(GameConfig::small().with_seed(1));
        let mut state = engine.reset();
        let mut metrics = GameMetrics::new();

        metrics.record(
            &StepResult {
                event: TickEvent::AteFood,
                tick: 1,
            },
            &state,
        );
        metrics.record(
            &StepResult {
                event: TickEvent::Collided,
                tick: 2,
            },
            &state,
        );
        metrics.record(
            &StepResult {
                event: TickEvent::Moved,
                tick: 3,
            },
            &state,
        );

        assert_eq!(metrics.ticks, 3);
        assert_eq!(metrics.food_eaten, 1);
        assert_eq!(metrics.restarts, 1);

        state.snake.grow();
        state.snake.grow();
        let result = engine.step(&mut state, std::iter::empty());
        metrics.record(&result, &state);
        let result = engine.step(&mut state, std::iter::empty());
        metrics.record(&result, &state);
        assert!(metrics.longest >= 2);
    }

    #[test]
    fn test_update_tracks_elapsed() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 20);
    }
}
