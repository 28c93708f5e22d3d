//! Sources of direction requests for the session runner

pub mod autopilot;

use std::collections::VecDeque;

use crate::game::{Direction, GameState};

pub use autopilot::Autopilot;

/// Anything that produces direction requests between ticks
pub trait InputSource {
    /// Requests that arrived since the previous tick, oldest first
    fn drain(&mut self, state: &GameState) -> Vec<Direction>;
}

/// Replays a fixed list of per-tick requests, then goes quiet
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    ticks: VecDeque<Vec<Direction>>,
}

impl ScriptedInput {
    pub fn new<I>(ticks: I) -> Self
    where
        I: IntoIterator<Item = Vec<Direction>>,
    {
        Self {
            ticks: ticks.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.ticks.len()
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self, _state: &GameState) -> Vec<Direction> {
        self.ticks.pop_front().unwrap_or_default()
    }
}
