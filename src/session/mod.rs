//! Tick-driven session runner
//!
//! Wires the engine to its collaborators: a `TickSource` for pacing, an
//! `InputSource` for direction requests and a `FrameSink` for presentation.
//! Each tick drains input, steps the engine, then presents the frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use torus_snake::game::GameConfig;
//! use torus_snake::input::Autopilot;
//! use torus_snake::session::{IntervalTicker, LogSink, Session};
//!
//! let config = GameConfig::default();
//! let ticker = IntervalTicker::new(config.tick_interval());
//! let mut session = Session::new(config, ticker, Autopilot::new(), LogSink);
//! let metrics = session.run(Some(500)).await?;
//! ```

pub mod sink;
pub mod ticker;

use anyhow::{Context, Result};
use tracing::info;

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::InputSource;
use crate::metrics::GameMetrics;

pub use sink::{FrameSink, LogSink};
pub use ticker::{ImmediateTicker, IntervalTicker, TickSource};

pub struct Session<T, I, S> {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    ticker: T,
    input: I,
    sink: S,
}

impl<T, I, S> Session<T, I, S>
where
    T: TickSource,
    I: InputSource,
    S: FrameSink,
{
    pub fn new(config: GameConfig, ticker: T, input: I, sink: S) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            ticker,
            input,
            sink,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run until `max_ticks` have elapsed, or until Ctrl+C when unbounded
    pub async fn run(&mut self, max_ticks: Option<u64>) -> Result<&GameMetrics> {
        info!(
            width = self.state.grid.width(),
            height = self.state.grid.height(),
            max_ticks,
            "session started"
        );

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            if max_ticks.is_some_and(|max| self.state.ticks >= max) {
                break;
            }

            let ticked = tokio::select! {
                _ = self.ticker.next_tick() => true,
                _ = &mut ctrl_c => false,
            };
            if !ticked {
                info!("interrupted");
                break;
            }

            self.tick()?;
        }

        self.metrics.update();
        info!(
            ticks = self.metrics.ticks,
            food_eaten = self.metrics.food_eaten,
            restarts = self.metrics.restarts,
            longest = self.metrics.longest,
            elapsed = %self.metrics.format_time(),
            "session finished"
        );
        Ok(&self.metrics)
    }

    /// One full tick: drain input, step, present
    pub fn tick(&mut self) -> Result<()> {
        let inputs = self.input.drain(&self.state);
        let result = self.engine.step(&mut self.state, inputs);
        self.metrics.record(&result, &self.state);

        self.sink
            .present(&self.state, &result)
            .with_context(|| format!("Failed to present tick {}", result.tick))
    }
}
