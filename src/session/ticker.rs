use std::future::Future;
use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior, interval};

/// External clock that paces the simulation
pub trait TickSource {
    /// Resolves when the next tick is due
    fn next_tick(&mut self) -> impl Future<Output = ()> + Send;
}

/// Fixed-rate ticker backed by a tokio interval
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        // A slow frame should not trigger a burst of catch-up ticks
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

impl TickSource for IntervalTicker {
    async fn next_tick(&mut self) {
        self.interval.tick().await;
    }
}

/// Ticks as fast as the runtime allows; for tests and batch runs
#[derive(Debug, Default)]
pub struct ImmediateTicker;

impl TickSource for ImmediateTicker {
    async fn next_tick(&mut self) {
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_interval_ticker_paces() {
        let mut ticker = IntervalTicker::new(Duration::from_millis(100));
        let start = Instant::now();

        // The first tick completes immediately
        ticker.next_tick().await;
        ticker.next_tick().await;
        ticker.next_tick().await;

        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_ticker_never_waits() {
        let mut ticker = ImmediateTicker;
        let start = Instant::now();

        for _ in 0..10 {
            ticker.next_tick().await;
        }

        // A paused clock only moves when something sleeps
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
