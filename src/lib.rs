//! Torus Snake - a deterministic snake simulation on a wrap-around grid
//!
//! This library provides:
//! - Core simulation (game module): grid, snake, food and the tick engine
//! - Input sources (input module): scripted requests and a greedy autopilot
//! - Session runner (session module): pacing, input draining and frame output
//! - Per-session statistics (metrics module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod session;
