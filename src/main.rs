use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use torus_snake::game::GameConfig;
use torus_snake::input::{Autopilot, InputSource, ScriptedInput};
use torus_snake::session::{IntervalTicker, LogSink, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Headless snake simulation on a wrap-around grid")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Simulation ticks per second
    #[arg(long)]
    tps: Option<u32>,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks (default: run until Ctrl+C)
    #[arg(long)]
    ticks: Option<u64>,

    /// Who steers the snake
    #[arg(long, default_value = "autopilot")]
    input: InputMode,

    /// Log filter, e.g. "info" or "torus_snake=trace" (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,
}

#[derive(Clone, ValueEnum)]
enum InputMode {
    /// Greedy bot that chases the food
    Autopilot,
    /// No input; the snake keeps its heading
    Idle,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref())?;

    let config = build_config(&cli)?;

    match cli.input {
        InputMode::Autopilot => run_session(config, Autopilot::new(), cli.ticks).await,
        InputMode::Idle => run_session(config, ScriptedInput::default(), cli.ticks).await,
    }
}

fn init_tracing(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives).context("Invalid log filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }
    if let Some(tps) = cli.tps {
        config.ticks_per_second = tps;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn run_session<I: InputSource>(
    config: GameConfig,
    input: I,
    ticks: Option<u64>,
) -> Result<()> {
    let ticker = IntervalTicker::new(config.tick_interval());
    let mut session = Session::new(config, ticker, input, LogSink);
    session.run(ticks).await?;
    Ok(())
}
