//! Popchart - Entry Point
//!
//! Fetches the population dataset once, then animates the year from the
//! configured start to end, drawing a horizontal bar chart per year.
//! `--headless` prints JSON frames instead of drawing.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use popchart::app::{run_headless, run_tui};
use popchart::core::config::ChartConfig;
use popchart::core::error::Result;
use popchart::data::PopulationClient;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Animated population bar chart
#[derive(Parser, Debug)]
#[command(name = "popchart")]
#[command(about = "Animate per-country population from a local dataset API")]
struct Args {
    /// Dataset endpoint (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for deterministic country colors
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between year advances
    #[arg(long)]
    tick_ms: Option<u64>,

    /// First year shown
    #[arg(long)]
    start_year: Option<i32>,

    /// Last year shown
    #[arg(long)]
    end_year: Option<i32>,

    /// Print JSON frames to stdout instead of drawing the terminal UI
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Write logs here (defaults to popchart.log in terminal UI mode)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Defaults, then the config file, then flags
    fn resolve_config(&self) -> Result<ChartConfig> {
        let mut config = match &self.config {
            Some(path) => ChartConfig::load(path)?,
            None => ChartConfig::default(),
        };

        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if let Some(start) = self.start_year {
            config.start_year = start;
        }
        if let Some(end) = self.end_year {
            config.end_year = end;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(args: &Args) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("popchart=info"));

    let log_file = match (&args.log_file, args.headless) {
        (Some(path), _) => Some(path.clone()),
        (None, false) => Some(PathBuf::from("popchart.log")),
        (None, true) => None,
    };

    match log_file {
        Some(path) => {
            let file = File::create(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config = args.resolve_config()?;
    tracing::info!(
        "Popchart starting: {} ({}-{}, every {}ms)",
        config.api_url,
        config.start_year,
        config.end_year,
        config.tick_ms
    );

    let rt = Runtime::new()?;
    let client = PopulationClient::from_config(&config)?;

    if args.headless {
        let mut stdout = std::io::stdout().lock();
        let shutdown = async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };
        rt.block_on(run_headless(&config, client, &mut stdout, shutdown))?;
    } else {
        rt.block_on(run_tui(&config, client))?;
    }

    tracing::info!("Popchart exiting");
    Ok(())
}
