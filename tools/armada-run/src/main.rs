//! armada-run: headless batch runner for the fleet battle simulation.
//!
//! Usage:
//!   armada-run --seed 7 --steps 2000 --output battle.csv
//!   armada-run --config armada.toml --summary summary.json

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use armada_sim::core::state::RunSummary;
use armada_sim::{runner, EventLog, SimConfig, SimError};

#[derive(Parser, Debug)]
#[command(name = "armada-run")]
#[command(about = "Run a two-faction fleet battle and write the replay log")]
struct Args {
    /// TOML configuration file; missing keys take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Number of steps to simulate, overrides the config file
    #[arg(long)]
    steps: Option<u64>,

    /// Number of agents, overrides the config file
    #[arg(long)]
    population: Option<usize>,

    /// Replay log path
    #[arg(long, default_value = "output.csv")]
    output: PathBuf,

    /// Write the run summary as JSON to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => {
            info!(
                survivors = summary.survivors.len(),
                output = %args.output.display(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("run failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<RunSummary, SimError> {
    let config = build_config(args)?;

    let mut log = EventLog::create(&args.output)?;
    let summary = runner::run(&config, &mut log)?;

    if let Some(path) = &args.summary {
        write_summary(path, &summary)?;
        info!(path = %path.display(), "summary written");
    }
    Ok(summary)
}

/// Config file (or defaults) with command-line overrides applied.
fn build_config(args: &Args) -> Result<SimConfig, SimError> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(steps) = args.steps {
        config.steps = steps;
    }
    if let Some(population) = args.population {
        config.population = population;
    }
    config.validate()?;
    Ok(config)
}

fn write_summary(path: &Path, summary: &RunSummary) -> Result<(), SimError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, summary).map_err(io::Error::from)?;
    Ok(())
}
