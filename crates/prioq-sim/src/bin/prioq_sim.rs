//! # prioq-sim
//!
//! Runs a traffic scenario through the priority scheduler and prints the
//! outcome.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in overload scenario, table output
//! prioq-sim
//!
//! # Scenario file, JSON report
//! prioq-sim --scenario scenarios/overload.toml --format json
//!
//! # Prometheus text of the final scheduler state
//! prioq-sim --ticks 5000 --seed 42 --format prometheus
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use prioq_core::metrics::render_prometheus;
use prioq_sim::{Scenario, Simulation};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Summary,
    Json,
    Prometheus,
}

/// Priority scheduler traffic simulator.
#[derive(Parser, Debug)]
#[command(name = "prioq-sim", about = "Simulate traffic through the prioq scheduler")]
struct Cli {
    /// Scenario TOML file. Uses the built-in overload scenario when omitted.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the number of ticks to simulate.
    #[arg(long)]
    ticks: Option<u64>,

    /// Override the random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    // ── Logging ─────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    prioq_core::init();

    // ── Scenario ────────────────────────────────────────────────
    let mut scenario = match &cli.scenario {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading scenario {}", path.display()))?;
            Scenario::from_toml_str(&text)
                .with_context(|| format!("loading scenario {}", path.display()))?
        }
        None => Scenario::default(),
    };
    if let Some(ticks) = cli.ticks {
        scenario.ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        scenario.seed = seed;
    }

    // ── Run ─────────────────────────────────────────────────────
    let report = Simulation::new(scenario)?.run();

    match cli.format {
        OutputFormat::Summary => print!("{}", report.summary()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Prometheus => print!("{}", render_prometheus(&report.scheduler)),
    }
    Ok(())
}
