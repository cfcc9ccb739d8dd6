//! Ising annealing command-line interface
//!
//! Runs a heat-bath annealing simulation from a YAML configuration (or the
//! built-in reference parameters) and logs the (temperature, energy) series.

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tracing::info;

use ising_anneal::output::{setup_output, write_series};
use ising_anneal::{AnnealConfig, Annealer};

/// 2D Ising heat-bath annealing simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file (built-in defaults if omitted)
    #[arg(short, long)]
    config_file: Option<String>,

    /// Override lattice width
    #[arg(long)]
    width: Option<usize>,

    /// Override lattice height
    #[arg(long)]
    height: Option<usize>,

    /// Override starting temperature
    #[arg(long)]
    t_start: Option<f64>,

    /// Override ramp height (peak is t_start + t_delta)
    #[arg(long)]
    t_delta: Option<f64>,

    /// Override temperature step per sweep
    #[arg(long)]
    t_step: Option<f64>,

    /// Override the Boltzmann-like scale factor
    #[arg(long)]
    k: Option<f64>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Log progress every N sweeps
    #[arg(long)]
    log_interval: Option<u64>,

    /// Write logs to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Write the (temperature, energy) series to a CSV file after the run
    #[arg(long)]
    series_out: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    setup_output(args.output.as_ref());

    let mut config = match &args.config_file {
        Some(path) => {
            info!("Reading configuration from: {}", path);
            AnnealConfig::from_file(path).map_err(|e| eyre!("{}", e))?
        }
        None => AnnealConfig::default(),
    };
    apply_overrides(&mut config, &args);
    config.validate().map_err(|e| eyre!(e))?;

    info!("Simulation parameters:");
    info!(
        "  Lattice: {}x{} ({} spins), initial {:?}",
        config.lattice.width,
        config.lattice.height,
        config.lattice.width * config.lattice.height,
        config.lattice.initial
    );
    info!(
        "  Schedule: {} -> {} -> {} in steps of {}",
        config.schedule.t_start,
        config.schedule.t_start + config.schedule.t_delta,
        config.schedule.t_start,
        config.schedule.t_step
    );
    info!("  Scale factor k: {}", config.acceptance.k);
    match config.acceptance.seed {
        Some(seed) => info!("  Seed: {}", seed),
        None => info!("  Seed: from entropy"),
    }

    let log_interval = config.output.log_interval;
    let mut annealer = Annealer::from_config(&config).map_err(|e| eyre!(e))?;

    annealer.run_to_end(|report, lattice| {
        if report.sweep == 1 || report.sweep % log_interval == 0 {
            info!(
                "Sweep {:>6} [{:?}]: T = {:>8.1}, E = {:>10.1}, m = {:+.4}",
                report.sweep,
                report.phase,
                report.temperature,
                report.energy,
                lattice.magnetization_per_site()
            );
        }
    });

    info!("Annealing finished after {} sweeps", annealer.sweeps());
    if let Some(point) = annealer.series().last() {
        info!(
            "Final state: T = {:.1}, E = {:.1}, m = {:+.4}",
            point.temperature,
            point.energy,
            annealer.lattice().magnetization_per_site()
        );
    }

    if let Some(path) = &args.series_out {
        write_series(path, annealer.series())?;
        info!("Time series written to: {}", path);
    }

    Ok(())
}

fn apply_overrides(config: &mut AnnealConfig, args: &Args) {
    if let Some(width) = args.width {
        config.lattice.width = width;
    }
    if let Some(height) = args.height {
        config.lattice.height = height;
    }
    if let Some(t_start) = args.t_start {
        config.schedule.t_start = t_start;
    }
    if let Some(t_delta) = args.t_delta {
        config.schedule.t_delta = t_delta;
    }
    if let Some(t_step) = args.t_step {
        config.schedule.t_step = t_step;
    }
    if let Some(k) = args.k {
        config.acceptance.k = k;
    }
    if let Some(seed) = args.seed {
        config.acceptance.seed = Some(seed);
    }
    if let Some(interval) = args.log_interval {
        config.output.log_interval = interval;
    }
}
