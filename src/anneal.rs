use crate::config::AnnealConfig;
use crate::lattice::Lattice;
use crate::schedule::{AnnealingScheduler, Phase};
use crate::series::EnergyTimeSeries;
use crate::sweep::SweepEngine;

/// Read-only view of one completed sweep
#[derive(Debug, Clone, Copy)]
pub struct SweepReport {
    /// 1-based sweep counter
    pub sweep: u64,
    /// Temperature the sweep ran at
    pub temperature: f64,
    /// Post-commit total lattice energy
    pub energy: f64,
    /// Ramp phase the sweep ran in
    pub phase: Phase,
}

/// Annealing run driver
///
/// Owns the lattice, sweep engine, scheduler and time series, and exposes
/// per-sweep reports to external observers. Observers never mutate engine
/// state; they read reports and, if they want to diff redraws, pull
/// `lattice().snapshot()`.
#[derive(Debug)]
pub struct Annealer {
    lattice: Lattice,
    engine: SweepEngine,
    scheduler: AnnealingScheduler,
    series: EnergyTimeSeries,
}

impl Annealer {
    pub fn from_config(config: &AnnealConfig) -> Result<Self, String> {
        config.validate()?;

        let mut engine = match config.acceptance.seed {
            Some(seed) => SweepEngine::new(config.acceptance.k, seed),
            None => SweepEngine::from_entropy(config.acceptance.k),
        };

        let lattice = match config.lattice.initial.uniform() {
            Some(orientation) => {
                Lattice::new(config.lattice.width, config.lattice.height, orientation)
            }
            // Random fill draws from the engine's stream, keeping the whole
            // run reproducible from a single seed
            None => Lattice::random(
                config.lattice.width,
                config.lattice.height,
                engine.rng_mut(),
            ),
        };

        let scheduler = AnnealingScheduler::new(
            config.schedule.t_start,
            config.schedule.t_delta,
            config.schedule.t_step,
        );

        Ok(Self {
            lattice,
            engine,
            scheduler,
            series: EnergyTimeSeries::new(),
        })
    }

    /// Run one sweep at the current temperature, record it, and advance the
    /// schedule. Returns `None` once the triangle is complete.
    pub fn tick(&mut self) -> Option<SweepReport> {
        if self.scheduler.is_finished() {
            return None;
        }

        let temperature = self.scheduler.temperature();
        let phase = self.scheduler.phase();
        let energy = self.engine.sweep(&mut self.lattice, temperature);
        self.series.push(temperature, energy);
        self.scheduler.advance();

        Some(SweepReport {
            sweep: self.engine.sweeps,
            temperature,
            energy,
            phase,
        })
    }

    /// Drive the run to completion, handing every report and the committed
    /// lattice to `observe`.
    pub fn run_to_end<F: FnMut(SweepReport, &Lattice)>(&mut self, mut observe: F) {
        while let Some(report) = self.tick() {
            observe(report, &self.lattice);
        }
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn series(&self) -> &EnergyTimeSeries {
        &self.series
    }

    pub fn temperature(&self) -> f64 {
        self.scheduler.temperature()
    }

    pub fn phase(&self) -> Phase {
        self.scheduler.phase()
    }

    /// Completed sweep count
    pub fn sweeps(&self) -> u64 {
        self.engine.sweeps
    }

    pub fn is_finished(&self) -> bool {
        self.scheduler.is_finished()
    }
}
