use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::spin::Orientation;

/// Configuration for an annealing run
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnnealConfig {
    /// Lattice dimensions and initial orientation
    pub lattice: LatticeConfig,
    /// Triangular temperature ramp parameters
    pub schedule: ScheduleConfig,
    /// Heat-bath acceptance parameters
    #[serde(default)]
    pub acceptance: AcceptanceConfig,
    /// Progress reporting settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lattice setup configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LatticeConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Initial orientation of every cell
    #[serde(default)]
    pub initial: InitialSpins,
}

/// Initial spin configuration options
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InitialSpins {
    AllUp,
    #[default]
    AllDown,
    /// Independently random per cell, drawn from the run's RNG seed
    Random,
}

impl InitialSpins {
    /// Uniform orientation, if this configuration is uniform
    pub fn uniform(self) -> Option<Orientation> {
        match self {
            InitialSpins::AllUp => Some(Orientation::Up),
            InitialSpins::AllDown => Some(Orientation::Down),
            InitialSpins::Random => None,
        }
    }
}

/// Temperature ramp configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduleConfig {
    /// Starting (and terminating) temperature
    pub t_start: f64,
    /// Ramp height: the peak is t_start + t_delta
    pub t_delta: f64,
    /// Temperature moved per sweep; must be a positive multiple of 0.1,
    /// the schedule's rounding precision
    #[serde(default = "default_t_step")]
    pub t_step: f64,
}

/// Heat-bath acceptance configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AcceptanceConfig {
    /// Boltzmann-like scale factor in the acceptance exponent
    #[serde(default = "default_k")]
    pub k: f64,
    /// RNG seed; omitted means seeded from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Progress reporting configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Log every N sweeps
    #[serde(default = "default_log_interval")]
    pub log_interval: u64,
}

fn default_t_step() -> f64 {
    1.0
}
fn default_k() -> f64 {
    0.005
}
fn default_log_interval() -> u64 {
    100
}

impl Default for AcceptanceConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_interval: default_log_interval(),
        }
    }
}

impl Default for AnnealConfig {
    /// Reference parameters: 50x50 all-down lattice, ramp 173 -> 1173 -> 173
    /// in unit steps, k = 0.005
    fn default() -> Self {
        Self {
            lattice: LatticeConfig {
                width: 50,
                height: 50,
                initial: InitialSpins::AllDown,
            },
            schedule: ScheduleConfig {
                t_start: 173.0,
                t_delta: 1000.0,
                t_step: default_t_step(),
            },
            acceptance: AcceptanceConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AnnealConfig {
    /// Load configuration from YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: AnnealConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.lattice.width == 0 || self.lattice.height == 0 {
            return Err("Lattice dimensions must be positive".to_string());
        }
        if self.schedule.t_start <= 0.0 {
            return Err("t_start must be positive".to_string());
        }
        if self.schedule.t_delta <= 0.0 {
            return Err("t_delta must be positive".to_string());
        }
        if !crate::schedule::step_on_decimal_grid(self.schedule.t_step) {
            // The scheduler rounds to one decimal after every step; a step
            // off that grid would stall the ramp.
            return Err("t_step must be a positive multiple of 0.1".to_string());
        }
        if self.acceptance.k <= 0.0 {
            return Err("Scale factor k must be positive".to_string());
        }
        if self.output.log_interval == 0 {
            return Err("Log interval must be positive".to_string());
        }
        Ok(())
    }
}
