//! 2D Ising ferromagnet simulation with heat-bath dynamics
//!
//! The lattice is a periodic (toroidal) grid of double-buffered spins. Each
//! sweep decides a flip/stay outcome for every cell from a frozen snapshot
//! of the committed state, then commits all outcomes at once; a triangular
//! annealing schedule ramps the temperature up and back down, producing one
//! (temperature, energy) observation per sweep.

pub mod anneal;
pub mod config;
pub mod energy;
pub mod lattice;
pub mod output;
pub mod schedule;
pub mod series;
pub mod spin;
pub mod sweep;

pub use anneal::{Annealer, SweepReport};
pub use config::AnnealConfig;
pub use lattice::Lattice;
pub use schedule::{AnnealingScheduler, Phase};
pub use series::{EnergyPoint, EnergyTimeSeries};
pub use spin::{Orientation, Spin};
pub use sweep::SweepEngine;
