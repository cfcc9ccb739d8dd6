use rand::Rng;

use crate::spin::{Orientation, Spin};

/// Periodic 2D spin lattice
///
/// A fixed width x height grid of double-buffered spins stored row-major.
/// The topology is a torus: neighbor lookup wraps modulo width (columns) and
/// height (rows), so every cell has exactly 4 neighbors.
#[derive(Debug, Clone)]
pub struct Lattice {
    width: usize,
    height: usize,
    spins: Vec<Spin>,
}

impl Lattice {
    /// Create a lattice with every spin set to `initial`
    pub fn new(width: usize, height: usize, initial: Orientation) -> Self {
        assert!(width > 0 && height > 0, "lattice dimensions must be nonzero");
        Self {
            width,
            height,
            spins: vec![Spin::new(initial); width * height],
        }
    }

    /// Create a lattice with independently random spin orientations
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        assert!(width > 0 && height > 0, "lattice dimensions must be nonzero");
        let spins = (0..width * height)
            .map(|_| {
                Spin::new(if rng.gen_bool(0.5) {
                    Orientation::Up
                } else {
                    Orientation::Down
                })
            })
            .collect();
        Self {
            width,
            height,
            spins,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) out of bounds for {}x{} lattice",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn spin(&self, x: usize, y: usize) -> &Spin {
        &self.spins[self.index(x, y)]
    }

    pub fn spin_mut(&mut self, x: usize, y: usize) -> &mut Spin {
        let idx = self.index(x, y);
        &mut self.spins[idx]
    }

    /// The left/right/up/down neighbors of (x, y) under periodic wraparound
    pub fn neighbors(&self, x: usize, y: usize) -> [&Spin; 4] {
        let left = (x + self.width - 1) % self.width;
        let right = (x + 1) % self.width;
        let up = (y + self.height - 1) % self.height;
        let down = (y + 1) % self.height;
        [
            self.spin(left, y),
            self.spin(right, y),
            self.spin(x, up),
            self.spin(x, down),
        ]
    }

    /// Visit every cell exactly once in row-major order
    pub fn for_each<F: FnMut(usize, usize, &Spin)>(&self, mut f: F) {
        for y in 0..self.height {
            for x in 0..self.width {
                f(x, y, self.spin(x, y));
            }
        }
    }

    /// Commit every spin's staged value
    ///
    /// Must be called only after every cell has been staged for the current
    /// sweep; no cell may commit mid-sweep.
    pub fn commit_all(&mut self) {
        for spin in &mut self.spins {
            spin.commit();
        }
    }

    /// Committed orientation of every cell, row-major
    pub fn snapshot(&self) -> Vec<Orientation> {
        self.spins.iter().map(|s| s.current()).collect()
    }

    /// Raw magnetization: the sum of all committed spin values
    pub fn magnetization(&self) -> i64 {
        self.spins.iter().map(|s| s.current().value() as i64).sum()
    }

    /// Magnetization per cell, in [-1, 1]
    pub fn magnetization_per_site(&self) -> f64 {
        self.magnetization() as f64 / self.len() as f64
    }
}
