//! Nearest-neighbor ferromagnetic energy on the periodic lattice

use itertools::iproduct;
use rayon::prelude::*;

use crate::lattice::Lattice;

/// Interaction energy of one cell with its 4 neighbors
///
/// E = -s(x,y) * (s(left) + s(right) + s(up) + s(down)), reading committed
/// values only. On a torus with a dimension of length 2 the opposite
/// neighbors coincide and are counted twice.
pub fn local_energy(lattice: &Lattice, x: usize, y: usize) -> i32 {
    let center = lattice.spin(x, y).current().value();
    let neighbor_sum: i32 = lattice
        .neighbors(x, y)
        .iter()
        .map(|s| s.current().value())
        .sum();
    -center * neighbor_sum
}

/// Total lattice energy: sum of local energies over all cells, halved
/// because each undirected bond is counted from both endpoints.
///
/// Only meaningful on fully committed state, i.e. strictly after
/// `commit_all` and before any staging of the next sweep takes effect.
pub fn total_energy(lattice: &Lattice) -> f64 {
    let sum: i64 = iproduct!(0..lattice.height(), 0..lattice.width())
        .map(|(y, x)| local_energy(lattice, x, y) as i64)
        .sum();
    sum as f64 / 2.0
}

/// Row-parallel total energy, identical to `total_energy`
pub fn parallel_total_energy(lattice: &Lattice) -> f64 {
    let sum: i64 = (0..lattice.height())
        .into_par_iter()
        .map(|y| {
            (0..lattice.width())
                .map(|x| local_energy(lattice, x, y) as i64)
                .sum::<i64>()
        })
        .sum();
    sum as f64 / 2.0
}
