// patterns.rs - Seed patterns for a new board

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::grid::Grid;

/// Default density of the random seed.
pub const RANDOM_DENSITY: f64 = 0.25;

/// Glider heading down-right, as `(row, col)`.
pub const GLIDER: &[(usize, usize)] = &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];

/// Board with the glider placed near the top-left corner.
/// Cells that do not fit on a very small board are dropped.
pub fn glider(rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for &(row, col) in GLIDER {
        if grid.contains(row, col) {
            grid.set(row, col, true);
        }
    }
    grid
}

/// Board where every cell is independently alive with probability `density`.
pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            grid.set(row, col, rng.gen_bool(density));
        }
    }
    grid
}

/// Seed taken from the wall clock at startup.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
