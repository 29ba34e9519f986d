// history.rs - Detects a run that has settled into a still life or a short cycle

use crate::grid::Grid;

/// Number of recent generations remembered.
pub const HISTORY_LEN: usize = 10;

/// Circular buffer of recent grid fingerprints.
#[derive(Clone, Debug, Default)]
pub struct History {
    hashes:    [u64; HISTORY_LEN],
    count:     usize,
    repeating: bool,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid`. Returns true the first time a repeat is seen.
    pub fn record(&mut self, grid: &Grid) -> bool {
        let hash = grid.fingerprint();
        let filled = self.count.min(HISTORY_LEN);

        if self.hashes[..filled].contains(&hash) {
            let first = !self.repeating;
            self.repeating = true;
            return first;
        }

        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    /// Whether any recorded generation matched an earlier one.
    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
