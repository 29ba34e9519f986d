// grid.rs - Fixed-size board of alive/dead cells with hard edges

use std::hash::{Hash, Hasher};

/// Offsets of the 8 king-move neighbours, clockwise from up-left.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0,  1),
    ( 1,  1), ( 1, 0), ( 1, -1),
    ( 0, -1),
];

/// Row-major boolean matrix. Dimensions are fixed at construction.
///
/// Indexing outside `[0, rows) x [0, cols)` is a programming error and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid must be at least 1x1, got {rows}x{cols}");
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Builds a grid with the listed `(row, col)` cells alive.
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, true);
        }
        grid
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside the {}x{} board", self.rows, self.cols
        );
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Deep copy of `other` into `self`. Both grids must have the same dimensions.
    pub fn copy_from(&mut self, other: &Grid) {
        assert_eq!(
            self.dimensions(),
            other.dimensions(),
            "cannot copy between grids of different dimensions"
        );
        self.cells.copy_from_slice(&other.cells);
    }

    /// Live cells among the 8 neighbours of `(row, col)`.
    /// Neighbours past the board edge count as dead; there is no wraparound.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        debug_assert!(self.contains(row, col));
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOURS {
            let Some(nr) = row.checked_add_signed(dr) else { continue };
            let Some(nc) = col.checked_add_signed(dc) else { continue };
            if nr < self.rows && nc < self.cols && self.cells[nr * self.cols + nc] {
                count += 1;
            }
        }
        count
    }

    /// One row as a slice, used by the row-task stepper.
    pub fn row(&self, row: usize) -> &[bool] {
        assert!(row < self.rows, "row {row} is outside the {}-row board", self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [bool] {
        assert!(row < self.rows, "row {row} is outside the {}-row board", self.rows);
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// `(row, col)` of every live cell in row-major order.
    pub fn alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    /// Hash of the cell contents, used for repeat detection.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        self.cells.hash(state);
    }
}
