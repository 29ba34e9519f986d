// stepper.rs - Generation update: read the whole current grid, then write the next one
//
// Every neighbour count is taken from the current generation. The next
// generation goes to a separate buffer that only replaces the current grid
// once the whole sweep has finished.

use std::fmt;
use std::panic;
use std::str::FromStr;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::rules;

/// How a generation sweep is scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepStrategy {
    /// Plain row-major loop.
    #[default]
    Sequential,
    /// One cooperative task per row on a current-thread runtime.
    RowTasks,
}

impl FromStr for StepStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "rows"       => Ok(Self::RowTasks),
            other        => Err(ConfigError::UnknownStepper(other.to_string())),
        }
    }
}

impl fmt::Display for StepStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sequential => "sequential",
            Self::RowTasks   => "rows",
        })
    }
}

/// Computes the next generation of `current`. `current` is only read.
pub fn step(current: &Grid) -> Grid {
    let mut next = Grid::new(current.rows(), current.cols());
    advance(current, &mut next);
    next
}

fn advance(current: &Grid, next: &mut Grid) {
    for row in 0..current.rows() {
        for col in 0..current.cols() {
            let count = current.neighbor_count(row, col);
            next.set(row, col, rules::next_state(current.get(row, col), count));
        }
    }
}

/// Row coroutine: computes one row of the next generation from a shared snapshot.
async fn step_row(current: Arc<Grid>, row: usize) -> (usize, Vec<bool>) {
    let mut next_row = Vec::with_capacity(current.cols());
    for col in 0..current.cols() {
        let count = current.neighbor_count(row, col);
        next_row.push(rules::next_state(current.get(row, col), count));

        tokio::task::yield_now().await;
    }
    (row, next_row)
}

fn advance_rows(runtime: &Runtime, current: &Grid, next: &mut Grid) {
    let snapshot = Arc::new(current.clone());

    runtime.block_on(async {
        let handles: Vec<_> = (0..snapshot.rows())
            .map(|row| tokio::spawn(step_row(Arc::clone(&snapshot), row)))
            .collect();

        for handle in handles {
            let (row, completed) = match handle.await {
                Ok(done) => done,
                Err(err) => panic::resume_unwind(err.into_panic()),
            };
            next.row_mut(row).copy_from_slice(&completed);
        }
    });
}

/// Advances a grid in place through a scratch buffer of the same dimensions.
pub struct Stepper {
    strategy: StepStrategy,
    scratch:  Grid,
    runtime:  Option<Runtime>,
}

impl Stepper {
    pub fn new(strategy: StepStrategy, rows: usize, cols: usize) -> std::io::Result<Self> {
        let runtime = match strategy {
            StepStrategy::Sequential => None,
            StepStrategy::RowTasks   => Some(Builder::new_current_thread().build()?),
        };
        Ok(Self {
            strategy,
            scratch: Grid::new(rows, cols),
            runtime,
        })
    }

    pub fn strategy(&self) -> StepStrategy {
        self.strategy
    }

    /// Replaces `grid` with its next generation.
    pub fn step(&mut self, grid: &mut Grid) {
        assert_eq!(
            grid.dimensions(),
            self.scratch.dimensions(),
            "stepper was built for a different board size"
        );

        match &self.runtime {
            None          => advance(grid, &mut self.scratch),
            Some(runtime) => advance_rows(runtime, grid, &mut self.scratch),
        }

        std::mem::swap(grid, &mut self.scratch);
    }
}

impl fmt::Debug for Stepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stepper")
            .field("strategy", &self.strategy)
            .field("dimensions", &self.scratch.dimensions())
            .finish()
    }
}
