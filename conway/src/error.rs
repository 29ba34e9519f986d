// error.rs - Recoverable errors: bad configuration and bad launch arguments
//
// Out-of-range cell access and copies between mismatched grids are bugs and
// panic instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("cell size {cell_size} does not fit in a {width}x{height} surface")]
    CellLargerThanSurface { cell_size: u32, width: u32, height: u32 },
    #[error("density {0} is not a probability in [0, 1]")]
    DensityOutOfRange(f64),
    #[error("tick interval must be positive")]
    ZeroTick,
    #[error("unknown stepper {0:?}, expected \"sequential\" or \"rows\"")]
    UnknownStepper(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("unknown mode {0:?}, expected one of: draw, random, glider")]
    UnknownMode(String),
}

/// Failure to bring up a simulation.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to start the row-task runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
