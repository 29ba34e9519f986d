// config.rs - Display surface, board extent and pacing

use std::time::Duration;

use crate::error::ConfigError;
use crate::patterns::RANDOM_DENSITY;
use crate::stepper::StepStrategy;

pub const SURFACE_WIDTH:  u32 = 1000;
pub const SURFACE_HEIGHT: u32 = 640;
pub const CELL_SIZE:      u32 = SURFACE_WIDTH / 60;   // 16 px
pub const TICK:           Duration = Duration::from_millis(60);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Display surface in pixels.
    pub surface_width:  u32,
    pub surface_height: u32,
    /// Side of one square cell in pixels.
    pub cell_size:      u32,
    /// Probability of a cell starting alive in the random seed.
    pub density:        f64,
    /// Delay between simulation ticks.
    pub tick:           Duration,
    pub stepper:        StepStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width:  SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            cell_size:      CELL_SIZE,
            density:        RANDOM_DENSITY,
            tick:           TICK,
            stepper:        StepStrategy::default(),
        }
    }
}

impl Config {
    /// `(rows, cols)` of the board. Leftover pixels are unused margin.
    pub fn board_extent(&self) -> (usize, usize) {
        (
            (self.surface_height / self.cell_size) as usize,
            (self.surface_width / self.cell_size) as usize,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.cell_size > self.surface_width || self.cell_size > self.surface_height {
            return Err(ConfigError::CellLargerThanSurface {
                cell_size: self.cell_size,
                width:     self.surface_width,
                height:    self.surface_height,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange(self.density));
        }
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_matches_the_surface() {
        let config = Config::default();
        assert_eq!(config.cell_size, 16);
        assert_eq!(config.board_extent(), (40, 62));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn remainder_pixels_are_dropped() {
        let config = Config { surface_width: 105, surface_height: 99, cell_size: 10, ..Config::default() };
        assert_eq!(config.board_extent(), (9, 10));
    }

    #[test]
    fn rejects_bad_values() {
        let zero = Config { cell_size: 0, ..Config::default() };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroCellSize));

        let huge = Config { cell_size: 700, ..Config::default() };
        assert!(matches!(huge.validate(), Err(ConfigError::CellLargerThanSurface { .. })));

        let dense = Config { density: 1.5, ..Config::default() };
        assert_eq!(dense.validate(), Err(ConfigError::DensityOutOfRange(1.5)));

        let nan = Config { density: f64::NAN, ..Config::default() };
        assert!(nan.validate().is_err());

        let still = Config { tick: Duration::ZERO, ..Config::default() };
        assert_eq!(still.validate(), Err(ConfigError::ZeroTick));
    }
}
