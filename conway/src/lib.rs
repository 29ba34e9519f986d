//! Conway's Game of Life on a fixed, hard-edged board, with an
//! Editing/Running interaction state machine.
//!
//! The windowing side feeds [`Input`] events through an [`InputSource`] and
//! receives cells through a [`Renderer`]; [`run_tick`] ties one loop
//! iteration together.

pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod launch;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod state;
pub mod stepper;

pub use config::Config;
pub use error::{ConfigError, Error, LaunchError};
pub use grid::Grid;
pub use launch::LaunchMode;
pub use render::{CellRect, InputSource, Renderer, draw, run_tick};
pub use state::{Control, Input, Mode, Simulation, Tick};
pub use stepper::{StepStrategy, Stepper, step};
