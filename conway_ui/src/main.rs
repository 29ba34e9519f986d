// main.rs - Window front end: launch arguments, logging, and the eframe app state

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use clap::Parser;
use clap::error::ErrorKind;
use conway::config::CELL_SIZE;
use conway::patterns::{self, RANDOM_DENSITY};
use conway::{Config, Input, LaunchMode, Simulation, StepStrategy, launch};
use eframe::egui;
use egui::Color32;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod ui;

const PROGRAM: &str = "conways";

/// Conway's Game of Life: draw a pattern, run it, stop to get it back.
#[derive(Debug, Parser)]
#[command(name = PROGRAM, version)]
struct Cli {
    /// Start mode: draw, random or glider.
    #[arg(value_name = "MODE")]
    mode: LaunchMode,
    /// Side of one cell in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = CELL_SIZE)]
    cell_size: u32,
    /// Probability of a cell starting alive in random mode.
    #[arg(long, value_name = "P", default_value_t = RANDOM_DENSITY)]
    density: f64,
    /// Milliseconds between generations.
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    tick_ms: u64,
    /// Generation sweep: sequential or rows.
    #[arg(long, value_name = "STEPPER", default_value_t = StepStrategy::Sequential)]
    stepper: StepStrategy,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            cell_size: self.cell_size,
            density:   self.density,
            tick:      Duration::from_millis(self.tick_ms),
            stepper:   self.stepper,
            ..Config::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            if !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                eprint!("\n{}", launch::usage(PROGRAM));
            }
            return Ok(());
        }
    };

    let config = cli.config();
    let mut rng = StdRng::seed_from_u64(patterns::clock_seed());
    let sim = match Simulation::launch(cli.mode, &config, &mut rng) {
        Ok(sim) => sim,
        Err(conway::Error::Config(err)) => {
            eprint!("{PROGRAM}: {err}\n\n{}", launch::usage(PROGRAM));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(PROGRAM)
            .with_inner_size([
                config.surface_width as f32,
                config.surface_height as f32 + ui::STATUS_HEIGHT,
            ])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        PROGRAM,
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(sim, &config))),
    )
    .map_err(|err| {
        log::error!("display initialisation failed: {err}");
        anyhow!("display initialisation failed: {err}")
    })
}

/// Window state around the simulation: pending input and tick pacing.
pub struct LifeApp {
    sim:        Simulation,
    pending:    VecDeque<Input>,
    surface:    egui::Vec2,
    tick:       Duration,
    last_tick:  Instant,
    live_color: Color32,
    dead_color: Color32,
}

impl LifeApp {
    fn new(sim: Simulation, config: &Config) -> Self {
        Self {
            sim,
            pending:    VecDeque::new(),
            surface:    egui::vec2(config.surface_width as f32, config.surface_height as f32),
            tick:       config.tick,
            last_tick:  Instant::now(),
            live_color: Color32::WHITE,
            dead_color: Color32::BLACK,
        }
    }
}
