// state.rs - Editing/Running interaction state machine
//
// The live grid is only changed by user input while Editing and only by the
// stepper while Running. Starting a run snapshots the live grid as the saved
// pattern; stopping restores it, discarding the evolved generations.

use log::{debug, info};
use rand::Rng;

use crate::config::Config;
use crate::error::Error;
use crate::grid::Grid;
use crate::history::History;
use crate::launch::LaunchMode;
use crate::patterns;
use crate::stepper::{StepStrategy, Stepper};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Running,
}

impl Mode {
    /// State reached on the start/stop signal.
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Editing => Mode::Running,
            Mode::Running => Mode::Editing,
        }
    }
}

/// Discrete input event. Pointer coordinates are pixels relative to the board origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    PrimaryPress   { x: u32, y: u32 },
    SecondaryPress { x: u32, y: u32 },
    StartStop,
    Clear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    /// A quit event was seen; the caller should stop after this tick.
    pub quit:    bool,
    /// A generation was computed.
    pub stepped: bool,
}

/// The whole simulation context: live grid, saved pattern and current mode.
#[derive(Debug)]
pub struct Simulation {
    live:       Grid,
    saved:      Grid,
    mode:       Mode,
    cell_size:  u32,
    stepper:    Stepper,
    history:    History,
    generation: u64,
}

impl Simulation {
    pub fn new(
        initial: Grid,
        mode: Mode,
        cell_size: u32,
        strategy: StepStrategy,
    ) -> std::io::Result<Self> {
        assert!(cell_size > 0, "cell size must be positive");
        let (rows, cols) = initial.dimensions();
        let mut sim = Self {
            saved: initial.clone(),
            live: initial,
            mode,
            cell_size,
            stepper: Stepper::new(strategy, rows, cols)?,
            history: History::new(),
            generation: 0,
        };
        if mode == Mode::Running {
            sim.history.record(&sim.live);
        }
        Ok(sim)
    }

    /// Builds the startup state for `launch` from a validated configuration.
    pub fn launch<R: Rng + ?Sized>(
        launch: LaunchMode,
        config: &Config,
        rng: &mut R,
    ) -> Result<Self, Error> {
        config.validate()?;
        let (rows, cols) = config.board_extent();

        let (initial, mode) = match launch {
            LaunchMode::Draw   => (Grid::new(rows, cols), Mode::Editing),
            LaunchMode::Random => (patterns::random(rows, cols, config.density, rng), Mode::Running),
            LaunchMode::Glider => (patterns::glider(rows, cols), Mode::Running),
        };

        info!(
            "launching {launch} on a {rows}x{cols} board ({} alive, {:?}, {} stepper)",
            initial.population(),
            mode,
            config.stepper
        );
        Ok(Self::new(initial, mode, config.cell_size, config.stepper)?)
    }

    pub fn mode(&self) -> Mode { self.mode }
    pub fn grid(&self) -> &Grid { &self.live }
    pub fn saved(&self) -> &Grid { &self.saved }
    pub fn cell_size(&self) -> u32 { self.cell_size }
    pub fn generation(&self) -> u64 { self.generation }
    pub fn is_repeating(&self) -> bool { self.history.is_repeating() }
    pub fn population(&self) -> usize { self.live.population() }

    /// Routes one input event according to the current mode.
    pub fn handle(&mut self, input: Input) -> Control {
        match (self.mode, input) {
            (_, Input::Quit) => return Control::Quit,
            (_, Input::StartStop) => self.transition(),

            (Mode::Editing, Input::PrimaryPress { x, y })   => self.paint(x, y, true),
            (Mode::Editing, Input::SecondaryPress { x, y }) => self.paint(x, y, false),
            (Mode::Editing, Input::Clear)                   => self.clear(),

            (Mode::Running, ignored) => debug!("ignoring {ignored:?} while running"),
        }
        Control::Continue
    }

    /// Drains `events` in order, then advances one generation if running.
    pub fn tick<I>(&mut self, events: I) -> Tick
    where
        I: IntoIterator<Item = Input>,
    {
        let mut tick = Tick::default();
        for event in events {
            if self.handle(event) == Control::Quit {
                tick.quit = true;
            }
        }
        if self.mode == Mode::Running {
            self.advance();
            tick.stepped = true;
        }
        tick
    }

    fn transition(&mut self) {
        let next = self.mode.toggled();
        match next {
            Mode::Running => self.saved.copy_from(&self.live),
            Mode::Editing => self.live.copy_from(&self.saved),
        }
        info!("{:?} -> {:?} after {} generations", self.mode, next, self.generation);

        self.mode = next;
        self.generation = 0;
        self.history.reset();
        if next == Mode::Running {
            self.history.record(&self.live);
        }
    }

    fn advance(&mut self) {
        debug_assert_eq!(self.mode, Mode::Running);
        self.stepper.step(&mut self.live);
        self.generation += 1;

        if self.history.record(&self.live) {
            info!("generation {} repeats a recent board", self.generation);
        }
    }

    /// Board cell under a pixel, if the pixel is on the board.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        let row = (y / self.cell_size) as usize;
        let col = (x / self.cell_size) as usize;
        self.live.contains(row, col).then_some((row, col))
    }

    fn paint(&mut self, x: u32, y: u32, alive: bool) {
        match self.cell_at(x, y) {
            Some((row, col)) => self.live.set(row, col, alive),
            None => debug!("press at ({x}, {y}) is outside the board"),
        }
    }

    fn clear(&mut self) {
        debug!("clearing the board");
        self.live.clear();
        self.generation = 0;
        self.history.reset();
    }
}
