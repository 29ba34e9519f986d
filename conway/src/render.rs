// render.rs - Seams to the windowing side: where events come from and where cells are drawn

use crate::grid::Grid;
use crate::state::{Input, Simulation, Tick};

/// Square on the display surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x:    u32,
    pub y:    u32,
    pub size: u32,
}

/// Source of discrete input events. Returns `None` once the events pending
/// for this tick are exhausted.
pub trait InputSource {
    fn poll(&mut self) -> Option<Input>;
}

impl InputSource for std::collections::VecDeque<Input> {
    fn poll(&mut self) -> Option<Input> {
        self.pop_front()
    }
}

pub trait Renderer {
    /// Blanks the whole surface.
    fn clear(&mut self);
    /// Fills one live cell.
    fn fill_cell(&mut self, rect: CellRect);
}

/// Clears the surface, then fills every live cell of `grid`.
pub fn draw<R: Renderer + ?Sized>(grid: &Grid, cell_size: u32, renderer: &mut R) {
    renderer.clear();
    for (row, col) in grid.alive() {
        renderer.fill_cell(CellRect {
            x:    col as u32 * cell_size,
            y:    row as u32 * cell_size,
            size: cell_size,
        });
    }
}

/// One loop iteration: drain pending input, step if running, draw the result.
pub fn run_tick<S, R>(sim: &mut Simulation, input: &mut S, renderer: &mut R) -> Tick
where
    S: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    let tick = sim.tick(std::iter::from_fn(|| input.poll()));
    draw(sim.grid(), sim.cell_size(), renderer);
    tick
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::state::Mode;
    use crate::stepper::StepStrategy;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        cells:  Vec<CellRect>,
    }

    impl Renderer for Recorder {
        fn clear(&mut self) {
            self.clears += 1;
            self.cells.clear();
        }

        fn fill_cell(&mut self, rect: CellRect) {
            self.cells.push(rect);
        }
    }

    #[test]
    fn draws_live_cells_at_column_row_offsets() {
        let grid = Grid::with_alive(3, 4, &[(0, 0), (2, 3)]);
        let mut recorder = Recorder::default();
        draw(&grid, 16, &mut recorder);

        assert_eq!(recorder.clears, 1);
        assert_eq!(
            recorder.cells,
            vec![
                CellRect { x: 0, y: 0, size: 16 },
                CellRect { x: 48, y: 32, size: 16 },
            ]
        );
    }

    #[test]
    fn empty_grid_only_clears() {
        let mut recorder = Recorder::default();
        draw(&Grid::new(2, 2), 8, &mut recorder);
        assert_eq!(recorder.clears, 1);
        assert!(recorder.cells.is_empty());
    }

    #[test]
    fn run_tick_drains_the_source() {
        let mut sim = Simulation::new(Grid::new(4, 4), Mode::Editing, 10, StepStrategy::Sequential).unwrap();
        let mut events = VecDeque::from([
            Input::PrimaryPress { x: 15, y: 25 },
            Input::PrimaryPress { x: 35, y: 5 },
        ]);
        let mut recorder = Recorder::default();

        let tick = run_tick(&mut sim, &mut events, &mut recorder);

        assert!(events.is_empty());
        assert!(!tick.stepped);
        assert_eq!(
            recorder.cells,
            vec![
                CellRect { x: 30, y: 0, size: 10 },
                CellRect { x: 10, y: 20, size: 10 },
            ]
        );
    }
}
