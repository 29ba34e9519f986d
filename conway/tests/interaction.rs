use std::collections::VecDeque;

use conway::{
    CellRect, Config, Grid, Input, LaunchMode, Mode, Renderer, Simulation, StepStrategy, run_tick,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Default)]
struct Frame {
    cells: Vec<CellRect>,
}

impl Renderer for Frame {
    fn clear(&mut self) {
        self.cells.clear();
    }

    fn fill_cell(&mut self, rect: CellRect) {
        self.cells.push(rect);
    }
}

fn idle() -> VecDeque<Input> {
    VecDeque::new()
}

fn draw_session(config: &Config) -> Simulation {
    let mut rng = StdRng::seed_from_u64(0);
    Simulation::launch(LaunchMode::Draw, config, &mut rng).unwrap()
}

#[test]
fn drawn_cell_survives_a_run_and_stop() {
    let config = Config::default();
    let mut sim = draw_session(&config);
    let mut frame = Frame::default();

    // Pixel (100, 50) lands on row 3, column 6 with 16 px cells
    let mut events = VecDeque::from([Input::PrimaryPress { x: 100, y: 50 }, Input::StartStop]);
    let tick = run_tick(&mut sim, &mut events, &mut frame);
    assert!(tick.stepped);
    assert_eq!(sim.mode(), Mode::Running);
    assert!(frame.cells.is_empty());

    for _ in 0..25 {
        run_tick(&mut sim, &mut idle(), &mut frame);
    }
    assert_eq!(sim.generation(), 26);

    let mut events = VecDeque::from([Input::StartStop]);
    let tick = run_tick(&mut sim, &mut events, &mut frame);
    assert!(!tick.stepped);
    assert_eq!(sim.mode(), Mode::Editing);

    let (rows, cols) = config.board_extent();
    assert_eq!(sim.grid(), &Grid::with_alive(rows, cols, &[(3, 6)]));
    assert_eq!(frame.cells, vec![CellRect { x: 96, y: 48, size: 16 }]);
}

#[test]
fn margin_pixels_are_ignored() {
    // 1000 / 16 = 62 columns, so pixels 992..1000 are margin; 640 / 16 leaves none
    let config = Config::default();
    let mut sim = draw_session(&config);
    let mut frame = Frame::default();

    let mut events = VecDeque::from([
        Input::PrimaryPress { x: 995, y: 10 },
        Input::PrimaryPress { x: 999, y: 639 },
        Input::PrimaryPress { x: 991, y: 10 },
    ]);
    run_tick(&mut sim, &mut events, &mut frame);

    assert_eq!(sim.population(), 1);
    assert!(sim.grid().get(0, 61));
}

#[test]
fn row_task_session_matches_sequential() {
    let sequential = Config::default();
    let rows = Config { stepper: StepStrategy::RowTasks, ..Config::default() };

    let mut a = Simulation::launch(LaunchMode::Random, &sequential, &mut StdRng::seed_from_u64(9)).unwrap();
    let mut b = Simulation::launch(LaunchMode::Random, &rows, &mut StdRng::seed_from_u64(9)).unwrap();
    let (mut fa, mut fb) = (Frame::default(), Frame::default());

    for _ in 0..10 {
        run_tick(&mut a, &mut idle(), &mut fa);
        run_tick(&mut b, &mut idle(), &mut fb);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(fa.cells, fb.cells);
    }
}

#[test]
fn glider_launch_runs_immediately() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut sim = Simulation::launch(LaunchMode::Glider, &Config::default(), &mut rng).unwrap();
    let mut frame = Frame::default();

    let tick = run_tick(&mut sim, &mut idle(), &mut frame);
    assert!(tick.stepped);
    assert_eq!(sim.population(), 5);
    assert_eq!(frame.cells.len(), 5);
}
