use rand::rngs::StdRng;
use rand::SeedableRng;

use ticklife::engine::{mark, resolve};
use ticklife::rules::patterns::{place_pattern, Pattern};
use ticklife::{
    Cell, ControlEvent, Grid, NeighborCounter, PaceController, Phase, Simulation, TickOutcome,
    MAX_RATE, MIN_RATE,
};

const RING: [(usize, usize); 8] = [
    (1, 1), (1, 2), (1, 3),
    (2, 1),         (2, 3),
    (3, 1), (3, 2), (3, 3),
];

/// 5x5 grid with `center` at (2,2) and the first `live` ring cells alive.
fn ring_grid(center: Cell, live: usize) -> Grid {
    let mut grid = Grid::new(5, 5).unwrap();
    grid.set(2, 2, center);
    for &(r, c) in &RING[..live] {
        grid.set(r, c, Cell::Alive);
    }
    grid
}

fn blinker_grid() -> Grid {
    let mut grid = Grid::new(5, 5).unwrap();
    place_pattern(&mut grid, Pattern::Blinker, 2, 1);
    grid
}

fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.at(row, col) == Cell::Alive {
                out.push((row, col));
            }
        }
    }
    out
}

#[test]
fn empty_cell_birth_rule() {
    let mut counter = NeighborCounter::new();
    for live in 0..=8 {
        let mut grid = ring_grid(Cell::Empty, live);
        mark(&mut grid, &mut counter).unwrap();
        let expected = if live == 3 { Cell::Born } else { Cell::Empty };
        assert_eq!(grid.at(2, 2), expected, "{live} live neighbors");
    }
}

#[test]
fn alive_cell_survival_rule() {
    let mut counter = NeighborCounter::new();
    for live in 0..=8 {
        let mut grid = ring_grid(Cell::Alive, live);
        mark(&mut grid, &mut counter).unwrap();
        let expected = if live == 2 || live == 3 { Cell::Alive } else { Cell::Dying };
        assert_eq!(grid.at(2, 2), expected, "{live} live neighbors");
    }
}

#[test]
fn resolve_leaves_steady_grid_unchanged() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut grid = Grid::new(9, 7).unwrap();
    grid.random_fill(&mut rng);
    let before = grid.clone();
    let census = resolve(&mut grid);
    assert_eq!(grid, before);
    assert_eq!(census.alive, before.count(Cell::Alive));
    assert_eq!(census.empty, before.count(Cell::Empty));
}

#[test]
fn blinker_marks_then_resolves_vertical() {
    let mut sim = Simulation::new(blinker_grid());
    assert_eq!(sim.phase(), Phase::Mark);

    let outcome = sim.step().unwrap();
    assert!(matches!(outcome, TickOutcome::Marked(s) if s.born == 2 && s.dying == 2));
    let grid = sim.grid();
    assert_eq!(grid.at(2, 1), Cell::Dying);
    assert_eq!(grid.at(2, 3), Cell::Dying);
    // The middle cell has two live neighbors and survives.
    assert_eq!(grid.at(2, 2), Cell::Alive);
    assert_eq!(grid.at(1, 2), Cell::Born);
    assert_eq!(grid.at(3, 2), Cell::Born);
    assert_eq!(grid.count(Cell::Empty), 25 - 5);

    let outcome = sim.step().unwrap();
    assert!(matches!(outcome, TickOutcome::Resolved(c) if c.alive == 3 && c.empty == 22));
    assert_eq!(alive_cells(sim.grid()), vec![(1, 2), (2, 2), (3, 2)]);
    assert!(!sim.grid().has_transitional());

    // Two more ticks bring it back.
    sim.step().unwrap();
    sim.step().unwrap();
    assert_eq!(sim.grid(), &blinker_grid());
    assert_eq!(sim.generation(), 2);
}

#[test]
fn ticks_alternate_mark_and_resolve() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut grid = Grid::new(16, 12).unwrap();
    grid.random_fill(&mut rng);
    let mut sim = Simulation::new(grid);

    for i in 0..20 {
        let expected_phase = if i % 2 == 0 { Phase::Mark } else { Phase::Resolve };
        assert_eq!(sim.phase(), expected_phase);
        match sim.step().unwrap() {
            TickOutcome::Marked(_) => assert_eq!(expected_phase, Phase::Mark),
            TickOutcome::Resolved(_) => {
                assert_eq!(expected_phase, Phase::Resolve);
                assert!(!sim.grid().has_transitional());
            }
            TickOutcome::Paused => panic!("unexpected pause"),
        }
    }
    assert_eq!(sim.ticks(), 20);
    assert_eq!(sim.generation(), 10);
}

#[test]
fn pause_freezes_phase_and_grid() {
    let mut sim = Simulation::new(blinker_grid());
    sim.step().unwrap();
    let frozen = sim.grid().clone();

    assert_eq!(sim.tick([ControlEvent::TogglePause]).unwrap(), TickOutcome::Paused);
    for _ in 0..5 {
        assert_eq!(sim.step().unwrap(), TickOutcome::Paused);
    }
    assert_eq!(sim.grid(), &frozen);
    assert_eq!(sim.phase(), Phase::Resolve);
    assert_eq!(sim.ticks(), 1);

    // Speed changes are still taken while paused.
    sim.tick([ControlEvent::SpeedUp, ControlEvent::SpeedUp]).unwrap();
    assert_eq!(sim.pace().speed(), 12);

    let outcome = sim.tick([ControlEvent::TogglePause]).unwrap();
    assert!(matches!(outcome, TickOutcome::Resolved(_)));
    assert_eq!(sim.phase(), Phase::Mark);
}

#[test]
fn speed_events_saturate() {
    let mut sim = Simulation::with_pace(Grid::new(3, 3).unwrap(), PaceController::new(MIN_RATE));
    sim.tick([ControlEvent::SpeedDown; 10]).unwrap();
    assert_eq!(sim.pace().speed(), MIN_RATE);

    let mut sim = Simulation::with_pace(Grid::new(3, 3).unwrap(), PaceController::new(MAX_RATE));
    sim.tick([ControlEvent::SpeedUp; 10]).unwrap();
    assert_eq!(sim.pace().speed(), MAX_RATE);
}

#[test]
fn glider_crosses_the_torus() {
    let mut grid = Grid::new(8, 8).unwrap();
    place_pattern(&mut grid, Pattern::Glider, 6, 6);
    let start = alive_cells(&grid);
    let mut sim = Simulation::new(grid);

    // Four generations move a glider one cell down and one right.
    for _ in 0..8 {
        sim.step().unwrap();
    }
    let mut shifted: Vec<_> = start.iter().map(|&(r, c)| ((r + 1) % 8, (c + 1) % 8)).collect();
    shifted.sort();
    assert_eq!(alive_cells(sim.grid()), shifted);

    // 32 generations bring it all the way round.
    for _ in 0..56 {
        sim.step().unwrap();
    }
    assert_eq!(alive_cells(sim.grid()), start);
}

#[test]
fn full_domain_fill_settles_after_first_tick() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut grid = Grid::new(20, 20).unwrap();
    grid.random_fill_any(&mut rng);
    let mut sim = Simulation::new(grid);

    assert!(matches!(sim.step().unwrap(), TickOutcome::Resolved(_)));
    assert!(!sim.grid().has_transitional());
    // Settling the seed is not a generation.
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.ticks(), 1);

    assert!(matches!(sim.step().unwrap(), TickOutcome::Marked(_)));
    assert_eq!(sim.generation(), 0);
    assert!(matches!(sim.step().unwrap(), TickOutcome::Resolved(_)));
    assert_eq!(sim.generation(), 1);

    for _ in 0..10 {
        sim.step().unwrap();
    }
    assert_eq!(sim.generation(), 6);
}
