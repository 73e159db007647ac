//! Two-phase transition engine.
//!
//! Every tick runs one sub-phase. A mark tick counts neighbors and flags
//! cells as `Born` or `Dying` without changing steady cells; the resolve
//! tick after it collapses those flags into `Alive` and `Empty`. One full
//! Life generation therefore takes two ticks, and the transitional states are
//! visible for exactly one of them.

use std::fmt;

use crate::cell::Cell;
use crate::control::ControlEvent;
use crate::counter::NeighborCounter;
use crate::error::EngineError;
use crate::grid::Grid;
use crate::pace::PaceController;
use crate::rules;

/// Which sub-phase the next tick runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Mark,
    Resolve,
}

impl Phase {
    pub fn next(self) -> Self {
        match self {
            Phase::Mark => Phase::Resolve,
            Phase::Resolve => Phase::Mark,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Mark => f.write_str("mark"),
            Phase::Resolve => f.write_str("resolve"),
        }
    }
}

/// Steady-state totals observed by a resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Census {
    pub empty: usize,
    pub alive: usize,
}

/// Cells flagged by a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkSummary {
    pub born: usize,
    pub dying: usize,
}

/// What a call to [`Simulation::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Paused,
    Marked(MarkSummary),
    Resolved(Census),
}

/// Mark sub-phase over the whole grid.
///
/// The grid must be all-steady; the counter reports any transitional cell
/// as an internal-consistency failure before anything is written.
pub fn mark(grid: &mut Grid, counter: &mut NeighborCounter) -> Result<MarkSummary, EngineError> {
    let counts = counter.count(grid)?;
    let width = grid.width();
    let mut summary = MarkSummary::default();

    for (idx, (cell, &neighbors)) in grid.cells_mut().iter_mut().zip(counts).enumerate() {
        let next = rules::mark(*cell, neighbors).ok_or(EngineError::TransitionalCell {
            phase: Phase::Mark,
            cell: *cell,
            row: idx / width,
            col: idx % width,
        })?;
        match next {
            Cell::Born => summary.born += 1,
            Cell::Dying => summary.dying += 1,
            _ => {}
        }
        *cell = next;
    }

    Ok(summary)
}

/// Resolve sub-phase over the whole grid. Leaves an all-steady grid unchanged.
pub fn resolve(grid: &mut Grid) -> Census {
    let mut census = Census::default();
    for cell in grid.cells_mut() {
        *cell = rules::resolve(*cell);
        match cell {
            Cell::Alive => census.alive += 1,
            _ => census.empty += 1,
        }
    }
    census
}

/// The whole simulation state: grid, phase, pacing and counters.
///
/// Owned by the host loop and driven through `&mut self`; nothing else
/// mutates the grid.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    counter: NeighborCounter,
    phase: Phase,
    pace: PaceController,
    ticks: u64,
    generation: u64,
    last_census: Option<Census>,
}

impl Simulation {
    /// Wraps `grid` with a default pace controller.
    ///
    /// A grid that already holds transitional cells starts on a resolve tick
    /// so they are collapsed before the first neighbor count.
    pub fn new(grid: Grid) -> Self {
        Self::with_pace(grid, PaceController::default())
    }

    pub fn with_pace(grid: Grid, pace: PaceController) -> Self {
        let phase = if grid.has_transitional() {
            Phase::Resolve
        } else {
            Phase::Mark
        };
        Self {
            grid,
            counter: NeighborCounter::new(),
            phase,
            pace,
            ticks: 0,
            generation: 0,
            last_census: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// `(width, height)` of the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Sub-phase the next unpaused tick will run.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pace(&self) -> &PaceController {
        &self.pace
    }

    pub fn pace_mut(&mut self) -> &mut PaceController {
        &mut self.pace
    }

    pub fn is_paused(&self) -> bool {
        self.pace.is_paused()
    }

    /// Sub-phases run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Resolves run so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_census(&self) -> Option<Census> {
        self.last_census
    }

    pub fn apply(&mut self, event: ControlEvent) {
        let before = (self.pace.speed(), self.pace.is_paused());
        self.pace.apply(event);
        let after = (self.pace.speed(), self.pace.is_paused());
        if before != after {
            log::info!("{:?}: speed {} paused {}", event, after.0, after.1);
        }
    }

    /// One tick boundary: apply queued control events, then, unless paused,
    /// run exactly one sub-phase and advance the phase.
    pub fn tick<I>(&mut self, events: I) -> Result<TickOutcome, EngineError>
    where
        I: IntoIterator<Item = ControlEvent>,
    {
        for event in events {
            self.apply(event);
        }
        if self.pace.is_paused() {
            return Ok(TickOutcome::Paused);
        }

        let outcome = match self.phase {
            Phase::Mark => {
                let summary = mark(&mut self.grid, &mut self.counter)?;
                log::debug!("mark: born={} dying={}", summary.born, summary.dying);
                TickOutcome::Marked(summary)
            }
            Phase::Resolve => {
                let census = resolve(&mut self.grid);
                log::debug!("resolve: empty={} alive={}", census.empty, census.alive);
                self.last_census = Some(census);
                // A leading resolve only settles a seeded grid.
                if self.ticks > 0 {
                    self.generation += 1;
                }
                TickOutcome::Resolved(census)
            }
        };
        self.phase = self.phase.next();
        self.ticks += 1;
        Ok(outcome)
    }

    /// [`tick`](Self::tick) with no control events.
    pub fn step(&mut self) -> Result<TickOutcome, EngineError> {
        self.tick(std::iter::empty())
    }
}
