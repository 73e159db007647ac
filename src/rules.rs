//! Rules module for the two-phase Game of Life
//!
//! The rule set is fixed to classic Conway (B3/S23):
//! 1. Any live cell with fewer than two live neighbors dies (underpopulation)
//! 2. Any live cell with two or three live neighbors lives (survival)
//! 3. Any live cell with more than three live neighbors dies (overpopulation)
//! 4. Any empty cell with exactly three live neighbors becomes alive (reproduction)
//!
//! Deaths and births are not applied directly. The mark step turns them into
//! `Dying` and `Born`, and the resolve step collapses those into `Empty` and
//! `Alive` one tick later.

pub mod patterns;

pub use patterns::Pattern;

use crate::cell::Cell;

/// Neighbors needed for an empty cell to be born
pub const BIRTH_COUNT: u8 = 3;
/// Minimum neighbors for a live cell to survive
pub const SURVIVAL_MIN: u8 = 2;
/// Maximum neighbors for a live cell to survive
pub const SURVIVAL_MAX: u8 = 3;

/// Mark step for one cell with `neighbors` live neighbors.
///
/// Returns `None` when `cell` is already transitional; the caller treats that
/// as a broken invariant.
#[inline]
pub fn mark(cell: Cell, neighbors: u8) -> Option<Cell> {
    match cell {
        Cell::Empty if neighbors == BIRTH_COUNT => Some(Cell::Born),
        Cell::Empty => Some(Cell::Empty),
        Cell::Alive if (SURVIVAL_MIN..=SURVIVAL_MAX).contains(&neighbors) => Some(Cell::Alive),
        Cell::Alive => Some(Cell::Dying),
        Cell::Born | Cell::Dying => None,
    }
}

/// Resolve step: collapse a transitional state into the steady state it announced.
#[inline]
pub fn resolve(cell: Cell) -> Cell {
    match cell {
        Cell::Empty | Cell::Dying => Cell::Empty,
        Cell::Born | Cell::Alive => Cell::Alive,
    }
}
