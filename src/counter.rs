//! Live-neighbor counting over a toroidal grid.
//!
//! Counts are built with a separable sum: first each cell's column triple
//! (the row above, the cell, the row below) is summed into a temporary row,
//! then three adjacent entries of that row are summed and the cell's own
//! value is taken back out. That touches each cell a constant number of
//! times instead of scanning nine cells per position.

use crate::cell::Cell;
use crate::engine::Phase;
use crate::error::EngineError;
use crate::grid::Grid;

/// Reusable neighbor counter. Holds one temporary row of vertical sums and
/// the full count table, both kept across ticks.
#[derive(Debug, Default, Clone)]
pub struct NeighborCounter {
    tmp: Vec<u8>,
    counts: Vec<u8>,
    width: usize,
}

impl NeighborCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the 8-neighbor live count of every cell in `grid`.
    ///
    /// The grid must only hold `Empty` and `Alive` cells. A `Born` or
    /// `Dying` cell means the grid was not resolved first, which is reported
    /// as [`EngineError::TransitionalCell`] and leaves no usable counts.
    pub fn count(&mut self, grid: &Grid) -> Result<&[u8], EngineError> {
        let (width, height) = grid.dimensions();
        self.width = width;
        self.tmp.clear();
        self.tmp.resize(width, 0);
        self.counts.clear();
        self.counts.resize(width * height, 0);

        for i in 0..height {
            let n = grid.neighbor_indices(i, 0);
            let (above, row, below) = (grid.row(n.up), grid.row(i), grid.row(n.down));

            for j in 0..width {
                self.tmp[j] = value(above[j], n.up, j)?
                    + value(row[j], i, j)?
                    + value(below[j], n.down, j)?;
            }

            let out = &mut self.counts[i * width..(i + 1) * width];
            for j in 0..width {
                let left = (j + width - 1) % width;
                let right = (j + 1) % width;
                // All nine cells minus the center one.
                out[j] = self.tmp[left] + self.tmp[j] + self.tmp[right] - value(row[j], i, j)?;
            }
        }

        Ok(&self.counts)
    }

    /// Count of the cell at `(row, col)` from the last successful [`count`](Self::count).
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.counts[row * self.width + col]
    }
}

#[inline]
fn value(cell: Cell, row: usize, col: usize) -> Result<u8, EngineError> {
    cell.value().ok_or(EngineError::TransitionalCell {
        phase: Phase::Mark,
        cell,
        row,
        col,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_counts_zero() {
        let grid = Grid::new(4, 3).unwrap();
        let mut counter = NeighborCounter::new();
        assert!(counter.count(&grid).unwrap().iter().all(|&c| c == 0));
    }

    #[test]
    fn single_live_cell_lights_its_ring() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, Cell::Alive);
        let mut counter = NeighborCounter::new();
        counter.count(&grid).unwrap();
        for row in 0..5usize {
            for col in 0..5usize {
                let near = row.abs_diff(2) <= 1 && col.abs_diff(2) <= 1;
                let expected = u8::from(near && (row, col) != (2, 2));
                assert_eq!(counter.at(row, col), expected, "({row},{col})");
            }
        }
    }

    #[test]
    fn full_grid_counts_eight() {
        let mut grid = Grid::new(6, 4).unwrap();
        grid.cells_mut().fill(Cell::Alive);
        let mut counter = NeighborCounter::new();
        assert!(counter.count(&grid).unwrap().iter().all(|&c| c == 8));
    }

    #[test]
    fn transitional_cell_is_rejected() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(1, 2, Cell::Born);
        let mut counter = NeighborCounter::new();
        let err = counter.count(&grid).unwrap_err();
        assert_eq!(
            err,
            EngineError::TransitionalCell { phase: Phase::Mark, cell: Cell::Born, row: 1, col: 2 }
        );
    }

    #[test]
    fn buffers_follow_grid_size() {
        let mut counter = NeighborCounter::new();
        counter.count(&Grid::new(8, 8).unwrap()).unwrap();
        let counts = counter.count(&Grid::new(3, 2).unwrap()).unwrap();
        assert_eq!(counts.len(), 6);
    }
}
