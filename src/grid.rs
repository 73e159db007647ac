use rand::Rng;

use crate::cell::Cell;
use crate::error::EngineError;

/// Toroidal neighbor indices of a cell: the rows above and below and the
/// columns left and right, each wrapped independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborIndices {
    pub up: usize,
    pub down: usize,
    pub left: usize,
    pub right: usize,
}

/// Fixed-size grid of cells, stored row-major.
///
/// Dimensions never change after creation. `at`/`set` take in-range
/// coordinates only; wrapping is done by the callers that need it through
/// [`Grid::neighbor_indices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `width x height` grid with every cell `Empty`.
    ///
    /// Each side must be in `1..=u32::MAX` so a host surface can be sized
    /// from it, and the cell count must fit in `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Builds a grid from rows of cells. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        checked_len(width, height)?;
        if rows.iter().any(|r| r.len() != width) {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: rows.concat(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`, one pixel per cell for a host surface.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width, "({row},{col}) out of range");
        row * self.width + col
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    pub fn neighbor_indices(&self, row: usize, col: usize) -> NeighborIndices {
        NeighborIndices {
            up: (row + self.height - 1) % self.height,
            down: (row + 1) % self.height,
            left: (col + self.width - 1) % self.width,
            right: (col + 1) % self.width,
        }
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Sets every cell to `Empty` or `Alive` with equal probability.
    pub fn random_fill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell::STEADY[rng.gen_range(0..Cell::STEADY.len())];
        }
    }

    /// Sets every cell to any of the four states with equal probability.
    ///
    /// The result generally holds transitional cells, so a simulation built
    /// over it has to resolve before it can count neighbors.
    pub fn random_fill_any<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell::ALL[rng.gen_range(0..Cell::ALL.len())];
        }
    }

    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    pub fn has_transitional(&self) -> bool {
        self.cells.iter().any(|c| !c.is_steady())
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, EngineError> {
    let fits_u32 = |side: usize| (1..=u32::MAX as usize).contains(&side);
    if !fits_u32(width) || !fits_u32(height) {
        return Err(EngineError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(EngineError::InvalidDimensions { width, height })
}
