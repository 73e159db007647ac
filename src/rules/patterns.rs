use std::str::FromStr;

use crate::cell::Cell;
use crate::grid::Grid;

/// Predefined patterns for seeding the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small oscillator
    Blinker,
    /// A small oscillator
    Toad,
    /// A small stationary pattern
    Block,
    /// A diagonal spaceship
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// A pattern that grows indefinitely
    GosperGliderGun,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Block,
        Pattern::Glider,
        Pattern::LightweightSpaceship,
        Pattern::GosperGliderGun,
    ];

    /// Live cells as `(row, col)` offsets from the pattern's top-left corner
    #[rustfmt::skip]
    pub fn offsets(&self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Pattern::Toad => &[
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
            Pattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Pattern::Glider => &[
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
            Pattern::LightweightSpaceship => &[
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
            Pattern::GosperGliderGun => &[
                // Left block
                (4, 0), (4, 1), (5, 0), (5, 1),

                // Left ship
                (2, 12), (2, 13),
                (3, 11), (3, 15),
                (4, 10), (4, 16),
                (5, 10), (5, 14), (5, 16), (5, 17),
                (6, 10), (6, 16),
                (7, 11), (7, 15),
                (8, 12), (8, 13),

                // Right ship
                (0, 24),
                (1, 22), (1, 24),
                (2, 20), (2, 21),
                (3, 20), (3, 21),
                (4, 20), (4, 21),
                (5, 22), (5, 24),
                (6, 24),

                // Right block
                (2, 34), (2, 35), (3, 34), (3, 35),
            ],
        }
    }

    /// `(rows, cols)` covered by the pattern
    pub fn extent(&self) -> (usize, usize) {
        self.offsets()
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Block => "block",
            Pattern::Glider => "glider",
            Pattern::LightweightSpaceship => "lwss",
            Pattern::GosperGliderGun => "gosper-gun",
        }
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = Pattern::ALL.iter().map(Pattern::name).collect();
                format!("unknown pattern {s:?}, expected one of: {}", names.join(", "))
            })
    }
}

/// Place a pattern with its top-left corner at `(row, col)`.
/// Cells running past an edge wrap around to the opposite side.
pub fn place_pattern(grid: &mut Grid, pattern: Pattern, row: usize, col: usize) {
    let (width, height) = grid.dimensions();
    for &(dr, dc) in pattern.offsets() {
        grid.set((row + dr) % height, (col + dc) % width, Cell::Alive);
    }
}

/// Place a pattern centered on the grid
pub fn place_pattern_centered(grid: &mut Grid, pattern: Pattern) {
    let (rows, cols) = pattern.extent();
    let row = grid.height().saturating_sub(rows) / 2;
    let col = grid.width().saturating_sub(cols) / 2;
    place_pattern(grid, pattern, row, col);
}
