//! Fixed state-to-color table used by renderers.

use crate::cell::Cell;
use crate::grid::Grid;

/// One RGB triple per [`Cell`] variant, indexed by ordinal.
pub const PALETTE: [[u8; 3]; 4] = [
    [0x34, 0x49, 0x5e], // empty
    [0x1e, 0x84, 0x49], // alive
    [0x27, 0xae, 0x60], // born
    [0x64, 0x1e, 0x16], // dying
];

#[inline]
pub fn color(cell: Cell) -> [u8; 3] {
    PALETTE[cell.index()]
}

/// Opaque RGBA8 packed little-endian, so that WGSL `unpack4x8unorm`
/// yields `(r, g, b, 1.0)`.
#[inline]
pub fn packed_rgba(cell: Cell) -> u32 {
    let [r, g, b] = color(cell);
    u32::from_le_bytes([r, g, b, 0xff])
}

/// Fills `out` with one packed color per cell, row-major.
pub fn paint_rgba(grid: &Grid, out: &mut Vec<u32>) {
    out.clear();
    out.extend(grid.cells().iter().map(|&c| packed_rgba(c)));
}
