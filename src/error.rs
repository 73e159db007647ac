//! Error types for the simulation engine.

use thiserror::Error;

use crate::cell::Cell;
use crate::engine::Phase;

/// Errors surfaced by grid construction and the transition engine.
///
/// `TransitionalCell` is an internal-consistency failure: the engine's own
/// invariants are broken and the simulation cannot go on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("{cell} cell at ({row},{col}) during {phase} phase, expected only empty or alive")]
    TransitionalCell {
        phase: Phase,
        cell: Cell,
        row: usize,
        col: usize,
    },
}

impl EngineError {
    /// True for failures that mean the engine itself is broken.
    pub fn is_internal(&self) -> bool {
        matches!(self, EngineError::TransitionalCell { .. })
    }
}
