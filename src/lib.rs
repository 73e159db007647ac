//! Two-phase Conway's Game of Life (B3/S23) on a toroidal grid.
//!
//! Each tick runs either a mark sub-phase, which flags cells as `Born` or
//! `Dying`, or a resolve sub-phase, which settles them. Windowing and drawing
//! live in the binary; this crate only needs a grid and a tick loop.

pub mod cell;
pub mod config;
pub mod control;
pub mod counter;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pace;
pub mod palette;
pub mod rules;

pub use cell::Cell;
pub use config::{FillMode, SimConfig};
pub use control::ControlEvent;
pub use counter::NeighborCounter;
pub use engine::{Census, MarkSummary, Phase, Simulation, TickOutcome};
pub use error::EngineError;
pub use grid::Grid;
pub use pace::{PaceController, MAX_RATE, MIN_RATE};
pub use rules::Pattern;
