//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::Simulation;
use crate::error::EngineError;
use crate::grid::Grid;
use crate::pace::{PaceController, DEFAULT_RATE};
use crate::rules::patterns::{place_pattern_centered, Pattern};

pub const DEFAULT_WIDTH: usize = 640;
pub const DEFAULT_HEIGHT: usize = 320;

/// Which states the initial random fill draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FillMode {
    /// Empty or alive only; the first tick is a mark.
    #[default]
    Steady,
    /// All four states; the first tick resolves the transitional ones.
    Any,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "ticklife",
    version,
    about = "Two-phase Game of Life on a toroidal grid, one pixel per cell"
)]
pub struct SimConfig {
    /// Grid width in cells (and window width in pixels).
    #[arg(long, env = "TICKLIFE_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells (and window height in pixels).
    #[arg(long, env = "TICKLIFE_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Initial ticks per second, clamped to 1..=60.
    #[arg(long, env = "TICKLIFE_SPEED", default_value_t = DEFAULT_RATE)]
    pub speed: u32,

    /// Seed for the random fill; omitted means a fresh seed every run.
    #[arg(long, env = "TICKLIFE_SEED")]
    pub seed: Option<u64>,

    /// States used by the random fill.
    #[arg(long, env = "TICKLIFE_FILL", value_enum, default_value_t = FillMode::Steady)]
    pub fill: FillMode,

    /// Start from a single centered pattern instead of a random fill
    /// (blinker, toad, block, glider, lwss, gosper-gun).
    #[arg(long, env = "TICKLIFE_PATTERN")]
    pub pattern: Option<Pattern>,

    /// Start paused.
    #[arg(long)]
    pub paused: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            speed: DEFAULT_RATE,
            seed: None,
            fill: FillMode::Steady,
            pattern: None,
            paused: false,
        }
    }
}

impl SimConfig {
    /// Creates the grid, seeds it and wraps it in a ready simulation.
    pub fn build(&self) -> Result<Simulation, EngineError> {
        let mut grid = Grid::new(self.width, self.height)?;

        match self.pattern {
            Some(pattern) => {
                place_pattern_centered(&mut grid, pattern);
                log::info!("Seeded {}x{} grid with {}", self.width, self.height, pattern.name());
            }
            None => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                match self.fill {
                    FillMode::Steady => grid.random_fill(&mut rng),
                    FillMode::Any => grid.random_fill_any(&mut rng),
                }
                log::info!(
                    "Random {:?} fill of {}x{} grid (seed {:?})",
                    self.fill,
                    self.width,
                    self.height,
                    self.seed
                );
            }
        }

        let mut pace = PaceController::new(self.speed);
        pace.set_paused(self.paused);
        if pace.speed() != self.speed {
            log::warn!("Speed {} out of range, using {}", self.speed, pace.speed());
        }
        Ok(Simulation::with_pace(grid, pace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::engine::Phase;

    #[test]
    fn defaults_match_parsed_empty_args() {
        let parsed = SimConfig::try_parse_from(["ticklife"]).unwrap();
        assert_eq!(parsed, SimConfig::default());
    }

    #[test]
    fn parses_flags() {
        let parsed = SimConfig::try_parse_from([
            "ticklife", "--width", "12", "--height", "8", "--speed", "99", "--seed", "5",
            "--fill", "any", "--pattern", "glider", "--paused",
        ])
        .unwrap();
        assert_eq!(parsed.width, 12);
        assert_eq!(parsed.fill, FillMode::Any);
        assert_eq!(parsed.pattern, Some(Pattern::Glider));
        assert!(parsed.paused);
    }

    #[test]
    fn build_rejects_empty_grid() {
        let config = SimConfig { width: 0, ..SimConfig::default() };
        assert!(matches!(config.build(), Err(EngineError::InvalidDimensions { .. })));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn build_rejects_grid_too_large_for_a_surface() {
        let config = SimConfig {
            width: u32::MAX as usize + 1,
            height: 2,
            ..SimConfig::default()
        };
        assert!(matches!(config.build(), Err(EngineError::InvalidDimensions { .. })));
    }

    #[test]
    fn build_clamps_speed_and_seeds_pattern() {
        let config = SimConfig {
            width: 10,
            height: 10,
            speed: 99,
            pattern: Some(Pattern::Blinker),
            paused: true,
            ..SimConfig::default()
        };
        let sim = config.build().unwrap();
        assert_eq!(sim.pace().speed(), 60);
        assert!(sim.is_paused());
        assert_eq!(sim.grid().count(Cell::Alive), 3);
        assert_eq!(sim.phase(), Phase::Mark);
    }

    #[test]
    fn same_seed_same_grid() {
        let config = SimConfig { width: 16, height: 16, seed: Some(42), ..SimConfig::default() };
        assert_eq!(config.build().unwrap().grid(), config.build().unwrap().grid());
    }

    #[test]
    fn any_fill_starts_with_resolve() {
        let config = SimConfig {
            width: 16,
            height: 16,
            seed: Some(1),
            fill: FillMode::Any,
            ..SimConfig::default()
        };
        assert_eq!(config.build().unwrap().phase(), Phase::Resolve);
    }
}
