//! Tick-rate control, independent of how often the host draws.

use std::time::{Duration, Instant};

use crate::control::ControlEvent;

pub const MIN_RATE: u32 = 1;
pub const MAX_RATE: u32 = 60;
pub const DEFAULT_RATE: u32 = 10;

/// Holds the tick rate (ticks per second) and the paused flag, and decides
/// at each poll whether a tick boundary has been reached.
#[derive(Debug, Clone)]
pub struct PaceController {
    speed: u32,
    paused: bool,
    last_tick: Option<Instant>,
}

impl Default for PaceController {
    fn default() -> Self {
        Self::new(DEFAULT_RATE)
    }
}

impl PaceController {
    /// `speed` is clamped into `[MIN_RATE, MAX_RATE]`.
    pub fn new(speed: u32) -> Self {
        Self {
            speed: speed.clamp(MIN_RATE, MAX_RATE),
            paused: false,
            last_tick: None,
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn increase_speed(&mut self) {
        self.speed = (self.speed + 1).min(MAX_RATE);
    }

    pub fn decrease_speed(&mut self) {
        self.speed = self.speed.saturating_sub(1).max(MIN_RATE);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::TogglePause => self.toggle_pause(),
            ControlEvent::SpeedUp => self.increase_speed(),
            ControlEvent::SpeedDown => self.decrease_speed(),
        }
    }

    /// Time between two ticks at the current speed.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed
    }

    /// Returns true when a tick boundary has been reached at `now`.
    ///
    /// The first poll always fires. After that a tick fires once a full
    /// interval has passed since the previous one; if the host fell more
    /// than one interval behind, the schedule restarts from `now` instead
    /// of bursting to catch up.
    pub fn due(&mut self, now: Instant) -> bool {
        let interval = self.tick_interval();
        match self.last_tick {
            None => {
                self.last_tick = Some(now);
                true
            }
            Some(last) => {
                let elapsed = now.saturating_duration_since(last);
                if elapsed < interval {
                    return false;
                }
                self.last_tick = Some(if elapsed >= interval * 2 { now } else { last + interval });
                true
            }
        }
    }

    /// Time left until the next tick boundary, for hosts that sleep.
    pub fn until_next(&self, now: Instant) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => (last + self.tick_interval()).saturating_duration_since(now),
        }
    }
}
