/// Abstract input the simulation understands. Hosts decide how these are
/// detected (key polling, event queue, UI buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    TogglePause,
    SpeedUp,
    SpeedDown,
}
