use crate::state::State;
use ticklife::ControlEvent;
use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{Key, NamedKey},
};

/// Space toggles pause, Right/Left change speed.
///
/// Held arrow keys keep adjusting as the OS repeats them; a held Space
/// only toggles once.
pub fn control_event(event: &KeyEvent) -> Option<ControlEvent> {
    if event.state != ElementState::Pressed {
        return None;
    }
    match &event.logical_key {
        Key::Named(NamedKey::Space) if !event.repeat => Some(ControlEvent::TogglePause),
        Key::Named(NamedKey::ArrowRight) => Some(ControlEvent::SpeedUp),
        Key::Named(NamedKey::ArrowLeft) => Some(ControlEvent::SpeedDown),
        _ => None,
    }
}

pub fn handle_keyboard_input(state: &mut State, event: &KeyEvent) {
    if let Some(control) = control_event(event) {
        log::debug!("Key {:?} -> {:?}", event.logical_key, control);
        state.queue_event(control);
    }
}
