//! Input codes and polled input state
//!
//! Key and mouse button values mirror GLFW's numbering so that translating a
//! native event is a plain integer conversion. [`InputState`] is fed from the
//! routed event stream and handed to layers during `on_update`.

mod codes;

pub use codes::{KeyCode, MouseButton};

use crate::events::{Event, EventKind};
use std::collections::HashSet;

/// Polled input state built from routed events
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the effect of an event
    ///
    /// Called before the event is offered to any layer, so the state reflects
    /// the hardware even when a layer consumes the event.
    pub fn observe(&mut self, event: &Event) {
        match event.kind() {
            EventKind::KeyPressed(e) => {
                self.keys_down.insert(e.key_code());
            }
            EventKind::KeyReleased(e) => {
                self.keys_down.remove(&e.key_code());
            }
            EventKind::MouseButtonPressed(e) => {
                self.buttons_down.insert(e.button());
            }
            EventKind::MouseButtonReleased(e) => {
                self.buttons_down.remove(&e.button());
            }
            EventKind::MouseMoved(e) => {
                self.mouse_position = (e.x(), e.y());
            }
            EventKind::WindowLostFocus(_) => {
                // Release events are not delivered to an unfocused window
                self.keys_down.clear();
                self.buttons_down.clear();
            }
            _ => {}
        }
    }

    /// Whether a key is currently held
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Whether a mouse button is currently held
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Last known cursor position in window coordinates
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Last known cursor x coordinate
    pub fn mouse_x(&self) -> f32 {
        self.mouse_position.0
    }

    /// Last known cursor y coordinate
    pub fn mouse_y(&self) -> f32 {
        self.mouse_position.1
    }
}
