//! GLFW event translation

use crate::events::{
    Event, KeyPressedEvent, KeyReleasedEvent, KeyTypedEvent, MouseButtonPressedEvent,
    MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent, WindowCloseEvent,
    WindowFocusEvent, WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
use crate::input::{KeyCode, MouseButton};
use glfw::{Action, WindowEvent};

/// Translate a native GLFW event into an engine event
///
/// Returns `None` for native events without an engine counterpart.
/// Key presses report a repeat count of 0, auto-repeats a count of 1.
pub fn translate_event(native: WindowEvent) -> Option<Event> {
    let event = match native {
        WindowEvent::Close => Event::new(WindowCloseEvent),
        WindowEvent::Size(width, height) => Event::new(WindowResizeEvent::new(
            clamp_size(width),
            clamp_size(height),
        )),
        WindowEvent::Focus(true) => Event::new(WindowFocusEvent),
        WindowEvent::Focus(false) => Event::new(WindowLostFocusEvent),
        WindowEvent::Pos(x, y) => Event::new(WindowMovedEvent::new(x, y)),
        WindowEvent::Key(key, _, action, _) => {
            let code = KeyCode(key as i32);
            match action {
                Action::Press => Event::new(KeyPressedEvent::new(code, 0)),
                Action::Repeat => Event::new(KeyPressedEvent::new(code, 1)),
                Action::Release => Event::new(KeyReleasedEvent::new(code)),
            }
        }
        WindowEvent::Char(c) => Event::new(KeyTypedEvent::from_char(c)),
        WindowEvent::MouseButton(button, action, _) => {
            let button = MouseButton(button as i32);
            match action {
                Action::Press | Action::Repeat => Event::new(MouseButtonPressedEvent::new(button)),
                Action::Release => Event::new(MouseButtonReleasedEvent::new(button)),
            }
        }
        WindowEvent::CursorPos(x, y) => Event::new(MouseMovedEvent::new(x as f32, y as f32)),
        WindowEvent::Scroll(x, y) => Event::new(MouseScrolledEvent::new(x as f32, y as f32)),
        _ => return None,
    };
    Some(event)
}

fn clamp_size(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
