//! Engine input codes to ImGui keys

use crate::input::{KeyCode, MouseButton};
use imgui::Key;

/// ImGui key for an engine key code, if ImGui cares about it
pub(super) fn key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::TAB => Key::Tab,
        KeyCode::LEFT => Key::LeftArrow,
        KeyCode::RIGHT => Key::RightArrow,
        KeyCode::UP => Key::UpArrow,
        KeyCode::DOWN => Key::DownArrow,
        KeyCode::PAGE_UP => Key::PageUp,
        KeyCode::PAGE_DOWN => Key::PageDown,
        KeyCode::HOME => Key::Home,
        KeyCode::END => Key::End,
        KeyCode::INSERT => Key::Insert,
        KeyCode::DELETE => Key::Delete,
        KeyCode::BACKSPACE => Key::Backspace,
        KeyCode::SPACE => Key::Space,
        KeyCode::ENTER => Key::Enter,
        KeyCode::ESCAPE => Key::Escape,
        KeyCode::LEFT_CONTROL => Key::LeftCtrl,
        KeyCode::RIGHT_CONTROL => Key::RightCtrl,
        KeyCode::LEFT_SHIFT => Key::LeftShift,
        KeyCode::RIGHT_SHIFT => Key::RightShift,
        KeyCode::LEFT_ALT => Key::LeftAlt,
        KeyCode::RIGHT_ALT => Key::RightAlt,
        KeyCode::LEFT_SUPER => Key::LeftSuper,
        KeyCode::RIGHT_SUPER => Key::RightSuper,
        // Clipboard, select-all and undo shortcuts
        KeyCode::A => Key::A,
        KeyCode::C => Key::C,
        KeyCode::V => Key::V,
        KeyCode::X => Key::X,
        KeyCode::Y => Key::Y,
        KeyCode::Z => Key::Z,
        _ => return None,
    };
    Some(key)
}

/// ImGui modifier key driven by an engine key code
///
/// ImGui's `key_ctrl`/`key_shift`/`key_alt`/`key_super` come from these, not
/// from the left/right keys.
pub(super) fn modifier(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::LEFT_CONTROL | KeyCode::RIGHT_CONTROL => Some(Key::ModCtrl),
        KeyCode::LEFT_SHIFT | KeyCode::RIGHT_SHIFT => Some(Key::ModShift),
        KeyCode::LEFT_ALT | KeyCode::RIGHT_ALT => Some(Key::ModAlt),
        KeyCode::LEFT_SUPER | KeyCode::RIGHT_SUPER => Some(Key::ModSuper),
        _ => None,
    }
}

/// ImGui mouse button for an engine button
pub(super) fn mouse_button(button: MouseButton) -> Option<imgui::MouseButton> {
    match button {
        MouseButton::LEFT => Some(imgui::MouseButton::Left),
        MouseButton::RIGHT => Some(imgui::MouseButton::Right),
        MouseButton::MIDDLE => Some(imgui::MouseButton::Middle),
        MouseButton::BUTTON_4 => Some(imgui::MouseButton::Extra1),
        MouseButton::BUTTON_5 => Some(imgui::MouseButton::Extra2),
        _ => None,
    }
}
