//! Keyboard events

use super::EventCategory;
use crate::input::KeyCode;
use std::fmt;

const KEY_CATEGORY: EventCategory = EventCategory::KEYBOARD.union(EventCategory::INPUT);

/// Key pressed, or held long enough to auto-repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressedEvent {
    key: KeyCode,
    repeat_count: u32,
}

impl KeyPressedEvent {
    pub(super) const CATEGORIES: EventCategory = KEY_CATEGORY;

    /// Create a key press event
    pub const fn new(key: KeyCode, repeat_count: u32) -> Self {
        Self { key, repeat_count }
    }

    /// Key that was pressed
    pub const fn key_code(&self) -> KeyCode {
        self.key
    }

    /// Zero for the initial press, non-zero for auto-repeat
    pub const fn repeat_count(&self) -> u32 {
        self.repeat_count
    }
}

impl fmt::Display for KeyPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPressedEvent: {} ({} repeats)", self.key, self.repeat_count)
    }
}

/// Key released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReleasedEvent {
    key: KeyCode,
}

impl KeyReleasedEvent {
    pub(super) const CATEGORIES: EventCategory = KEY_CATEGORY;

    /// Create a key release event
    pub const fn new(key: KeyCode) -> Self {
        Self { key }
    }

    /// Key that was released
    pub const fn key_code(&self) -> KeyCode {
        self.key
    }
}

impl fmt::Display for KeyReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyReleasedEvent: {}", self.key)
    }
}

/// Character typed; the code is the Unicode scalar value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTypedEvent {
    key: KeyCode,
}

impl KeyTypedEvent {
    pub(super) const CATEGORIES: EventCategory = KEY_CATEGORY;

    /// Create a typed-character event
    pub const fn new(key: KeyCode) -> Self {
        Self { key }
    }

    /// Create a typed-character event from a `char`
    pub fn from_char(c: char) -> Self {
        Self {
            key: KeyCode(c as i32),
        }
    }

    /// Typed code point
    pub const fn key_code(&self) -> KeyCode {
        self.key
    }

    /// Typed character, if the code is a valid scalar value
    pub fn character(&self) -> Option<char> {
        u32::try_from(self.key.0).ok().and_then(char::from_u32)
    }
}

impl fmt::Display for KeyTypedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyTypedEvent: {}", self.key)
    }
}
