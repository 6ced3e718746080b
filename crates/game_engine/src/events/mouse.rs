//! Mouse events

use super::EventCategory;
use crate::input::MouseButton;
use std::fmt;

const MOUSE_CATEGORY: EventCategory = EventCategory::MOUSE.union(EventCategory::INPUT);
const MOUSE_BUTTON_CATEGORY: EventCategory = MOUSE_CATEGORY.union(EventCategory::MOUSE_BUTTON);

/// Cursor moved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMovedEvent {
    x: f32,
    y: f32,
}

impl MouseMovedEvent {
    pub(super) const CATEGORIES: EventCategory = MOUSE_CATEGORY;

    /// Create a cursor move event
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Cursor x in window coordinates
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Cursor y in window coordinates
    pub const fn y(&self) -> f32 {
        self.y
    }
}

impl fmt::Display for MouseMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseMovedEvent: {}, {}", self.x, self.y)
    }
}

/// Scroll wheel or trackpad scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseScrolledEvent {
    x_offset: f32,
    y_offset: f32,
}

impl MouseScrolledEvent {
    pub(super) const CATEGORIES: EventCategory = MOUSE_CATEGORY;

    /// Create a scroll event
    pub const fn new(x_offset: f32, y_offset: f32) -> Self {
        Self { x_offset, y_offset }
    }

    /// Horizontal scroll delta
    pub const fn x_offset(&self) -> f32 {
        self.x_offset
    }

    /// Vertical scroll delta
    pub const fn y_offset(&self) -> f32 {
        self.y_offset
    }
}

impl fmt::Display for MouseScrolledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseScrolledEvent: {}, {}", self.x_offset, self.y_offset)
    }
}

/// Mouse button pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonPressedEvent {
    button: MouseButton,
}

impl MouseButtonPressedEvent {
    pub(super) const CATEGORIES: EventCategory = MOUSE_BUTTON_CATEGORY;

    /// Create a button press event
    pub const fn new(button: MouseButton) -> Self {
        Self { button }
    }

    /// Button that was pressed
    pub const fn button(&self) -> MouseButton {
        self.button
    }
}

impl fmt::Display for MouseButtonPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonPressedEvent: {}", self.button)
    }
}

/// Mouse button released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonReleasedEvent {
    button: MouseButton,
}

impl MouseButtonReleasedEvent {
    pub(super) const CATEGORIES: EventCategory = MOUSE_BUTTON_CATEGORY;

    /// Create a button release event
    pub const fn new(button: MouseButton) -> Self {
        Self { button }
    }

    /// Button that was released
    pub const fn button(&self) -> MouseButton {
        self.button
    }
}

impl fmt::Display for MouseButtonReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonReleasedEvent: {}", self.button)
    }
}
