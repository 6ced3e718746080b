//! Window and application lifecycle events

use super::EventCategory;
use std::fmt;

/// Window close requested by the user or the platform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCloseEvent;

impl WindowCloseEvent {
    pub(super) const CATEGORIES: EventCategory = EventCategory::APPLICATION;
}

impl fmt::Display for WindowCloseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WindowClose")
    }
}

/// Window client area changed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResizeEvent {
    width: u32,
    height: u32,
}

impl WindowResizeEvent {
    pub(super) const CATEGORIES: EventCategory = EventCategory::APPLICATION;

    /// Create a resize event
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// New width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// New height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for WindowResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowResizeEvent: {}, {}", self.width, self.height)
    }
}

/// Window gained input focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowFocusEvent;

impl WindowFocusEvent {
    pub(super) const CATEGORIES: EventCategory = EventCategory::APPLICATION;
}

impl fmt::Display for WindowFocusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WindowFocus")
    }
}

/// Window lost input focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowLostFocusEvent;

impl WindowLostFocusEvent {
    pub(super) const CATEGORIES: EventCategory = EventCategory::APPLICATION;
}

impl fmt::Display for WindowLostFocusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WindowLostFocus")
    }
}

/// Window moved on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMovedEvent {
    x: i32,
    y: i32,
}

impl WindowMovedEvent {
    pub(super) const CATEGORIES: EventCategory = EventCategory::APPLICATION;

    /// Create a move event
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// New x position of the top-left corner
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// New y position of the top-left corner
    pub const fn y(&self) -> i32 {
        self.y
    }
}

impl fmt::Display for WindowMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowMovedEvent: {}, {}", self.x, self.y)
    }
}

/// Fixed-rate application tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppTickEvent;

impl AppTickEvent {
    pub(super) const CATEGORIES: EventCategory = EventCategory::APPLICATION;
}

impl fmt::Display for AppTickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppTick")
    }
}

/// Application update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppUpdateEvent;

impl AppUpdateEvent {
    pub(super) const CATEGORIES: EventCategory = EventCategory::APPLICATION;
}

impl fmt::Display for AppUpdateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppUpdate")
    }
}

/// Application render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppRenderEvent;

impl AppRenderEvent {
    pub(super) const CATEGORIES: EventCategory = EventCategory::APPLICATION;
}

impl fmt::Display for AppRenderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppRender")
    }
}
