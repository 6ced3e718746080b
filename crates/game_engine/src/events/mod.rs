//! Event system
//!
//! Key principles:
//! - Events are handled immediately, on the stack, at the point the window
//!   translates them; nothing is queued
//! - A closed set of payload types, each with a fixed [`EventType`] and
//!   [`EventCategory`] mask
//! - Handlers return bool (true = consumed, stops forwarding to lower layers)
//! - Typed routing through [`EventDispatcher`] instead of casts

mod application;
mod dispatcher;
mod key;
mod mouse;

pub use application::{
    AppRenderEvent, AppTickEvent, AppUpdateEvent, WindowCloseEvent, WindowFocusEvent,
    WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
pub use dispatcher::EventDispatcher;
pub use key::{KeyPressedEvent, KeyReleasedEvent, KeyTypedEvent};
pub use mouse::{
    MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent,
};

use bitflags::bitflags;
use std::fmt;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Window close requested
    WindowClose,
    /// Window client area resized
    WindowResize,
    /// Window gained focus
    WindowFocus,
    /// Window lost focus
    WindowLostFocus,
    /// Window moved on screen
    WindowMoved,
    /// Fixed-rate application tick
    AppTick,
    /// Application update
    AppUpdate,
    /// Application render
    AppRender,
    /// Key pressed or auto-repeated
    KeyPressed,
    /// Key released
    KeyReleased,
    /// Character typed
    KeyTyped,
    /// Mouse button pressed
    MouseButtonPressed,
    /// Mouse button released
    MouseButtonReleased,
    /// Cursor moved
    MouseMoved,
    /// Scroll wheel moved
    MouseScrolled,
}

impl EventType {
    /// Human-readable name of the event type
    pub const fn name(self) -> &'static str {
        match self {
            Self::WindowClose => "WindowClose",
            Self::WindowResize => "WindowResize",
            Self::WindowFocus => "WindowFocus",
            Self::WindowLostFocus => "WindowLostFocus",
            Self::WindowMoved => "WindowMoved",
            Self::AppTick => "AppTick",
            Self::AppUpdate => "AppUpdate",
            Self::AppRender => "AppRender",
            Self::KeyPressed => "KeyPressed",
            Self::KeyReleased => "KeyReleased",
            Self::KeyTyped => "KeyTyped",
            Self::MouseButtonPressed => "MouseButtonPressed",
            Self::MouseButtonReleased => "MouseButtonReleased",
            Self::MouseMoved => "MouseMoved",
            Self::MouseScrolled => "MouseScrolled",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Categories used to filter events
    ///
    /// An event can belong to several categories at once, e.g. a mouse button
    /// press is `INPUT | MOUSE | MOUSE_BUTTON`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventCategory: u8 {
        /// Window and application lifecycle
        const APPLICATION  = 1 << 0;
        /// Any user input
        const INPUT        = 1 << 1;
        /// Keyboard input
        const KEYBOARD     = 1 << 2;
        /// Mouse input
        const MOUSE        = 1 << 3;
        /// Mouse button input
        const MOUSE_BUTTON = 1 << 4;
    }
}

/// Static identity of a concrete event payload
///
/// Implemented by every payload type; the associated constants are fixed
/// per type, never per instance.
pub trait EventVariant: fmt::Display + Sized {
    /// Type tag of this payload
    const TYPE: EventType;
    /// Category mask of this payload
    const CATEGORY: EventCategory;

    /// Narrow a generic payload to this type
    fn narrow(kind: &EventKind) -> Option<&Self>;
}

macro_rules! define_event_kinds {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Payload of an event, one variant per concrete event type
        #[derive(Debug, Clone, PartialEq)]
        pub enum EventKind {
            $(
                #[doc = concat!("See [`", stringify!($ty), "`]")]
                $variant($ty),
            )+
        }

        impl EventKind {
            /// Type tag of the payload
            pub fn event_type(&self) -> EventType {
                match self {
                    $( Self::$variant(_) => <$ty as EventVariant>::TYPE, )+
                }
            }

            /// Category mask of the payload
            pub fn category_flags(&self) -> EventCategory {
                match self {
                    $( Self::$variant(_) => <$ty as EventVariant>::CATEGORY, )+
                }
            }
        }

        impl fmt::Display for EventKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Self::$variant(e) => fmt::Display::fmt(e, f), )+
                }
            }
        }

        $(
            impl EventVariant for $ty {
                const TYPE: EventType = EventType::$variant;
                const CATEGORY: EventCategory = <$ty>::CATEGORIES;

                fn narrow(kind: &EventKind) -> Option<&Self> {
                    match kind {
                        EventKind::$variant(e) => Some(e),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for EventKind {
                fn from(event: $ty) -> Self {
                    Self::$variant(event)
                }
            }
        )+
    };
}

define_event_kinds! {
    WindowClose(WindowCloseEvent),
    WindowResize(WindowResizeEvent),
    WindowFocus(WindowFocusEvent),
    WindowLostFocus(WindowLostFocusEvent),
    WindowMoved(WindowMovedEvent),
    AppTick(AppTickEvent),
    AppUpdate(AppUpdateEvent),
    AppRender(AppRenderEvent),
    KeyPressed(KeyPressedEvent),
    KeyReleased(KeyReleasedEvent),
    KeyTyped(KeyTypedEvent),
    MouseButtonPressed(MouseButtonPressedEvent),
    MouseButtonReleased(MouseButtonReleasedEvent),
    MouseMoved(MouseMovedEvent),
    MouseScrolled(MouseScrolledEvent),
}

/// An event travelling through the dispatch chain
///
/// Type and payload never change after construction. The handled flag is
/// only written by an [`EventDispatcher`].
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    kind: EventKind,
    handled: bool,
}

impl Event {
    /// Create an unhandled event from any payload
    pub fn new(kind: impl Into<EventKind>) -> Self {
        Self {
            kind: kind.into(),
            handled: false,
        }
    }

    /// The event payload
    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Runtime type tag
    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// Name of the event type
    pub fn name(&self) -> &'static str {
        self.event_type().name()
    }

    /// Category mask of the event
    pub fn category_flags(&self) -> EventCategory {
        self.kind.category_flags()
    }

    /// Whether the event belongs to any of the given categories
    pub fn is_in_category(&self, category: EventCategory) -> bool {
        self.category_flags().intersects(category)
    }

    /// Whether a handler consumed the event
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Borrow the payload as a concrete type, if it is one
    pub fn payload<T: EventVariant>(&self) -> Option<&T> {
        T::narrow(&self.kind)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
