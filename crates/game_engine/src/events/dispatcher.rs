//! Typed event routing

use super::{Event, EventCategory, EventVariant};

/// Routes one bound event to type-matched handlers
///
/// ```
/// use game_engine::events::{Event, EventDispatcher, WindowCloseEvent, WindowResizeEvent};
///
/// let mut event = Event::new(WindowCloseEvent);
/// let mut dispatcher = EventDispatcher::new(&mut event);
/// assert!(!dispatcher.dispatch::<WindowResizeEvent>(|_| true));
/// assert!(dispatcher.dispatch::<WindowCloseEvent>(|_| true));
/// assert!(event.is_handled());
/// ```
pub struct EventDispatcher<'a> {
    event: &'a mut Event,
}

impl<'a> EventDispatcher<'a> {
    /// Bind a dispatcher to one event
    pub fn new(event: &'a mut Event) -> Self {
        Self { event }
    }

    /// Offer the event to a handler for payload type `T`
    ///
    /// On a type match the handler runs once, its result overwrites the
    /// handled flag, and `true` is returned. Otherwise nothing runs and
    /// `false` is returned.
    pub fn dispatch<T: EventVariant>(&mut self, handler: impl FnOnce(&T) -> bool) -> bool {
        match T::narrow(&self.event.kind) {
            Some(payload) => {
                let handled = handler(payload);
                self.event.handled = handled;
                true
            }
            None => false,
        }
    }

    /// Offer the event to a handler keyed on category instead of type
    ///
    /// Same contract as [`dispatch`](Self::dispatch): runs iff the event is in
    /// any of the given categories and stores the handler's result.
    pub fn dispatch_category(
        &mut self,
        category: EventCategory,
        handler: impl FnOnce(&Event) -> bool,
    ) -> bool {
        if self.event.is_in_category(category) {
            let handled = handler(self.event);
            self.event.handled = handled;
            true
        } else {
            false
        }
    }

    /// The bound event
    pub fn event(&self) -> &Event {
        self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::*;
    use crate::input::{KeyCode, MouseButton};

    /// Count handler invocations for a dispatch of type `T` against `event`
    fn dispatch_count<T: EventVariant>(event: &mut Event) -> (bool, u32) {
        let mut calls = 0;
        let mut dispatcher = EventDispatcher::new(event);
        let matched = dispatcher.dispatch::<T>(|_| {
            calls += 1;
            true
        });
        (matched, calls)
    }

    #[test]
    fn test_dispatch_invokes_only_matching_type() {
        let mut event = Event::new(KeyPressedEvent::new(KeyCode::A, 0));

        assert_eq!(dispatch_count::<KeyPressedEvent>(&mut event.clone()), (true, 1));
        assert_eq!(dispatch_count::<KeyReleasedEvent>(&mut event), (false, 0));
        assert_eq!(dispatch_count::<KeyTypedEvent>(&mut event), (false, 0));
        assert_eq!(dispatch_count::<MouseMovedEvent>(&mut event), (false, 0));
        assert_eq!(dispatch_count::<WindowCloseEvent>(&mut event), (false, 0));
        assert!(!event.is_handled());
    }

    #[test]
    fn test_each_variant_matches_itself_only() {
        let mut events = vec![
            Event::new(WindowCloseEvent),
            Event::new(WindowResizeEvent::new(1, 1)),
            Event::new(MouseButtonPressedEvent::new(MouseButton::LEFT)),
            Event::new(MouseScrolledEvent::new(0.0, 1.0)),
            Event::new(AppRenderEvent),
        ];

        for event in &mut events {
            let expected = event.event_type();
            let hits = [
                (EventType::WindowClose, dispatch_count::<WindowCloseEvent>(event).0),
                (EventType::WindowResize, dispatch_count::<WindowResizeEvent>(event).0),
                (
                    EventType::MouseButtonPressed,
                    dispatch_count::<MouseButtonPressedEvent>(event).0,
                ),
                (EventType::MouseScrolled, dispatch_count::<MouseScrolledEvent>(event).0),
                (EventType::AppRender, dispatch_count::<AppRenderEvent>(event).0),
            ];
            for (ty, matched) in hits {
                assert_eq!(matched, ty == expected, "{ty} against {expected}");
            }
        }
    }

    #[test]
    fn test_dispatch_overwrites_handled_flag() {
        let mut event = Event::new(WindowCloseEvent);
        let mut dispatcher = EventDispatcher::new(&mut event);
        assert!(dispatcher.dispatch::<WindowCloseEvent>(|_| true));
        assert!(dispatcher.event().is_handled());

        // A later matching dispatch wins, even with false
        assert!(dispatcher.dispatch::<WindowCloseEvent>(|_| false));
        assert!(!event.is_handled());
    }

    #[test]
    fn test_handler_sees_payload() {
        let mut event = Event::new(WindowResizeEvent::new(640, 480));
        let mut seen = None;
        EventDispatcher::new(&mut event).dispatch::<WindowResizeEvent>(|e| {
            seen = Some((e.width(), e.height()));
            false
        });
        assert_eq!(seen, Some((640, 480)));
        assert!(!event.is_handled());
    }

    #[test]
    fn test_dispatch_category() {
        let mut event = Event::new(MouseMovedEvent::new(3.0, 4.0));
        let mut dispatcher = EventDispatcher::new(&mut event);
        assert!(!dispatcher.dispatch_category(EventCategory::KEYBOARD, |_| true));
        assert!(!dispatcher.event().is_handled());
        assert!(dispatcher.dispatch_category(EventCategory::MOUSE, |_| true));
        assert!(event.is_handled());
    }
}
