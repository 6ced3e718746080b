//! Platform windows
//!
//! [`Window`] is the engine's view of a native window: it owns the graphics
//! context, polls the platform once per frame, translates every native event
//! into an [`Event`] and hands it synchronously to a single registered
//! callback. [`create`] picks the backend for the current platform.

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos", target_os = "freebsd"))]
mod glfw_window;
mod translate;

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos", target_os = "freebsd"))]
pub use glfw_window::GlfwWindow;
pub use translate::translate_event;

use crate::events::Event;
use crate::render::{GraphicsContext, RenderError, RendererApiKind};
use std::any::Any;
use thiserror::Error;

/// Receives every translated event
pub type EventCallback = Box<dyn FnMut(&mut Event)>;

/// Window creation errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The platform layer failed to initialize
    #[error("Failed to initialize GLFW: {0}")]
    Init(String),

    /// The native window could not be created
    #[error("Failed to create window '{0}'")]
    Creation(String),

    /// No window backend exists for this platform
    #[error("No window backend for platform '{0}'")]
    UnsupportedPlatform(&'static str),

    /// The graphics context could not be created
    #[error(transparent)]
    Graphics(#[from] RenderError),
}

/// Initial window properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowProps {
    /// Title bar text
    pub title: String,
    /// Width in screen coordinates
    pub width: u32,
    /// Height in screen coordinates
    pub height: u32,
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
}

impl WindowProps {
    /// Properties with vsync enabled
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            vsync: true,
        }
    }

    /// Enable or disable vsync
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }
}

impl Default for WindowProps {
    fn default() -> Self {
        Self::new("Game Engine", 1280, 720)
    }
}

/// Native window with a graphics context
pub trait Window {
    /// Poll the platform, deliver events to the callback, present the frame
    fn on_update(&mut self);

    /// Current width in screen coordinates
    fn width(&self) -> u32;

    /// Current height in screen coordinates
    fn height(&self) -> u32;

    /// Drawable size in pixels; larger than the window size on HiDPI displays
    fn framebuffer_size(&self) -> (u32, u32);

    /// Replace the event callback; only the latest one receives events
    fn set_event_callback(&mut self, callback: EventCallback);

    /// Enable or disable vsync
    fn set_vsync(&mut self, enabled: bool);

    /// Whether vsync is enabled
    fn is_vsync(&self) -> bool;

    /// The window's graphics context
    fn graphics_context(&self) -> &dyn GraphicsContext;

    /// Downcast access to the concrete backend
    fn as_any(&self) -> &dyn Any;
}

/// Create a window with the backend for the current platform
pub fn create(props: &WindowProps, api: RendererApiKind) -> Result<Box<dyn Window>, WindowError> {
    #[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos", target_os = "freebsd"))]
    {
        Ok(Box::new(GlfwWindow::new(props, api)?))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos", target_os = "freebsd")))]
    {
        let _ = (props, api);
        Err(WindowError::UnsupportedPlatform(std::env::consts::OS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::WindowFocusEvent;
    use crate::test_support::{Journal, MockWindow, RecordingApi};
    use std::rc::Rc;

    fn recording_callback(journal: &Journal, tag: &'static str) -> EventCallback {
        let journal = journal.clone();
        Box::new(move |event: &mut Event| journal.record(format!("{tag}:{}", event.name())))
    }

    #[test]
    fn test_default_props() {
        let props = WindowProps::default();
        assert_eq!(props.title, "Game Engine");
        assert_eq!(props.width, 1280);
        assert_eq!(props.height, 720);
        assert!(props.vsync);
    }

    #[test]
    fn test_props_builder() {
        let props = WindowProps::new("Sandbox", 800, 600).with_vsync(false);
        assert_eq!((props.width, props.height), (800, 600));
        assert!(!props.vsync);
    }

    #[test]
    fn test_latest_event_callback_replaces_earlier_one() {
        let journal = Journal::default();
        let api = Rc::new(RecordingApi::default());
        let mut window = MockWindow::new(api, vec![vec![Event::new(WindowFocusEvent)]]);

        window.set_event_callback(recording_callback(&journal, "first"));
        window.set_event_callback(recording_callback(&journal, "second"));
        window.on_update();

        assert_eq!(journal.entries(), ["second:WindowFocus"]);
    }
}
