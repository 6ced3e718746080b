//! Dear ImGui integration
//!
//! [`ImGuiLayer`] owns the ImGui context and sits in front of every layer in
//! the event order. Each frame the application opens a UI pass through
//! [`ImGuiLayer::frame`], lets every layer draw into the shared [`imgui::Ui`],
//! and hands the resulting draw data to a [`UiRenderer`] supplied by the
//! graphics context. Without a renderer the layer runs headless: widgets are
//! still built and input is still tracked, only the draw data is discarded.
//!
//! Dear ImGui allows one live context per process. A second [`ImGuiLayer`]
//! fails with [`ImGuiError::ContextExists`] until the first is dropped.

mod keys;

use crate::core::config::ImGuiConfig;
use crate::engine_info;
use crate::events::{Event, EventCategory, EventDispatcher, EventKind};
use crate::foundation::time::Timestep;
use crate::input::KeyCode;
use crate::render::GraphicsContext;
use imgui::ConfigFlags;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// ImGui requires a strictly positive frame delta
const MIN_DELTA_SECONDS: f32 = 1.0 / 10_000.0;

static CONTEXT_LIVE: AtomicBool = AtomicBool::new(false);

/// UI errors
#[derive(Error, Debug)]
pub enum ImGuiError {
    /// Another ImGui context is still alive in this process
    #[error("an ImGui context already exists")]
    ContextExists,

    /// The UI renderer failed to initialize or draw
    #[error("ImGui renderer error: {0}")]
    Renderer(String),
}

/// Backend that draws ImGui output
pub trait UiRenderer {
    /// Draw one frame of UI
    fn render(&mut self, draw_data: &imgui::DrawData) -> Result<(), ImGuiError>;
}

/// Claim on the process-wide context slot, released on drop
struct ContextClaim;

impl ContextClaim {
    fn acquire() -> Result<Self, ImGuiError> {
        if CONTEXT_LIVE.swap(true, Ordering::AcqRel) {
            return Err(ImGuiError::ContextExists);
        }
        Ok(Self)
    }
}

impl Drop for ContextClaim {
    fn drop(&mut self) {
        CONTEXT_LIVE.store(false, Ordering::Release);
    }
}

/// UI overlay: owns the ImGui context and optionally a renderer for it
///
/// Field order matters: the renderer and context are gone before the claim
/// is released.
pub struct ImGuiLayer {
    renderer: Option<Box<dyn UiRenderer>>,
    context: imgui::Context,
    block_events: bool,
    show_demo_window: bool,
    _claim: ContextClaim,
}

impl ImGuiLayer {
    /// Create a headless UI context
    pub fn new(config: &ImGuiConfig) -> Result<Self, ImGuiError> {
        let claim = ContextClaim::acquire()?;

        let mut context = imgui::Context::create();
        context.set_ini_filename(config.ini_filename.clone());

        let io = context.io_mut();
        io.font_global_scale = config.font_scale;
        if config.keyboard_nav {
            io.config_flags |= ConfigFlags::NAV_ENABLE_KEYBOARD;
        }
        if config.docking {
            io.config_flags |= ConfigFlags::DOCKING_ENABLE;
        }

        Ok(Self {
            renderer: None,
            context,
            block_events: config.block_events,
            show_demo_window: config.show_demo_window,
            _claim: claim,
        })
    }

    /// Ask the graphics context for a UI renderer
    ///
    /// When the backend has none the font atlas is built locally so frames can
    /// still be produced headless.
    pub fn attach_renderer(&mut self, graphics: &dyn GraphicsContext) -> Result<(), ImGuiError> {
        self.renderer = graphics.create_ui_renderer(&mut self.context)?;
        if self.renderer.is_none() {
            self.context.fonts().build_rgba32_texture();
            engine_info!("ImGui running without a renderer");
        }
        Ok(())
    }

    /// Whether draw data reaches a renderer
    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Whether captured input is marked handled
    pub fn set_block_events(&mut self, block: bool) {
        self.block_events = block;
    }

    /// Whether captured input is marked handled
    pub fn blocks_events(&self) -> bool {
        self.block_events
    }

    /// Show or hide the Dear ImGui demo window
    pub fn set_show_demo_window(&mut self, show: bool) {
        self.show_demo_window = show;
    }

    /// Whether the demo window is open; closing it from the UI clears this
    pub fn shows_demo_window(&self) -> bool {
        self.show_demo_window
    }

    /// ImGui input and configuration state
    pub fn io(&self) -> &imgui::Io {
        self.context.io()
    }

    /// Run one UI pass
    ///
    /// `display_size` is in screen coordinates, the same space as mouse
    /// positions; `framebuffer_scale` maps it to framebuffer pixels. Sets
    /// both with the delta time, calls `build` with the frame's `Ui`, then
    /// renders the result.
    pub fn frame(
        &mut self,
        display_size: (u32, u32),
        framebuffer_scale: [f32; 2],
        timestep: Timestep,
        build: impl FnOnce(&imgui::Ui),
    ) -> Result<(), ImGuiError> {
        let io = self.context.io_mut();
        io.display_size = [display_size.0 as f32, display_size.1 as f32];
        io.display_framebuffer_scale = framebuffer_scale;
        io.delta_time = timestep.seconds().max(MIN_DELTA_SECONDS);

        let ui = self.context.new_frame();
        if self.show_demo_window {
            ui.show_demo_window(&mut self.show_demo_window);
        }
        build(ui);
        let draw_data = self.context.render();

        match self.renderer.as_mut() {
            Some(renderer) => renderer.render(draw_data),
            None => Ok(()),
        }
    }

    /// Forward input to ImGui and block what it captures
    pub fn on_event(&mut self, event: &mut Event) {
        let io = self.context.io_mut();
        match event.kind() {
            EventKind::MouseMoved(e) => io.add_mouse_pos_event([e.x(), e.y()]),
            EventKind::MouseScrolled(e) => io.add_mouse_wheel_event([e.x_offset(), e.y_offset()]),
            EventKind::MouseButtonPressed(e) => {
                if let Some(button) = keys::mouse_button(e.button()) {
                    io.add_mouse_button_event(button, true);
                }
            }
            EventKind::MouseButtonReleased(e) => {
                if let Some(button) = keys::mouse_button(e.button()) {
                    io.add_mouse_button_event(button, false);
                }
            }
            EventKind::KeyPressed(e) => add_key_event(io, e.key_code(), true),
            EventKind::KeyReleased(e) => add_key_event(io, e.key_code(), false),
            EventKind::KeyTyped(e) => {
                if let Some(c) = e.character() {
                    io.add_input_character(c);
                }
            }
            _ => {}
        }

        if !self.block_events {
            return;
        }
        let (capture_mouse, capture_keyboard) = (io.want_capture_mouse, io.want_capture_keyboard);
        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch_category(EventCategory::MOUSE, |_| capture_mouse);
        dispatcher.dispatch_category(EventCategory::KEYBOARD, |_| capture_keyboard);
    }
}

/// ImGui derives its Ctrl/Shift/Alt/Super state from the modifier keys only
fn add_key_event(io: &mut imgui::Io, code: KeyCode, down: bool) {
    if let Some(key) = keys::key(code) {
        io.add_key_event(key, down);
    }
    if let Some(modifier) = keys::modifier(code) {
        io.add_key_event(modifier, down);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{KeyPressedEvent, KeyReleasedEvent, MouseButtonPressedEvent, MouseMovedEvent};
    use crate::input::MouseButton;
    use crate::test_support::{draw_panel, ui_lock, MockGraphicsContext};

    const FRAME: f32 = 0.016;

    fn headless(config: &ImGuiConfig) -> ImGuiLayer {
        let mut layer = ImGuiLayer::new(config).unwrap();
        layer
            .attach_renderer(&MockGraphicsContext::default())
            .unwrap();
        layer
    }

    fn step(layer: &mut ImGuiLayer, build: impl FnOnce(&imgui::Ui)) {
        layer
            .frame((800, 600), [1.0, 1.0], Timestep::from_seconds(FRAME), build)
            .unwrap();
    }

    #[test]
    fn test_headless_frame_runs_build() {
        let _ui = ui_lock();
        let mut layer = headless(&ImGuiConfig::default());
        assert!(!layer.has_renderer());

        let mut built = false;
        step(&mut layer, |ui| {
            ui.text("hello");
            built = true;
        });
        assert!(built);
    }

    #[test]
    fn test_zero_timestep_is_accepted() {
        let _ui = ui_lock();
        let mut layer = headless(&ImGuiConfig::default());
        layer
            .frame((640, 480), [1.0, 1.0], Timestep::from_seconds(0.0), |_| {})
            .unwrap();
        layer
            .frame((0, 0), [1.0, 1.0], Timestep::from_seconds(0.0), |_| {})
            .unwrap();
    }

    #[test]
    fn test_second_context_is_refused_until_first_drops() {
        let _ui = ui_lock();
        let first = ImGuiLayer::new(&ImGuiConfig::default()).unwrap();
        assert!(matches!(
            ImGuiLayer::new(&ImGuiConfig::default()),
            Err(ImGuiError::ContextExists)
        ));

        drop(first);
        assert!(ImGuiLayer::new(&ImGuiConfig::default()).is_ok());
    }

    #[test]
    fn test_config_flags_follow_config() {
        let _ui = ui_lock();
        let layer = headless(&ImGuiConfig::default());
        assert!(layer.io().config_flags.contains(ConfigFlags::NAV_ENABLE_KEYBOARD));
        assert!(layer.io().config_flags.contains(ConfigFlags::DOCKING_ENABLE));
        drop(layer);

        let plain = ImGuiConfig::default()
            .with_keyboard_nav(false)
            .with_docking(false);
        let layer = headless(&plain);
        assert!(!layer.io().config_flags.contains(ConfigFlags::NAV_ENABLE_KEYBOARD));
        assert!(!layer.io().config_flags.contains(ConfigFlags::DOCKING_ENABLE));
    }

    #[test]
    fn test_framebuffer_scale_reaches_io() {
        let _ui = ui_lock();
        let mut layer = headless(&ImGuiConfig::default());
        layer
            .frame((1280, 720), [2.0, 2.0], Timestep::from_seconds(FRAME), |_| {})
            .unwrap();
        assert_eq!(layer.io().display_size, [1280.0, 720.0]);
        assert_eq!(layer.io().display_framebuffer_scale, [2.0, 2.0]);
    }

    #[test]
    fn test_demo_window_stays_open_across_frames() {
        let _ui = ui_lock();
        let mut layer = headless(&ImGuiConfig::default().with_show_demo_window(true));
        step(&mut layer, |_| {});
        step(&mut layer, |_| {});
        assert!(layer.shows_demo_window());

        layer.set_show_demo_window(false);
        step(&mut layer, |_| {});
        assert!(!layer.shows_demo_window());
    }

    #[test]
    fn test_control_key_sets_ctrl_modifier() {
        let _ui = ui_lock();
        let mut layer = headless(&ImGuiConfig::default());
        step(&mut layer, |_| {});

        layer.on_event(&mut Event::new(KeyPressedEvent::new(KeyCode::LEFT_CONTROL, 0)));
        step(&mut layer, |_| {});
        assert!(layer.io().key_ctrl);
        assert!(!layer.io().key_shift);

        layer.on_event(&mut Event::new(KeyReleasedEvent::new(KeyCode::LEFT_CONTROL)));
        step(&mut layer, |_| {});
        assert!(!layer.io().key_ctrl);
    }

    #[test]
    fn test_uncaptured_input_passes_through() {
        let _ui = ui_lock();
        let mut layer = headless(&ImGuiConfig::default());
        step(&mut layer, |_| {});

        let mut key = Event::new(KeyPressedEvent::new(KeyCode::A, 0));
        layer.on_event(&mut key);
        assert!(!key.is_handled());

        let mut mouse = Event::new(MouseMovedEvent::new(10.0, 10.0));
        layer.on_event(&mut mouse);
        assert!(!mouse.is_handled());
    }

    #[test]
    fn test_hovered_window_captures_mouse() {
        let _ui = ui_lock();
        let mut layer = headless(&ImGuiConfig::default());
        step(&mut layer, draw_panel);
        layer.on_event(&mut Event::new(MouseMovedEvent::new(50.0, 50.0)));
        step(&mut layer, draw_panel);
        step(&mut layer, draw_panel);
        assert!(layer.io().want_capture_mouse);

        let mut press = Event::new(MouseButtonPressedEvent::new(MouseButton::LEFT));
        layer.on_event(&mut press);
        assert!(press.is_handled());
    }

    #[test]
    fn test_blocking_can_be_disabled() {
        let _ui = ui_lock();
        let mut layer = headless(&ImGuiConfig::default());
        layer.set_block_events(false);
        assert!(!layer.blocks_events());

        step(&mut layer, draw_panel);
        layer.on_event(&mut Event::new(MouseMovedEvent::new(50.0, 50.0)));
        step(&mut layer, draw_panel);
        step(&mut layer, draw_panel);

        let mut press = Event::new(MouseButtonPressedEvent::new(MouseButton::LEFT));
        layer.on_event(&mut press);
        assert!(!press.is_handled());
    }
}
