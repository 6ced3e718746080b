//! # Application
//!
//! The application owns the window and everything events are routed to.
//!
//! ## Frame
//!
//! ```text
//! tick timer ─▶ on_update (forward, skipped while minimized)
//!            ─▶ ImGui pass: on_imgui_render (forward)
//!            ─▶ window.on_update ─▶ callback ─▶ on_event (per native event)
//! ```
//!
//! ## Event routing
//!
//! Input state sees every event first. `WindowClose` stops the loop and is
//! consumed; `WindowResize` updates the viewport and minimized flag and keeps
//! propagating. Whatever is left goes to the ImGui overlay and then to each
//! layer from the top of the stack down, stopping at the first layer that
//! marks it handled.
//!
//! Window sizes and resize events are in screen coordinates. The viewport is
//! set in framebuffer pixels, scaled by the window's framebuffer ratio, which
//! is re-read after every poll so a move to a display with a different
//! density also resets it.
//!
//! The routing state lives behind an `Rc<RefCell<_>>` shared with the window
//! callback. The run loop releases its borrow before polling the window, so
//! the callback can always take it.

use crate::core::config::ApplicationConfig;
use crate::error::EngineResult;
use crate::events::{Event, EventDispatcher, WindowCloseEvent, WindowResizeEvent};
use crate::foundation::math::Vec4;
use crate::foundation::time::{Timer, Timestep};
use crate::input::InputState;
use crate::layer::{Layer, LayerStack};
use crate::render::RenderCommand;
use crate::ui::{ImGuiError, ImGuiLayer};
use crate::window::{self, Window, WindowProps};
use crate::{engine_info, engine_trace};
use std::cell::RefCell;
use std::rc::Rc;

/// State shared between the run loop and the window callback
struct AppContext {
    running: bool,
    minimized: bool,
    layers: LayerStack,
    imgui: Option<ImGuiLayer>,
    input: InputState,
    command: RenderCommand,
    framebuffer_scale: [f32; 2],
}

impl AppContext {
    fn on_event(&mut self, event: &mut Event) {
        engine_trace!("{}", event);
        self.input.observe(event);

        {
            let mut dispatcher = EventDispatcher::new(event);
            dispatcher.dispatch::<WindowCloseEvent>(|_| self.on_window_close());
            dispatcher.dispatch::<WindowResizeEvent>(|e| self.on_window_resize(e));
        }

        if let Some(imgui) = self.imgui.as_mut() {
            if !event.is_handled() {
                imgui.on_event(event);
            }
        }

        for layer in self.layers.iter_mut().rev() {
            if event.is_handled() {
                break;
            }
            layer.on_event(event);
        }
    }

    fn on_window_close(&mut self) -> bool {
        self.running = false;
        true
    }

    fn on_window_resize(&mut self, event: &WindowResizeEvent) -> bool {
        if event.width() == 0 || event.height() == 0 {
            self.minimized = true;
            return false;
        }

        self.minimized = false;
        self.set_viewport(event.width(), event.height());
        false
    }

    /// Viewport over a window area given in screen coordinates
    fn set_viewport(&self, width: u32, height: u32) {
        let [sx, sy] = self.framebuffer_scale;
        self.command
            .set_viewport(0, 0, to_pixels(width, sx), to_pixels(height, sy));
    }

    fn update_framebuffer_scale(&mut self, scale: [f32; 2], window_size: (u32, u32)) {
        if scale == self.framebuffer_scale {
            return;
        }
        engine_info!("Framebuffer scale changed to {:?}", scale);
        self.framebuffer_scale = scale;
        if !self.minimized {
            self.set_viewport(window_size.0, window_size.1);
        }
    }

    fn frame(&mut self, timestep: Timestep, display_size: (u32, u32)) -> Result<(), ImGuiError> {
        if !self.minimized {
            for layer in self.layers.iter_mut() {
                layer.on_update(timestep, &self.input);
            }
        }

        if let Some(imgui) = self.imgui.as_mut() {
            let layers = &mut self.layers;
            imgui.frame(display_size, self.framebuffer_scale, timestep, |ui| {
                for layer in layers.iter_mut() {
                    layer.on_imgui_render(ui);
                }
            })?;
        }
        Ok(())
    }
}

/// Framebuffer pixels per screen coordinate; `None` while either size is zero
fn framebuffer_scale(window: &dyn Window) -> Option<[f32; 2]> {
    let (fb_width, fb_height) = window.framebuffer_size();
    let (width, height) = (window.width(), window.height());
    if fb_width == 0 || fb_height == 0 || width == 0 || height == 0 {
        return None;
    }
    Some([fb_width as f32 / width as f32, fb_height as f32 / height as f32])
}

fn to_pixels(extent: u32, scale: f32) -> u32 {
    (extent as f32 * scale).round() as u32
}

/// Window, layer stack and main loop
pub struct Application {
    name: String,
    context: Rc<RefCell<AppContext>>,
    timer: Timer,
    window: Box<dyn Window>,
}

impl Application {
    /// Create the platform window and everything attached to it
    pub fn new(config: &ApplicationConfig) -> EngineResult<Self> {
        config.validate()?;
        let window = window::create(&WindowProps::from(&config.window), config.renderer.api)?;
        Self::with_window(config, window)
    }

    /// Build the application around an existing window
    pub fn with_window(config: &ApplicationConfig, mut window: Box<dyn Window>) -> EngineResult<Self> {
        let command = window.graphics_context().render_command();
        command.set_clear_color(Vec4::from(config.renderer.clear_color));
        let (fb_width, fb_height) = window.framebuffer_size();
        command.set_viewport(0, 0, fb_width, fb_height);

        let imgui = if config.imgui.enabled {
            let mut imgui = ImGuiLayer::new(&config.imgui)?;
            imgui.attach_renderer(window.graphics_context())?;
            Some(imgui)
        } else {
            None
        };

        let context = Rc::new(RefCell::new(AppContext {
            running: true,
            minimized: false,
            layers: LayerStack::new(),
            imgui,
            input: InputState::new(),
            command,
            framebuffer_scale: framebuffer_scale(window.as_ref()).unwrap_or([1.0, 1.0]),
        }));

        let routing = Rc::clone(&context);
        window.set_event_callback(Box::new(move |event| routing.borrow_mut().on_event(event)));

        engine_info!("Application '{}' created", config.name);
        Ok(Self {
            name: config.name.clone(),
            context,
            timer: Timer::new(),
            window,
        })
    }

    /// Push a layer below every overlay
    pub fn push_layer(&mut self, layer: Box<dyn Layer>) {
        self.context.borrow_mut().layers.push_layer(layer);
    }

    /// Push an overlay above every layer
    pub fn push_overlay(&mut self, overlay: Box<dyn Layer>) {
        self.context.borrow_mut().layers.push_overlay(overlay);
    }

    /// Remove a layer by name
    pub fn pop_layer(&mut self, name: &str) -> Option<Box<dyn Layer>> {
        self.context.borrow_mut().layers.pop_layer(name)
    }

    /// Remove an overlay by name
    pub fn pop_overlay(&mut self, name: &str) -> Option<Box<dyn Layer>> {
        self.context.borrow_mut().layers.pop_overlay(name)
    }

    /// Handle to the graphics backend, for layers that draw
    pub fn render_command(&self) -> RenderCommand {
        self.context.borrow().command.clone()
    }

    /// The main window
    pub fn window(&self) -> &dyn Window {
        self.window.as_ref()
    }

    /// Mutable access to the main window
    pub fn window_mut(&mut self) -> &mut dyn Window {
        self.window.as_mut()
    }

    /// Whether the main loop keeps going
    pub fn is_running(&self) -> bool {
        self.context.borrow().running
    }

    /// Whether the window is minimized
    pub fn is_minimized(&self) -> bool {
        self.context.borrow().minimized
    }

    /// Route one event as if the window had delivered it
    pub fn on_event(&mut self, event: &mut Event) {
        self.context.borrow_mut().on_event(event);
    }

    /// Run frames until a `WindowClose` event is handled
    pub fn run(&mut self) -> EngineResult<()> {
        engine_info!("Application '{}' running", self.name);

        while self.is_running() {
            let timestep = self.timer.tick();
            let display_size = (self.window.width(), self.window.height());
            self.context.borrow_mut().frame(timestep, display_size)?;
            self.window.on_update();

            if let Some(scale) = framebuffer_scale(self.window.as_ref()) {
                let window_size = (self.window.width(), self.window.height());
                self.context
                    .borrow_mut()
                    .update_framebuffer_scale(scale, window_size);
            }
        }

        engine_info!(
            "Application '{}' stopped after {} frames ({:.1} fps average)",
            self.name,
            self.timer.frame_count(),
            self.timer.average_fps()
        );
        Ok(())
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        // The window callback keeps the routing state alive; release GPU
        // resources while the window's context still exists.
        let mut context = self.context.borrow_mut();
        context.imgui = None;
        context.layers = LayerStack::new();
    }
}
