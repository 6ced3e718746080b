use super::{translate_event, EventCallback, Window, WindowError, WindowProps};
use crate::render::opengl::OpenGlContext;
use crate::render::{GraphicsContext, RenderError, RendererApiKind};
use crate::{engine_error, engine_info};
use glfw::{Context as _, WindowEvent};
use std::any::Any;

/// Mutable window state, separate from the native handles
struct WindowData {
    title: String,
    width: u32,
    height: u32,
    framebuffer: (u32, u32),
    vsync: bool,
    callback: Option<EventCallback>,
}

/// GLFW window with an OpenGL context
///
/// Field order matters: the context and window are dropped before the GLFW
/// handle that terminates the library.
pub struct GlfwWindow {
    context: OpenGlContext,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    data: WindowData,
    glfw: glfw::Glfw,
}

fn to_extent(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn log_glfw_error(error: glfw::Error, description: String) {
    engine_error!("GLFW Error ({:?}): {}", error, description);
}

impl GlfwWindow {
    /// Initialize GLFW, open the window and create its graphics context
    pub fn new(props: &WindowProps, api: RendererApiKind) -> Result<Self, WindowError> {
        engine_info!("Creating window {} ({}, {})", props.title, props.width, props.height);

        if api != RendererApiKind::OpenGl {
            return Err(RenderError::UnsupportedApi(api).into());
        }

        let mut glfw = glfw::init(log_glfw_error).map_err(|e| WindowError::Init(e.to_string()))?;
        glfw.window_hint(glfw::WindowHint::ContextVersion(4, 1));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(props.width, props.height, &props.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| WindowError::Creation(props.title.clone()))?;

        let context = OpenGlContext::new(&mut window)?;

        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_size_polling(true);
        window.set_close_polling(true);
        window.set_focus_polling(true);
        window.set_pos_polling(true);
        window.set_framebuffer_size_polling(true);

        let (fb_width, fb_height) = window.get_framebuffer_size();

        let mut this = Self {
            context,
            window,
            events,
            data: WindowData {
                title: props.title.clone(),
                width: props.width,
                height: props.height,
                framebuffer: (to_extent(fb_width), to_extent(fb_height)),
                vsync: props.vsync,
                callback: None,
            },
            glfw,
        };
        this.set_vsync(props.vsync);
        Ok(this)
    }

    /// Native GLFW window
    pub fn native(&self) -> &glfw::PWindow {
        &self.window
    }

    /// Title the window was created with
    pub fn title(&self) -> &str {
        &self.data.title
    }
}

impl Window for GlfwWindow {
    fn on_update(&mut self) {
        self.glfw.poll_events();

        for (_, native) in glfw::flush_messages(&self.events) {
            match native {
                WindowEvent::Size(width, height) => {
                    self.data.width = to_extent(width);
                    self.data.height = to_extent(height);
                }
                WindowEvent::FramebufferSize(width, height) => {
                    self.data.framebuffer = (to_extent(width), to_extent(height));
                }
                _ => {}
            }
            let Some(mut event) = translate_event(native) else {
                continue;
            };
            if let Some(callback) = self.data.callback.as_mut() {
                callback(&mut event);
            }
        }

        self.context.swap_buffers();
    }

    fn width(&self) -> u32 {
        self.data.width
    }

    fn height(&self) -> u32 {
        self.data.height
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.data.framebuffer
    }

    fn set_event_callback(&mut self, callback: EventCallback) {
        self.data.callback = Some(callback);
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.window.make_current();
        let interval = if enabled {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        };
        self.glfw.set_swap_interval(interval);
        self.data.vsync = enabled;
    }

    fn is_vsync(&self) -> bool {
        self.data.vsync
    }

    fn graphics_context(&self) -> &dyn GraphicsContext {
        &self.context
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        engine_info!("Destroying window {}", self.data.title);
    }
}
