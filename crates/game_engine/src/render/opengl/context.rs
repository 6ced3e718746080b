use super::{GlRendererApi, GlUiRenderer};
use crate::ui::{ImGuiError, UiRenderer};
use crate::render::{GraphicsContext, RenderCommand, RenderError, RenderResult};
use crate::{engine_error, engine_info};
use glfw::Context as _;
use glow::HasContext;
use std::rc::Rc;

/// Oldest GL version the backend accepts
const MIN_GL_VERSION: (u32, u32) = (3, 3);

/// OpenGL context of a GLFW window
pub struct OpenGlContext {
    gl: Rc<glow::Context>,
    command: RenderCommand,
    render_context: glfw::PRenderContext,
}

impl OpenGlContext {
    /// Make the window's context current and load GL functions
    pub fn new(window: &mut glfw::PWindow) -> RenderResult<Self> {
        window.make_current();

        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| window.get_proc_address(symbol) as *const _)
        };

        let version = gl.version();
        let (vendor, renderer, version_string) = unsafe {
            (
                gl.get_parameter_string(glow::VENDOR),
                gl.get_parameter_string(glow::RENDERER),
                gl.get_parameter_string(glow::VERSION),
            )
        };
        engine_info!("OpenGL Info:");
        engine_info!("  Vendor: {}", vendor);
        engine_info!("  Renderer: {}", renderer);
        engine_info!("  Version: {}", version_string);

        if (version.major, version.minor) < MIN_GL_VERSION {
            engine_error!(
                "OpenGL {}.{} or newer required, got {}.{}",
                MIN_GL_VERSION.0,
                MIN_GL_VERSION.1,
                version.major,
                version.minor
            );
            return Err(RenderError::ContextCreation(format!(
                "OpenGL {}.{} is too old",
                version.major, version.minor
            )));
        }

        let gl = Rc::new(gl);
        let command = RenderCommand::new(Rc::new(GlRendererApi::new(gl.clone())));
        command.init();

        Ok(Self {
            gl,
            command,
            render_context: window.render_context(),
        })
    }
}

impl GraphicsContext for OpenGlContext {
    fn swap_buffers(&mut self) {
        self.render_context.swap_buffers();
    }

    fn render_command(&self) -> RenderCommand {
        self.command.clone()
    }

    fn create_ui_renderer(
        &self,
        imgui: &mut imgui::Context,
    ) -> Result<Option<Box<dyn UiRenderer>>, ImGuiError> {
        Ok(Some(Box::new(GlUiRenderer::new(self.gl.clone(), imgui)?)))
    }
}
