//! Cloneable handle to the active graphics backend

use super::{
    IndexBuffer, RenderResult, RendererApi, RendererApiKind, Shader, ShaderError, ShaderSources,
    VertexArray, VertexBuffer,
};
use crate::foundation::math::Vec4;
use std::fmt;
use std::rc::Rc;

/// Issues draw calls and creates resources on the active backend
///
/// Cheap to clone; every clone talks to the same backend. Layers receive one
/// at construction instead of reaching for a global.
#[derive(Clone)]
pub struct RenderCommand {
    api: Rc<dyn RendererApi>,
}

impl RenderCommand {
    /// Wrap a backend
    pub fn new(api: Rc<dyn RendererApi>) -> Self {
        Self { api }
    }

    /// Which API the backend speaks
    pub fn api_kind(&self) -> RendererApiKind {
        self.api.kind()
    }

    /// One-time pipeline state setup
    pub fn init(&self) {
        self.api.init();
    }

    /// Set the viewport rectangle
    pub fn set_viewport(&self, x: u32, y: u32, width: u32, height: u32) {
        self.api.set_viewport(x, y, width, height);
    }

    /// Set the clear color
    pub fn set_clear_color(&self, color: Vec4) {
        self.api.set_clear_color(color);
    }

    /// Clear the framebuffer
    pub fn clear(&self) {
        self.api.clear();
    }

    /// Draw a vertex array with its index buffer
    pub fn draw_indexed(&self, vertex_array: &dyn VertexArray) {
        self.api.draw_indexed(vertex_array);
    }

    /// Create a shared vertex buffer
    pub fn create_vertex_buffer(&self, vertices: &[f32]) -> RenderResult<Box<dyn VertexBuffer>> {
        self.api.create_vertex_buffer(vertices)
    }

    /// Create a shared index buffer
    pub fn create_index_buffer(&self, indices: &[u32]) -> RenderResult<Rc<dyn IndexBuffer>> {
        self.api.create_index_buffer(indices).map(Rc::from)
    }

    /// Create a vertex array; wrap it in an `Rc` once it is filled
    pub fn create_vertex_array(&self) -> RenderResult<Box<dyn VertexArray>> {
        self.api.create_vertex_array()
    }

    /// Build a shared shader from separate vertex and fragment sources
    pub fn create_shader(
        &self,
        name: &str,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Rc<dyn Shader>, ShaderError> {
        let sources = ShaderSources::new(vertex_source, fragment_source);
        self.api.create_shader(name, &sources).map(Rc::from)
    }

    /// Build a shared shader from one `#type`-sectioned source
    pub fn create_shader_from_combined(
        &self,
        name: &str,
        source: &str,
    ) -> Result<Rc<dyn Shader>, ShaderError> {
        let sources = ShaderSources::parse(name, source)?;
        self.api.create_shader(name, &sources).map(Rc::from)
    }
}

impl fmt::Debug for RenderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderCommand")
            .field("api", &self.api.kind())
            .finish()
    }
}
