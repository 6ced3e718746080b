//! Backend contract for draw commands and resource creation

use super::{IndexBuffer, RenderResult, Shader, ShaderError, ShaderSources, VertexArray, VertexBuffer};
use crate::foundation::math::Vec4;
use serde::{Deserialize, Serialize};

/// Graphics API a backend implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RendererApiKind {
    /// No graphics API; rejected at context creation
    None,
    /// OpenGL 4.1 core profile
    #[default]
    OpenGl,
}

/// Graphics backend
///
/// Implementations are created once by the [`GraphicsContext`] and shared
/// through a [`RenderCommand`](super::RenderCommand). All methods take
/// `&self`: the backend is a handle to state owned by the driver.
///
/// [`GraphicsContext`]: super::GraphicsContext
pub trait RendererApi {
    /// Which API this backend speaks
    fn kind(&self) -> RendererApiKind;

    /// One-time pipeline state setup (blending, depth test)
    fn init(&self);

    /// Set the viewport rectangle in framebuffer pixels
    fn set_viewport(&self, x: u32, y: u32, width: u32, height: u32);

    /// Set the color used by [`clear`](Self::clear)
    fn set_clear_color(&self, color: Vec4);

    /// Clear the color and depth buffers
    fn clear(&self);

    /// Draw every index of the vertex array's index buffer as triangles
    fn draw_indexed(&self, vertex_array: &dyn VertexArray);

    /// Upload vertex data into a new vertex buffer
    fn create_vertex_buffer(&self, vertices: &[f32]) -> RenderResult<Box<dyn VertexBuffer>>;

    /// Upload index data into a new index buffer
    fn create_index_buffer(&self, indices: &[u32]) -> RenderResult<Box<dyn IndexBuffer>>;

    /// Create an empty vertex array
    fn create_vertex_array(&self) -> RenderResult<Box<dyn VertexArray>>;

    /// Compile and link a shader program
    fn create_shader(&self, name: &str, sources: &ShaderSources) -> Result<Box<dyn Shader>, ShaderError>;
}
