//! Vertex array: vertex buffers plus one index buffer

use super::{IndexBuffer, RenderResult, VertexBuffer};
use std::rc::Rc;

/// Binds vertex buffers to attribute slots and remembers the index buffer
///
/// Attribute slots are assigned in the order buffers and their layout
/// elements are added; a vertex array owns shared handles so the same
/// buffer may feed several arrays.
pub trait VertexArray {
    /// Bind the array and its index buffer
    fn bind(&self);

    /// Unbind
    fn unbind(&self);

    /// Attach a vertex buffer, enabling one attribute per layout element
    ///
    /// Fails with [`RenderError::EmptyLayout`](super::RenderError::EmptyLayout)
    /// when the buffer has no layout.
    fn add_vertex_buffer(&mut self, vertex_buffer: Rc<dyn VertexBuffer>) -> RenderResult<()>;

    /// Replace the index buffer
    fn set_index_buffer(&mut self, index_buffer: Rc<dyn IndexBuffer>);

    /// Vertex buffers in attachment order
    fn vertex_buffers(&self) -> &[Rc<dyn VertexBuffer>];

    /// Current index buffer
    fn index_buffer(&self) -> Option<&Rc<dyn IndexBuffer>>;
}
