use crate::render::{BufferLayout, IndexBuffer, RenderError, RenderResult, VertexBuffer};
use glow::HasContext;
use std::rc::Rc;

/// `GL_ARRAY_BUFFER` with a static vertex upload
pub struct GlVertexBuffer {
    gl: Rc<glow::Context>,
    buffer: glow::Buffer,
    layout: BufferLayout,
}

impl GlVertexBuffer {
    /// Upload `vertices` into a new buffer
    pub fn new(gl: Rc<glow::Context>, vertices: &[f32]) -> RenderResult<Self> {
        let buffer = unsafe {
            let buffer = gl
                .create_buffer()
                .map_err(|message| RenderError::ResourceCreation {
                    kind: "vertex buffer",
                    message,
                })?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );
            buffer
        };

        Ok(Self {
            gl,
            buffer,
            layout: BufferLayout::default(),
        })
    }
}

impl VertexBuffer for GlVertexBuffer {
    fn bind(&self) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.buffer)) }
    }

    fn unbind(&self) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, None) }
    }

    fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    fn set_layout(&mut self, layout: BufferLayout) {
        self.layout = layout;
    }
}

impl Drop for GlVertexBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.delete_buffer(self.buffer) }
    }
}

/// `GL_ELEMENT_ARRAY_BUFFER` of `u32` indices
pub struct GlIndexBuffer {
    gl: Rc<glow::Context>,
    buffer: glow::Buffer,
    count: u32,
}

impl GlIndexBuffer {
    /// Upload `indices` into a new buffer
    pub fn new(gl: Rc<glow::Context>, indices: &[u32]) -> RenderResult<Self> {
        let count = u32::try_from(indices.len()).map_err(|_| RenderError::ResourceCreation {
            kind: "index buffer",
            message: format!("{} indices exceed the u32 range", indices.len()),
        })?;

        let buffer = unsafe {
            let buffer = gl
                .create_buffer()
                .map_err(|message| RenderError::ResourceCreation {
                    kind: "index buffer",
                    message,
                })?;
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(buffer));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );
            buffer
        };

        Ok(Self { gl, buffer, count })
    }
}

impl IndexBuffer for GlIndexBuffer {
    fn bind(&self) {
        unsafe { self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.buffer)) }
    }

    fn unbind(&self) {
        unsafe { self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None) }
    }

    fn count(&self) -> u32 {
        self.count
    }
}

impl Drop for GlIndexBuffer {
    fn drop(&mut self) {
        unsafe { self.gl.delete_buffer(self.buffer) }
    }
}
