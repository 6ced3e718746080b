use super::{gl_int, GlIndexBuffer, GlShader, GlVertexArray, GlVertexBuffer};
use crate::engine_warn;
use crate::foundation::math::Vec4;
use crate::render::{
    IndexBuffer, RenderResult, RendererApi, RendererApiKind, Shader, ShaderError, ShaderSources,
    VertexArray, VertexBuffer,
};
use glow::HasContext;
use std::rc::Rc;

/// OpenGL implementation of [`RendererApi`]
pub struct GlRendererApi {
    gl: Rc<glow::Context>,
}

impl GlRendererApi {
    /// Backend over a loaded context
    pub fn new(gl: Rc<glow::Context>) -> Self {
        Self { gl }
    }
}

impl RendererApi for GlRendererApi {
    fn kind(&self) -> RendererApiKind {
        RendererApiKind::OpenGl
    }

    fn init(&self) {
        unsafe {
            self.gl.enable(glow::BLEND);
            self.gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
        }
    }

    fn set_viewport(&self, x: u32, y: u32, width: u32, height: u32) {
        unsafe {
            self.gl
                .viewport(gl_int(x), gl_int(y), gl_int(width), gl_int(height));
        }
    }

    fn set_clear_color(&self, color: Vec4) {
        unsafe { self.gl.clear_color(color.x, color.y, color.z, color.w) }
    }

    fn clear(&self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) }
    }

    fn draw_indexed(&self, vertex_array: &dyn VertexArray) {
        let Some(index_buffer) = vertex_array.index_buffer() else {
            engine_warn!("draw_indexed called on a vertex array without an index buffer");
            return;
        };
        vertex_array.bind();
        unsafe {
            self.gl.draw_elements(
                glow::TRIANGLES,
                gl_int(index_buffer.count()),
                glow::UNSIGNED_INT,
                0,
            );
        }
    }

    fn create_vertex_buffer(&self, vertices: &[f32]) -> RenderResult<Box<dyn VertexBuffer>> {
        Ok(Box::new(GlVertexBuffer::new(self.gl.clone(), vertices)?))
    }

    fn create_index_buffer(&self, indices: &[u32]) -> RenderResult<Box<dyn IndexBuffer>> {
        Ok(Box::new(GlIndexBuffer::new(self.gl.clone(), indices)?))
    }

    fn create_vertex_array(&self) -> RenderResult<Box<dyn VertexArray>> {
        Ok(Box::new(GlVertexArray::new(self.gl.clone())?))
    }

    fn create_shader(&self, name: &str, sources: &ShaderSources) -> Result<Box<dyn Shader>, ShaderError> {
        Ok(Box::new(GlShader::new(self.gl.clone(), name, sources)?))
    }
}
