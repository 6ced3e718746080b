use super::{gl_base_type, gl_int};
use crate::render::{IndexBuffer, RenderError, RenderResult, ShaderDataType, VertexArray, VertexBuffer};
use glow::HasContext;
use std::rc::Rc;

/// Vertex array object
pub struct GlVertexArray {
    gl: Rc<glow::Context>,
    vertex_array: glow::VertexArray,
    vertex_buffers: Vec<Rc<dyn VertexBuffer>>,
    index_buffer: Option<Rc<dyn IndexBuffer>>,
    next_attribute: u32,
}

impl GlVertexArray {
    /// Create an empty VAO
    pub fn new(gl: Rc<glow::Context>) -> RenderResult<Self> {
        let vertex_array = unsafe {
            gl.create_vertex_array()
                .map_err(|message| RenderError::ResourceCreation {
                    kind: "vertex array",
                    message,
                })?
        };

        Ok(Self {
            gl,
            vertex_array,
            vertex_buffers: Vec::new(),
            index_buffer: None,
            next_attribute: 0,
        })
    }
}

impl VertexArray for GlVertexArray {
    fn bind(&self) {
        unsafe { self.gl.bind_vertex_array(Some(self.vertex_array)) }
    }

    fn unbind(&self) {
        unsafe { self.gl.bind_vertex_array(None) }
    }

    fn add_vertex_buffer(&mut self, vertex_buffer: Rc<dyn VertexBuffer>) -> RenderResult<()> {
        let layout = vertex_buffer.layout();
        if layout.is_empty() {
            return Err(RenderError::EmptyLayout);
        }

        self.bind();
        vertex_buffer.bind();

        let stride = gl_int(layout.stride());
        for element in layout {
            let base_type = gl_base_type(element.data_type);
            match element.data_type {
                ShaderDataType::Mat3 | ShaderDataType::Mat4 => {
                    // One vecN attribute per column
                    let columns = if element.data_type == ShaderDataType::Mat3 { 3 } else { 4 };
                    for column in 0..columns {
                        unsafe {
                            self.gl.enable_vertex_attrib_array(self.next_attribute);
                            self.gl.vertex_attrib_pointer_f32(
                                self.next_attribute,
                                gl_int(columns),
                                base_type,
                                element.normalized,
                                stride,
                                gl_int(element.offset + column * columns * 4),
                            );
                        }
                        self.next_attribute += 1;
                    }
                }
                data_type if data_type.is_integer() => {
                    unsafe {
                        self.gl.enable_vertex_attrib_array(self.next_attribute);
                        self.gl.vertex_attrib_pointer_i32(
                            self.next_attribute,
                            gl_int(element.component_count()),
                            base_type,
                            stride,
                            gl_int(element.offset),
                        );
                    }
                    self.next_attribute += 1;
                }
                _ => {
                    unsafe {
                        self.gl.enable_vertex_attrib_array(self.next_attribute);
                        self.gl.vertex_attrib_pointer_f32(
                            self.next_attribute,
                            gl_int(element.component_count()),
                            base_type,
                            element.normalized,
                            stride,
                            gl_int(element.offset),
                        );
                    }
                    self.next_attribute += 1;
                }
            }
        }

        self.vertex_buffers.push(vertex_buffer);
        Ok(())
    }

    fn set_index_buffer(&mut self, index_buffer: Rc<dyn IndexBuffer>) {
        self.bind();
        index_buffer.bind();
        self.index_buffer = Some(index_buffer);
    }

    fn vertex_buffers(&self) -> &[Rc<dyn VertexBuffer>] {
        &self.vertex_buffers
    }

    fn index_buffer(&self) -> Option<&Rc<dyn IndexBuffer>> {
        self.index_buffer.as_ref()
    }
}

impl Drop for GlVertexArray {
    fn drop(&mut self) {
        unsafe { self.gl.delete_vertex_array(self.vertex_array) }
    }
}
