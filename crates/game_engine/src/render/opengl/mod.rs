//! OpenGL backend built on `glow`
//!
//! Every call into `glow::HasContext` is `unsafe`: the caller guarantees the
//! context is current on this thread and handles belong to it. Both hold for
//! objects created through [`OpenGlContext`], which makes its context current
//! once at creation and never hands the `glow::Context` to another thread.

mod buffer;
mod context;
mod renderer_api;
mod shader;
mod ui_renderer;
mod vertex_array;

pub use buffer::{GlIndexBuffer, GlVertexBuffer};
pub use context::OpenGlContext;
pub use renderer_api::GlRendererApi;
pub use shader::GlShader;
pub use ui_renderer::GlUiRenderer;
pub use vertex_array::GlVertexArray;

use super::ShaderDataType;

/// GL component type of an attribute
pub(crate) fn gl_base_type(data_type: ShaderDataType) -> u32 {
    match data_type {
        ShaderDataType::Float
        | ShaderDataType::Float2
        | ShaderDataType::Float3
        | ShaderDataType::Float4
        | ShaderDataType::Mat3
        | ShaderDataType::Mat4 => glow::FLOAT,
        ShaderDataType::Int | ShaderDataType::Int2 | ShaderDataType::Int3 | ShaderDataType::Int4 => glow::INT,
        // GL has no boolean attribute type; bools travel as bytes
        ShaderDataType::Bool => glow::UNSIGNED_BYTE,
    }
}

/// Clamp a byte count into the `i32` range GL expects
pub(crate) fn gl_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_types() {
        assert_eq!(gl_base_type(ShaderDataType::Float3), glow::FLOAT);
        assert_eq!(gl_base_type(ShaderDataType::Mat4), glow::FLOAT);
        assert_eq!(gl_base_type(ShaderDataType::Int2), glow::INT);
        assert_eq!(gl_base_type(ShaderDataType::Bool), glow::UNSIGNED_BYTE);
    }

    #[test]
    fn test_gl_int_saturates() {
        assert_eq!(gl_int(36), 36);
        assert_eq!(gl_int(u32::MAX), i32::MAX);
    }
}
