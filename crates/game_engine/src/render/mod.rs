//! Rendering subsystem
//!
//! A thin, backend-agnostic façade over the graphics API:
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │   Renderer (scene + submit)     │
//! └─────────────┬───────────────────┘
//!               │ issues
//!      ┌────────▼────────┐
//!      │  RenderCommand  │ ← cloneable handle
//!      └────────┬────────┘
//!               │ forwards to
//!      ┌────────▼────────┐
//!      │ dyn RendererApi │ ← chosen once at context creation
//!      └────────┬────────┘
//!               │ implemented by
//!      ┌────────▼────────┐
//!      │ opengl::*       │ ← glow-based backend
//!      └─────────────────┘
//! ```
//!
//! Resources (shaders, buffers, vertex arrays) are created through the
//! [`RenderCommand`] and shared as `Rc` handles, so call sites never need to
//! know which backend produced them.

pub mod buffer;
pub mod camera;
pub mod context;
pub mod render_command;
pub mod renderer;
pub mod renderer_api;
pub mod shader;
pub mod vertex_array;

#[allow(unsafe_code)]
pub mod opengl;

pub use buffer::{BufferElement, BufferLayout, IndexBuffer, ShaderDataType, VertexBuffer};
pub use camera::OrthographicCamera;
pub use context::GraphicsContext;
pub use render_command::RenderCommand;
pub use renderer::Renderer;
pub use renderer_api::{RendererApi, RendererApiKind};
pub use shader::{Shader, ShaderError, ShaderSources, ShaderStage};
pub use vertex_array::VertexArray;

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The selected renderer API has no backend
    #[error("Renderer API {0:?} is not supported")]
    UnsupportedApi(RendererApiKind),

    /// Graphics context creation or function loading failed
    #[error("Graphics context creation failed: {0}")]
    ContextCreation(String),

    /// A GPU resource could not be allocated
    #[error("Failed to create {kind}: {message}")]
    ResourceCreation {
        /// Resource kind, e.g. "vertex buffer"
        kind: &'static str,
        /// Backend message
        message: String,
    },

    /// A vertex buffer without a layout was added to a vertex array
    #[error("Vertex buffer has no layout")]
    EmptyLayout,

    /// Shader failure
    #[error(transparent)]
    Shader(#[from] ShaderError),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
