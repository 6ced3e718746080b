//! Top-level engine error

use crate::core::config::ConfigError;
use crate::render::{RenderError, ShaderError};
use crate::ui::ImGuiError;
use crate::window::WindowError;
use thiserror::Error;

/// Any failure that reaches the entry point
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window or platform failure
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Graphics backend failure
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Shader build failure
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// UI failure
    #[error(transparent)]
    ImGui(#[from] ImGuiError),

    /// Configuration failure
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
