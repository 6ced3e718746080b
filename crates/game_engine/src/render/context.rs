//! Graphics context bound to a native window

use super::RenderCommand;
use crate::ui::{ImGuiError, UiRenderer};

/// Per-window graphics context
///
/// Created by the window during construction; owns the loaded API and
/// presents frames.
pub trait GraphicsContext {
    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Handle to the backend for draw calls and resource creation
    fn render_command(&self) -> RenderCommand;

    /// Create a renderer for Dear ImGui draw data, if the backend has one
    fn create_ui_renderer(
        &self,
        imgui: &mut imgui::Context,
    ) -> Result<Option<Box<dyn UiRenderer>>, ImGuiError>;
}
