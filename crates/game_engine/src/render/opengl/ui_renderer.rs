use crate::ui::{ImGuiError, UiRenderer};
use imgui_glow_renderer::{Renderer, SimpleTextureMap};
use std::rc::Rc;

/// Draws Dear ImGui output with `imgui-glow-renderer`
pub struct GlUiRenderer {
    gl: Rc<glow::Context>,
    renderer: Renderer,
    textures: SimpleTextureMap,
}

impl GlUiRenderer {
    /// Upload the font atlas and build the UI pipeline
    pub fn new(gl: Rc<glow::Context>, imgui: &mut imgui::Context) -> Result<Self, ImGuiError> {
        let mut textures = SimpleTextureMap::default();
        let renderer = Renderer::initialize(&gl, imgui, &mut textures, false)
            .map_err(|e| ImGuiError::Renderer(e.to_string()))?;

        Ok(Self {
            gl,
            renderer,
            textures,
        })
    }
}

impl UiRenderer for GlUiRenderer {
    fn render(&mut self, draw_data: &imgui::DrawData) -> Result<(), ImGuiError> {
        self.renderer
            .render(&self.gl, &self.textures, draw_data)
            .map_err(|e| ImGuiError::Renderer(e.to_string()))
    }
}

impl Drop for GlUiRenderer {
    fn drop(&mut self) {
        self.renderer.destroy(&self.gl);
    }
}
