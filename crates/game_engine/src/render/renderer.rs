//! Scene-level submission

use super::{OrthographicCamera, RenderCommand, Shader, VertexArray};
use crate::foundation::math::Mat4;

/// Uniform name of the camera matrix
pub const PROJECTION_VIEW_UNIFORM: &str = "u_ProjectionView";
/// Uniform name of the per-draw model matrix
pub const TRANSFORM_UNIFORM: &str = "u_Transform";

#[derive(Debug, Clone, PartialEq)]
struct SceneData {
    projection_view: Mat4,
}

/// Submits geometry for the current scene
///
/// ```text
/// begin_scene(camera)
///     submit(shader, vertex_array, transform)  × N
/// end_scene()
/// ```
///
/// Draws are issued immediately; the scene only carries the camera matrix.
#[derive(Debug, Clone)]
pub struct Renderer {
    command: RenderCommand,
    scene: SceneData,
}

impl Renderer {
    /// Renderer drawing through the given backend
    pub fn new(command: RenderCommand) -> Self {
        Self {
            command,
            scene: SceneData {
                projection_view: Mat4::identity(),
            },
        }
    }

    /// Underlying command handle
    pub fn command(&self) -> &RenderCommand {
        &self.command
    }

    /// Capture the camera matrix for subsequent submissions
    pub fn begin_scene(&mut self, camera: &OrthographicCamera) {
        self.scene.projection_view = *camera.projection_view();
    }

    /// Close the scene
    pub fn end_scene(&mut self) {}

    /// Bind the shader, upload camera and model matrices, draw
    pub fn submit(&self, shader: &dyn Shader, vertex_array: &dyn VertexArray, transform: &Mat4) {
        shader.bind();
        shader.upload_uniform_mat4(PROJECTION_VIEW_UNIFORM, &self.scene.projection_view);
        shader.upload_uniform_mat4(TRANSFORM_UNIFORM, transform);
        self.command.draw_indexed(vertex_array);
    }

    /// Resize the viewport to the new framebuffer size
    pub fn on_window_resize(&self, width: u32, height: u32) {
        self.command.set_viewport(0, 0, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::test_support::{RecordingApi, RecordingShader, RecordingVertexArray};
    use std::rc::Rc;

    #[test]
    fn test_submit_uploads_matrices_then_draws() {
        let api = Rc::new(RecordingApi::default());
        let mut renderer = Renderer::new(RenderCommand::new(api.clone()));
        let mut camera = OrthographicCamera::new(-1.0, 1.0, -1.0, 1.0);
        camera.set_position(Vec3::new(0.5, 0.0, 0.0));

        let shader = RecordingShader::new("flat", &api.journal());
        let vertex_array = RecordingVertexArray::new(6);

        renderer.begin_scene(&camera);
        renderer.submit(&shader, &vertex_array, &Mat4::identity());
        renderer.end_scene();

        assert_eq!(
            api.journal().entries(),
            vec![
                "flat:bind",
                "flat:mat4:u_ProjectionView",
                "flat:mat4:u_Transform",
                "draw_indexed:6",
            ]
        );
        assert_eq!(
            shader.last_mat4(PROJECTION_VIEW_UNIFORM),
            Some(*camera.projection_view())
        );
    }

    #[test]
    fn test_resize_sets_viewport() {
        let api = Rc::new(RecordingApi::default());
        let renderer = Renderer::new(RenderCommand::new(api.clone()));
        renderer.on_window_resize(800, 600);
        assert_eq!(api.journal().entries(), vec!["viewport:0,0,800,600"]);
    }
}
