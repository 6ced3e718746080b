use game_engine::foundation::math::translate_scale;
use game_engine::prelude::*;
use std::rc::Rc;

const FLAT_COLOR_SHADER: &str = include_str!("../assets/shaders/flat_color.glsl");
const VERTEX_COLOR_VS: &str = include_str!("../assets/shaders/vertex_color.vert");
const VERTEX_COLOR_FS: &str = include_str!("../assets/shaders/vertex_color.frag");

const GRID_SIZE: u8 = 20;
const GRID_SPACING: f32 = 0.11;
const SQUARE_SCALE: f32 = 0.1;

/// Camera pose driven by held keys
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    position: Vec3,
    rotation: f32,
    move_speed: f32,
    rotation_speed: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: 0.0,
            move_speed: 5.0,
            rotation_speed: 180.0,
        }
    }
}

impl CameraController {
    /// Arrow keys pan, A/D rotate
    pub fn update(&mut self, timestep: Timestep, input: &InputState) {
        let step = self.move_speed * timestep;
        if input.is_key_pressed(KeyCode::LEFT) {
            self.position.x -= step;
        } else if input.is_key_pressed(KeyCode::RIGHT) {
            self.position.x += step;
        }

        if input.is_key_pressed(KeyCode::DOWN) {
            self.position.y -= step;
        } else if input.is_key_pressed(KeyCode::UP) {
            self.position.y += step;
        }

        if input.is_key_pressed(KeyCode::A) {
            self.rotation += self.rotation_speed * timestep;
        }
        if input.is_key_pressed(KeyCode::D) {
            self.rotation -= self.rotation_speed * timestep;
        }
    }

    /// Apply the pose to a camera
    pub fn apply(&self, camera: &mut OrthographicCamera) {
        camera.set_position(self.position);
        camera.set_rotation(self.rotation);
    }
}

/// Draws a vertex-colored triangle over a grid of flat-colored squares
pub struct ExampleLayer {
    renderer: Renderer,
    camera: OrthographicCamera,
    controller: CameraController,
    triangle_shader: Rc<dyn Shader>,
    triangle: Rc<dyn VertexArray>,
    flat_color_shader: Rc<dyn Shader>,
    square: Rc<dyn VertexArray>,
    even_color: [f32; 4],
    odd_color: [f32; 4],
}

impl ExampleLayer {
    pub fn new(command: RenderCommand) -> Result<Self, EngineError> {
        #[rustfmt::skip]
        let triangle_vertices: [f32; 3 * 7] = [
            -0.5, -0.5, 0.0, 0.8, 0.2, 0.8, 1.0,
             0.5, -0.5, 0.0, 0.2, 0.3, 0.8, 1.0,
             0.0,  0.5, 0.0, 0.8, 0.8, 0.2, 1.0,
        ];
        let triangle = build_mesh(
            &command,
            &triangle_vertices,
            BufferLayout::new(vec![
                BufferElement::new(ShaderDataType::Float3, "a_Position"),
                BufferElement::new(ShaderDataType::Float4, "a_Color"),
            ]),
            &[0, 1, 2],
        )?;

        #[rustfmt::skip]
        let square_vertices: [f32; 3 * 4] = [
            -0.75, -0.75, 0.0,
             0.75, -0.75, 0.0,
             0.75,  0.75, 0.0,
            -0.75,  0.75, 0.0,
        ];
        let square = build_mesh(
            &command,
            &square_vertices,
            BufferLayout::new(vec![BufferElement::new(ShaderDataType::Float3, "a_Position")]),
            &[0, 1, 2, 2, 3, 0],
        )?;

        let triangle_shader = command.create_shader("VertexColor", VERTEX_COLOR_VS, VERTEX_COLOR_FS)?;
        let flat_color_shader = command.create_shader_from_combined("FlatColor", FLAT_COLOR_SHADER)?;

        Ok(Self {
            renderer: Renderer::new(command),
            camera: OrthographicCamera::new(-1.6, 1.6, -0.9, 0.9),
            controller: CameraController::default(),
            triangle_shader,
            triangle,
            flat_color_shader,
            square,
            even_color: [0.8, 0.2, 0.3, 1.0],
            odd_color: [0.2, 0.3, 0.8, 1.0],
        })
    }
}

fn build_mesh(
    command: &RenderCommand,
    vertices: &[f32],
    layout: BufferLayout,
    indices: &[u32],
) -> Result<Rc<dyn VertexArray>, EngineError> {
    let mut vertex_buffer = command.create_vertex_buffer(vertices)?;
    vertex_buffer.set_layout(layout);

    let mut vertex_array = command.create_vertex_array()?;
    vertex_array.add_vertex_buffer(Rc::from(vertex_buffer))?;
    vertex_array.set_index_buffer(command.create_index_buffer(indices)?);
    Ok(Rc::from(vertex_array))
}

impl Layer for ExampleLayer {
    fn name(&self) -> &str {
        "Example"
    }

    fn on_attach(&mut self) {
        app_info!("Example layer attached");
    }

    fn on_update(&mut self, timestep: Timestep, input: &InputState) {
        self.controller.update(timestep, input);
        self.controller.apply(&mut self.camera);

        self.renderer.command().clear();

        self.renderer.begin_scene(&self.camera);

        self.flat_color_shader.bind();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let position = Vec3::new(f32::from(x) * GRID_SPACING, f32::from(y) * GRID_SPACING, 0.0);
                let color = if x % 2 == 0 { self.even_color } else { self.odd_color };
                self.flat_color_shader
                    .upload_uniform_float4("u_Color", Vec4::from(color));
                self.renderer.submit(
                    self.flat_color_shader.as_ref(),
                    self.square.as_ref(),
                    &translate_scale(position, SQUARE_SCALE),
                );
            }
        }

        self.renderer.submit(
            self.triangle_shader.as_ref(),
            self.triangle.as_ref(),
            &Mat4::identity(),
        );

        self.renderer.end_scene();
    }

    fn on_imgui_render(&mut self, ui: &imgui::Ui) {
        ui.window("Settings").build(|| {
            ui.color_edit4("Even columns", &mut self.even_color);
            ui.color_edit4("Odd columns", &mut self.odd_color);
            ui.text(format!(
                "Camera ({:.2}, {:.2}) {:.0} deg",
                self.controller.position.x, self.controller.position.y, self.controller.rotation
            ));
        });
    }

    fn on_event(&mut self, event: &mut Event) {
        app_trace!("{}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use game_engine::events::{KeyPressedEvent, KeyReleasedEvent};

    fn held(keys: &[KeyCode]) -> InputState {
        let mut input = InputState::new();
        for &key in keys {
            input.observe(&Event::new(KeyPressedEvent::new(key, 0)));
        }
        input
    }

    #[test]
    fn test_idle_camera_stays_put() {
        let mut controller = CameraController::default();
        controller.update(Timestep::from_seconds(1.0), &InputState::new());
        assert_eq!(controller, CameraController::default());
    }

    #[test]
    fn test_arrow_keys_pan_at_move_speed() {
        let mut controller = CameraController::default();
        controller.update(Timestep::from_seconds(0.5), &held(&[KeyCode::RIGHT, KeyCode::UP]));
        assert_relative_eq!(controller.position.x, 2.5);
        assert_relative_eq!(controller.position.y, 2.5);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut controller = CameraController::default();
        controller.update(Timestep::from_seconds(0.1), &held(&[KeyCode::LEFT, KeyCode::RIGHT]));
        assert_relative_eq!(controller.position.x, -0.5);
    }

    #[test]
    fn test_a_and_d_rotate() {
        let mut controller = CameraController::default();
        controller.update(Timestep::from_seconds(0.5), &held(&[KeyCode::A]));
        assert_relative_eq!(controller.rotation, 90.0);

        let mut input = held(&[KeyCode::A, KeyCode::D]);
        controller.update(Timestep::from_seconds(0.5), &input);
        assert_relative_eq!(controller.rotation, 90.0);

        input.observe(&Event::new(KeyReleasedEvent::new(KeyCode::A)));
        controller.update(Timestep::from_seconds(0.25), &input);
        assert_relative_eq!(controller.rotation, 45.0);
    }

    #[test]
    fn test_apply_moves_camera() {
        let mut controller = CameraController::default();
        controller.update(Timestep::from_seconds(0.2), &held(&[KeyCode::DOWN]));
        let mut camera = OrthographicCamera::new(-1.6, 1.6, -0.9, 0.9);
        controller.apply(&mut camera);
        assert_relative_eq!(camera.position().y, -1.0);
    }
}
