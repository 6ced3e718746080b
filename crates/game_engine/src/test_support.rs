//! Headless stand-ins for the window, graphics backend and layers

use crate::events::{Event, EventCategory, EventDispatcher, EventKind, WindowCloseEvent};
use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use crate::foundation::time::Timestep;
use crate::input::InputState;
use crate::layer::Layer;
use crate::render::{
    BufferLayout, GraphicsContext, IndexBuffer, RenderCommand, RenderError, RenderResult,
    RendererApi, RendererApiKind, Shader, ShaderError, ShaderSources, VertexArray, VertexBuffer,
};
use crate::ui::{ImGuiError, UiRenderer};
use crate::window::{EventCallback, Window};
use std::any::Any;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard, PoisonError};

static UI_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that create an ImGui context
pub fn ui_lock() -> MutexGuard<'static, ()> {
    UI_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A 200x200 ImGui window pinned to the top-left corner
pub fn draw_panel(ui: &imgui::Ui) {
    ui.window("Panel")
        .position([0.0, 0.0], imgui::Condition::Always)
        .size([200.0, 200.0], imgui::Condition::Always)
        .build(|| ui.text("panel"));
}

/// Shared, ordered log of what happened
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

/// Layer that journals every hook as `name:hook`
pub struct RecordingLayer {
    name: String,
    journal: Journal,
    consuming: bool,
}

impl RecordingLayer {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            journal: journal.clone(),
            consuming: false,
        }
    }

    /// Mark every received event handled
    pub fn consuming(mut self) -> Self {
        self.consuming = true;
        self
    }
}

impl Layer for RecordingLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_attach(&mut self) {
        self.journal.record(format!("{}:attach", self.name));
    }

    fn on_detach(&mut self) {
        self.journal.record(format!("{}:detach", self.name));
    }

    fn on_update(&mut self, _timestep: Timestep, _input: &InputState) {
        self.journal.record(format!("{}:update", self.name));
    }

    fn on_imgui_render(&mut self, _ui: &imgui::Ui) {
        self.journal.record(format!("{}:imgui", self.name));
    }

    fn on_event(&mut self, event: &mut Event) {
        self.journal
            .record(format!("{}:event:{}", self.name, event.name()));
        if self.consuming {
            EventDispatcher::new(event).dispatch_category(EventCategory::all(), |_| true);
        }
    }
}

/// Backend that journals calls instead of drawing
#[derive(Default)]
pub struct RecordingApi {
    journal: Journal,
}

impl RecordingApi {
    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }
}

impl RendererApi for RecordingApi {
    fn kind(&self) -> RendererApiKind {
        RendererApiKind::None
    }

    fn init(&self) {
        self.journal.record("init");
    }

    fn set_viewport(&self, x: u32, y: u32, width: u32, height: u32) {
        self.journal
            .record(format!("viewport:{x},{y},{width},{height}"));
    }

    fn set_clear_color(&self, color: Vec4) {
        self.journal
            .record(format!("clear_color:{},{},{},{}", color.x, color.y, color.z, color.w));
    }

    fn clear(&self) {
        self.journal.record("clear");
    }

    fn draw_indexed(&self, vertex_array: &dyn VertexArray) {
        let count = vertex_array.index_buffer().map_or(0, |ib| ib.count());
        self.journal.record(format!("draw_indexed:{count}"));
    }

    fn create_vertex_buffer(&self, _vertices: &[f32]) -> RenderResult<Box<dyn VertexBuffer>> {
        Ok(Box::new(RecordingVertexBuffer::default()))
    }

    fn create_index_buffer(&self, indices: &[u32]) -> RenderResult<Box<dyn IndexBuffer>> {
        Ok(Box::new(RecordingIndexBuffer(indices.len() as u32)))
    }

    fn create_vertex_array(&self) -> RenderResult<Box<dyn VertexArray>> {
        Ok(Box::new(RecordingVertexArray::default()))
    }

    fn create_shader(&self, name: &str, _sources: &ShaderSources) -> Result<Box<dyn Shader>, ShaderError> {
        Ok(Box::new(RecordingShader::new(name, &self.journal)))
    }
}

#[derive(Default)]
pub struct RecordingVertexBuffer {
    layout: BufferLayout,
}

impl VertexBuffer for RecordingVertexBuffer {
    fn bind(&self) {}
    fn unbind(&self) {}

    fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    fn set_layout(&mut self, layout: BufferLayout) {
        self.layout = layout;
    }
}

pub struct RecordingIndexBuffer(pub u32);

impl IndexBuffer for RecordingIndexBuffer {
    fn bind(&self) {}
    fn unbind(&self) {}

    fn count(&self) -> u32 {
        self.0
    }
}

#[derive(Default)]
pub struct RecordingVertexArray {
    vertex_buffers: Vec<Rc<dyn VertexBuffer>>,
    index_buffer: Option<Rc<dyn IndexBuffer>>,
}

impl RecordingVertexArray {
    /// Vertex array whose index buffer holds `index_count` indices
    pub fn new(index_count: u32) -> Self {
        Self {
            vertex_buffers: Vec::new(),
            index_buffer: Some(Rc::new(RecordingIndexBuffer(index_count))),
        }
    }
}

impl VertexArray for RecordingVertexArray {
    fn bind(&self) {}
    fn unbind(&self) {}

    fn add_vertex_buffer(&mut self, vertex_buffer: Rc<dyn VertexBuffer>) -> RenderResult<()> {
        if vertex_buffer.layout().is_empty() {
            return Err(RenderError::EmptyLayout);
        }
        self.vertex_buffers.push(vertex_buffer);
        Ok(())
    }

    fn set_index_buffer(&mut self, index_buffer: Rc<dyn IndexBuffer>) {
        self.index_buffer = Some(index_buffer);
    }

    fn vertex_buffers(&self) -> &[Rc<dyn VertexBuffer>] {
        &self.vertex_buffers
    }

    fn index_buffer(&self) -> Option<&Rc<dyn IndexBuffer>> {
        self.index_buffer.as_ref()
    }
}

/// Shader that journals binds and uploads as `name:kind:uniform`
pub struct RecordingShader {
    name: String,
    journal: Journal,
    mat4s: RefCell<HashMap<String, Mat4>>,
    float4s: RefCell<HashMap<String, Vec4>>,
}

impl RecordingShader {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            journal: journal.clone(),
            mat4s: RefCell::default(),
            float4s: RefCell::default(),
        }
    }

    pub fn last_mat4(&self, uniform: &str) -> Option<Mat4> {
        self.mat4s.borrow().get(uniform).copied()
    }

    pub fn last_float4(&self, uniform: &str) -> Option<Vec4> {
        self.float4s.borrow().get(uniform).copied()
    }

    fn upload(&self, kind: &str, uniform: &str) {
        self.journal
            .record(format!("{}:{}:{}", self.name, kind, uniform));
    }
}

impl Shader for RecordingShader {
    fn name(&self) -> &str {
        &self.name
    }

    fn bind(&self) {
        self.journal.record(format!("{}:bind", self.name));
    }

    fn unbind(&self) {
        self.journal.record(format!("{}:unbind", self.name));
    }

    fn upload_uniform_int(&self, name: &str, _value: i32) {
        self.upload("int", name);
    }

    fn upload_uniform_float(&self, name: &str, _value: f32) {
        self.upload("float", name);
    }

    fn upload_uniform_float2(&self, name: &str, _value: Vec2) {
        self.upload("float2", name);
    }

    fn upload_uniform_float3(&self, name: &str, _value: Vec3) {
        self.upload("float3", name);
    }

    fn upload_uniform_float4(&self, name: &str, value: Vec4) {
        self.upload("float4", name);
        self.float4s.borrow_mut().insert(name.to_string(), value);
    }

    fn upload_uniform_mat3(&self, name: &str, _value: &crate::foundation::math::Mat3) {
        self.upload("mat3", name);
    }

    fn upload_uniform_mat4(&self, name: &str, value: &Mat4) {
        self.upload("mat4", name);
        self.mat4s.borrow_mut().insert(name.to_string(), *value);
    }
}

/// Graphics context over a [`RecordingApi`], without a UI renderer
pub struct MockGraphicsContext {
    api: Rc<RecordingApi>,
}

impl MockGraphicsContext {
    pub fn new(api: Rc<RecordingApi>) -> Self {
        Self { api }
    }
}

impl Default for MockGraphicsContext {
    fn default() -> Self {
        Self::new(Rc::new(RecordingApi::default()))
    }
}

impl GraphicsContext for MockGraphicsContext {
    fn swap_buffers(&mut self) {
        self.api.journal.record("swap");
    }

    fn render_command(&self) -> RenderCommand {
        RenderCommand::new(self.api.clone())
    }

    fn create_ui_renderer(
        &self,
        _imgui: &mut imgui::Context,
    ) -> Result<Option<Box<dyn UiRenderer>>, ImGuiError> {
        Ok(None)
    }
}

/// Window that replays scripted events, one batch per frame
///
/// Once the script runs out every poll delivers `WindowClose`, so a run loop
/// driven by it always terminates.
pub struct MockWindow {
    frames: VecDeque<Vec<Event>>,
    callback: Option<EventCallback>,
    context: MockGraphicsContext,
    width: u32,
    height: u32,
    vsync: bool,
    framebuffer_scale: u32,
    scale_change: Option<(usize, u32)>,
    polls: usize,
}

impl MockWindow {
    pub fn new(api: Rc<RecordingApi>, frames: Vec<Vec<Event>>) -> Self {
        Self {
            frames: frames.into(),
            callback: None,
            context: MockGraphicsContext::new(api),
            width: 1280,
            height: 720,
            vsync: true,
            framebuffer_scale: 1,
            scale_change: None,
            polls: 0,
        }
    }

    /// Framebuffer pixels per screen coordinate
    pub fn with_framebuffer_scale(mut self, scale: u32) -> Self {
        self.framebuffer_scale = scale;
        self
    }

    /// Switch to `scale` once `polls` polls have run
    pub fn with_scale_change_after(mut self, polls: usize, scale: u32) -> Self {
        self.scale_change = Some((polls, scale));
        self
    }
}

impl Window for MockWindow {
    fn on_update(&mut self) {
        let events = self
            .frames
            .pop_front()
            .unwrap_or_else(|| vec![Event::new(WindowCloseEvent)]);

        for mut event in events {
            if let EventKind::WindowResize(e) = event.kind() {
                self.width = e.width();
                self.height = e.height();
            }
            if let Some(callback) = self.callback.as_mut() {
                callback(&mut event);
            }
        }
        self.polls += 1;
        if let Some((after, scale)) = self.scale_change {
            if self.polls == after {
                self.framebuffer_scale = scale;
            }
        }
        self.context.swap_buffers();
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        (self.width * self.framebuffer_scale, self.height * self.framebuffer_scale)
    }

    fn set_event_callback(&mut self, callback: EventCallback) {
        self.callback = Some(callback);
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.vsync = enabled;
    }

    fn is_vsync(&self) -> bool {
        self.vsync
    }

    fn graphics_context(&self) -> &dyn GraphicsContext {
        &self.context
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
