//! # Game Engine
//!
//! A small layered application framework: a GLFW window with an OpenGL
//! context, typed event dispatch, a layer stack, a thin renderer façade and
//! a Dear ImGui overlay.
//!
//! ## Architecture
//!
//! - **Events**: closed set of window, keyboard, mouse and application
//!   events with category flags, routed by an [`events::EventDispatcher`]
//! - **Layers**: [`layer::Layer`] hooks for update, UI and events, ordered
//!   by a [`layer::LayerStack`] with overlays on top
//! - **Window**: [`window::Window`] translating native events and owning the
//!   graphics context
//! - **Render**: [`render::Renderer`] and [`render::RenderCommand`] over a
//!   [`render::RendererApi`] backend
//! - **UI**: [`ui::ImGuiLayer`] driving Dear ImGui each frame
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use game_engine::prelude::*;
//!
//! struct Hello;
//!
//! impl Layer for Hello {
//!     fn name(&self) -> &str {
//!         "Hello"
//!     }
//!
//!     fn on_event(&mut self, event: &mut Event) {
//!         app_trace!("{}", event);
//!     }
//! }
//!
//! fn main() -> Result<(), EngineError> {
//!     let config = ApplicationConfig::new("Hello");
//!     game_engine::entry::run(&config, |app| {
//!         app.push_layer(Box::new(Hello));
//!         Ok(())
//!     })
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]
#![deny(unsafe_code)]

pub mod core;
pub mod entry;
pub mod events;
pub mod foundation;
pub mod input;
pub mod layer;
pub mod render;
pub mod ui;
pub mod window;

mod application;
mod error;

#[cfg(test)]
mod test_support;

pub use application::Application;
pub use error::{EngineError, EngineResult};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        app_debug, app_error, app_info, app_trace, app_warn,
        core::config::{ApplicationConfig, Config, ImGuiConfig, RendererConfig, WindowConfig},
        events::{Event, EventCategory, EventDispatcher, EventKind},
        foundation::{
            math::{Mat4, Vec3, Vec4},
            time::Timestep,
        },
        input::{InputState, KeyCode, MouseButton},
        layer::Layer,
        render::{
            BufferElement, BufferLayout, OrthographicCamera, RenderCommand, Renderer, Shader,
            ShaderDataType, VertexArray,
        },
        Application, EngineError,
    };
}
