//! Layers and the layer stack
//!
//! A layer is one participant in the per-frame pipeline. Every hook has an
//! empty default, so a layer only implements the hooks it cares about.

mod stack;

pub use stack::LayerStack;

use crate::events::Event;
use crate::foundation::time::Timestep;
use crate::input::InputState;

/// Participant in the update / UI / event pipeline
pub trait Layer {
    /// Debug name, also used to locate the layer when popping it
    fn name(&self) -> &str {
        "Layer"
    }

    /// Called once when the layer enters the stack
    fn on_attach(&mut self) {}

    /// Called once when the layer leaves the stack
    fn on_detach(&mut self) {}

    /// Called once per frame while attached
    fn on_update(&mut self, _timestep: Timestep, _input: &InputState) {}

    /// Called once per frame during the ImGui pass
    fn on_imgui_render(&mut self, _ui: &imgui::Ui) {}

    /// Called for every event routed to this layer while attached
    ///
    /// Use an [`EventDispatcher`](crate::events::EventDispatcher) to react to
    /// specific event types and mark the event handled.
    fn on_event(&mut self, _event: &mut Event) {}
}
