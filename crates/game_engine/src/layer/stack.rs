//! Ordered layer storage with a layer region and an overlay region

use super::Layer;

/// Ordered collection of owned layers
///
/// Layers live in `layers[..insert_index]` and overlays in
/// `layers[insert_index..]`. Forward iteration yields layers then overlays,
/// each in push order; event delivery walks the same sequence in reverse so
/// the newest overlay sees input first.
pub struct LayerStack {
    layers: Vec<Box<dyn Layer>>,
    insert_index: usize,
}

impl LayerStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            insert_index: 0,
        }
    }

    /// Insert a layer after every existing layer and before all overlays
    pub fn push_layer(&mut self, mut layer: Box<dyn Layer>) {
        crate::engine_debug!("Pushing layer '{}'", layer.name());
        layer.on_attach();
        self.layers.insert(self.insert_index, layer);
        self.insert_index += 1;
    }

    /// Append an overlay after every existing overlay
    pub fn push_overlay(&mut self, mut overlay: Box<dyn Layer>) {
        crate::engine_debug!("Pushing overlay '{}'", overlay.name());
        overlay.on_attach();
        self.layers.push(overlay);
    }

    /// Remove the most recently pushed layer with the given name
    ///
    /// Only the layer region is searched. The layer is detached and handed
    /// back to the caller.
    pub fn pop_layer(&mut self, name: &str) -> Option<Box<dyn Layer>> {
        let position = self.layers[..self.insert_index]
            .iter()
            .rposition(|layer| layer.name() == name)?;
        let mut layer = self.layers.remove(position);
        self.insert_index -= 1;
        layer.on_detach();
        Some(layer)
    }

    /// Remove the most recently pushed overlay with the given name
    ///
    /// Only the overlay region is searched.
    pub fn pop_overlay(&mut self, name: &str) -> Option<Box<dyn Layer>> {
        let position = self.layers[self.insert_index..]
            .iter()
            .rposition(|layer| layer.name() == name)?;
        let mut overlay = self.layers.remove(self.insert_index + position);
        overlay.on_detach();
        Some(overlay)
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the stack holds nothing
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of entries in the layer region
    pub fn layer_count(&self) -> usize {
        self.insert_index
    }

    /// Number of entries in the overlay region
    pub fn overlay_count(&self) -> usize {
        self.layers.len() - self.insert_index
    }

    /// Layers then overlays, in push order
    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn Layer>> {
        self.layers.iter()
    }

    /// Mutable forward iteration; call `.rev()` for event order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Box<dyn Layer>> {
        self.layers.iter_mut()
    }

    /// Overlays then layers, most recently pushed first
    pub fn iter_rev(&self) -> std::iter::Rev<std::slice::Iter<'_, Box<dyn Layer>>> {
        self.layers.iter().rev()
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LayerStack {
    fn drop(&mut self) {
        for layer in &mut self.layers {
            layer.on_detach();
        }
    }
}

impl<'a> IntoIterator for &'a mut LayerStack {
    type Item = &'a mut Box<dyn Layer>;
    type IntoIter = std::slice::IterMut<'a, Box<dyn Layer>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
