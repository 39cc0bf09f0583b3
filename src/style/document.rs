//! The live style document: an ordered layer list plus an id-keyed source
//! map, exposing the capability set of the rendering engine it is handed to.
//!
//! The invariant every method preserves: each layer's `source` id resolves to
//! a present source at every observable instant. The two operations a real
//! engine treats as fatal style errors (adding a layer whose source is
//! missing, removing a source a layer still references) are rejected here
//! with `Err` so a violation can never be committed. Removing an entry that
//! does not exist is a no-op, which keeps teardown idempotent.

use crate::core::geo::LatLngBounds;
use crate::prelude::HashMap;
use crate::{MapError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Tiling protocol of a source's URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileScheme {
    /// WMS GetMap template with an unresolved bounding-box token.
    WmsTemplate,
    /// XYZ template with unresolved `{z}/{x}/{y}` tokens.
    XyzTemplate,
}

/// A tiled raster source the rendering engine can fetch from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSourceConfig {
    pub id: String,
    pub scheme: TileScheme,
    pub url_template: String,
    pub tile_size: u32,
    /// Geographic region tiles may be requested for; `None` means unbounded.
    pub bounds: Option<LatLngBounds>,
}

/// Paint state of a raster layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterPaint {
    /// Raster opacity in `[0, 1]`.
    pub opacity: f64,
    pub visible: bool,
}

impl Default for RasterPaint {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            visible: true,
        }
    }
}

/// A raster layer referencing a source by id. Z-order is the layer's
/// position in the document's list, bottom to top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub id: String,
    pub source: String,
    pub paint: RasterPaint,
}

impl LayerConfig {
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            paint: RasterPaint::default(),
        }
    }

    pub fn with_paint(mut self, paint: RasterPaint) -> Self {
        self.paint = paint;
        self
    }
}

/// Ordered layers plus sources keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    sources: HashMap<String, TileSourceConfig>,
    layers: Vec<LayerConfig>,
}

impl StyleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source; ids are unique within a document.
    pub fn add_source(&mut self, source: TileSourceConfig) -> Result<()> {
        if self.sources.contains_key(&source.id) {
            return Err(MapError::Source(format!(
                "duplicate source id: {}",
                source.id
            )));
        }
        debug!("add source {}", source.id);
        self.sources.insert(source.id.clone(), source);
        Ok(())
    }

    /// Removes a source. Absent ids are a no-op; a source still referenced
    /// by a layer cannot be removed.
    pub fn remove_source(&mut self, id: &str) -> Result<()> {
        if !self.sources.contains_key(id) {
            return Ok(());
        }
        if let Some(layer) = self.layers.iter().find(|l| l.source == id) {
            return Err(MapError::Source(format!(
                "source {id} is still referenced by layer {}",
                layer.id
            )));
        }
        debug!("remove source {id}");
        self.sources.remove(id);
        Ok(())
    }

    /// Adds a layer, optionally inserted directly below `before`. The
    /// layer's source must already exist, and `before` must name a present
    /// layer when given.
    pub fn add_layer(&mut self, layer: LayerConfig, before: Option<&str>) -> Result<()> {
        if self.has_layer(&layer.id) {
            return Err(MapError::Layer(format!("duplicate layer id: {}", layer.id)));
        }
        if !self.sources.contains_key(&layer.source) {
            return Err(MapError::Source(format!(
                "layer {} references missing source {}",
                layer.id, layer.source
            )));
        }
        let position = match before {
            Some(anchor) => self
                .layers
                .iter()
                .position(|l| l.id == anchor)
                .ok_or_else(|| MapError::Layer(format!("unknown anchor layer: {anchor}")))?,
            None => self.layers.len(),
        };
        debug!("add layer {} at position {position}", layer.id);
        self.layers.insert(position, layer);
        Ok(())
    }

    /// Removes a layer; absent ids are a no-op.
    pub fn remove_layer(&mut self, id: &str) {
        if self.layers.iter().any(|l| l.id == id) {
            debug!("remove layer {id}");
            self.layers.retain(|l| l.id != id);
        }
    }

    pub fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    pub fn has_layer(&self, id: &str) -> bool {
        self.layers.iter().any(|l| l.id == id)
    }

    pub fn source(&self, id: &str) -> Option<&TileSourceConfig> {
        self.sources.get(id)
    }

    pub fn layer(&self, id: &str) -> Option<&LayerConfig> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Layers bottom to top.
    pub fn layers(&self) -> &[LayerConfig] {
        &self.layers
    }

    /// Layer ids bottom to top.
    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.id.as_str()).collect()
    }

    /// Sets a layer's opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, id: &str, opacity: f64) -> Result<()> {
        let layer = self
            .layers
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| MapError::Layer(format!("unknown layer: {id}")))?;
        layer.paint.opacity = opacity.clamp(0.0, 1.0);
        Ok(())
    }

    /// Sets a layer's visibility.
    pub fn set_visibility(&mut self, id: &str, visible: bool) -> Result<()> {
        let layer = self
            .layers
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| MapError::Layer(format!("unknown layer: {id}")))?;
        layer.paint.visible = visible;
        Ok(())
    }

    /// Checks referential integrity: every layer's source must resolve.
    pub fn validate(&self) -> Result<()> {
        for layer in &self.layers {
            if !self.sources.contains_key(&layer.source) {
                return Err(MapError::Source(format!(
                    "layer {} references missing source {}",
                    layer.id, layer.source
                )));
            }
        }
        Ok(())
    }

    /// JSON snapshot of the document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: &str) -> TileSourceConfig {
        TileSourceConfig {
            id: id.to_string(),
            scheme: TileScheme::XyzTemplate,
            url_template: format!("http://tiles.test/{id}/{{z}}/{{x}}/{{y}}.png"),
            tile_size: 256,
            bounds: None,
        }
    }

    #[test]
    fn test_layer_requires_source() {
        let mut doc = StyleDocument::new();
        let err = doc.add_layer(LayerConfig::new("a", "missing"), None);
        assert!(err.is_err());
        assert!(doc.layers().is_empty());
    }

    #[test]
    fn test_referenced_source_cannot_be_removed() {
        let mut doc = StyleDocument::new();
        doc.add_source(source("s")).unwrap();
        doc.add_layer(LayerConfig::new("a", "s"), None).unwrap();
        assert!(doc.remove_source("s").is_err());
        assert!(doc.has_source("s"));

        doc.remove_layer("a");
        assert!(doc.remove_source("s").is_ok());
        assert!(!doc.has_source("s"));
    }

    #[test]
    fn test_removal_is_idempotent() {
        let mut doc = StyleDocument::new();
        doc.remove_layer("nothing");
        assert!(doc.remove_source("nothing").is_ok());
    }

    #[test]
    fn test_insert_before_anchor() {
        let mut doc = StyleDocument::new();
        doc.add_source(source("s1")).unwrap();
        doc.add_source(source("s2")).unwrap();
        doc.add_source(source("s3")).unwrap();
        doc.add_layer(LayerConfig::new("bottom", "s1"), None).unwrap();
        doc.add_layer(LayerConfig::new("top", "s2"), None).unwrap();
        doc.add_layer(LayerConfig::new("middle", "s3"), Some("top"))
            .unwrap();
        assert_eq!(doc.layer_ids(), vec!["bottom", "middle", "top"]);

        let err = doc.add_layer(LayerConfig::new("x", "s1"), Some("nope"));
        assert!(err.is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut doc = StyleDocument::new();
        doc.add_source(source("s")).unwrap();
        assert!(doc.add_source(source("s")).is_err());
        doc.add_layer(LayerConfig::new("a", "s"), None).unwrap();
        assert!(doc.add_layer(LayerConfig::new("a", "s"), None).is_err());
    }

    #[test]
    fn test_paint_updates() {
        let mut doc = StyleDocument::new();
        doc.add_source(source("s")).unwrap();
        doc.add_layer(LayerConfig::new("a", "s"), None).unwrap();

        doc.set_opacity("a", 0.35).unwrap();
        assert_eq!(doc.layer("a").unwrap().paint.opacity, 0.35);
        doc.set_opacity("a", 7.0).unwrap();
        assert_eq!(doc.layer("a").unwrap().paint.opacity, 1.0);

        doc.set_visibility("a", false).unwrap();
        assert!(!doc.layer("a").unwrap().paint.visible);

        assert!(doc.set_opacity("ghost", 0.5).is_err());
    }

    #[test]
    fn test_validate() {
        let mut doc = StyleDocument::new();
        doc.add_source(source("s")).unwrap();
        doc.add_layer(LayerConfig::new("a", "s"), None).unwrap();
        assert!(doc.validate().is_ok());
    }
}
