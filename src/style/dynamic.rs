//! Runtime control of the dynamically reconfigurable COG layer.

use crate::core::config::CogDisplayParams;
use crate::core::constants::{COG_LAYER_ID, COG_SOURCE_ID, ELEVATION_LAYER_ID, TILE_SIZE};
use crate::core::geo::LatLngBounds;
use crate::style::document::{LayerConfig, RasterPaint, StyleDocument, TileScheme, TileSourceConfig};
use crate::tiles::cog::CogTileUrl;
use crate::Result;
use log::debug;

/// State machine over the dynamic raster layer.
///
/// The layer is either absent from the document or present with a URL built
/// from the current display parameters. The desired paint state is
/// remembered here independently of structural state, so a visibility toggle
/// while the layer is torn down takes effect on the next materialization
/// instead of being lost.
///
/// Structural changes always run in the only safe order: removal is layer
/// first then source, creation is source first then layer. Interleaving them
/// the other way would leave the document with a dangling reference, which
/// the rendering engine treats as a fatal style error.
#[derive(Debug, Clone)]
pub struct DynamicRasterController {
    endpoint: String,
    cog_url: String,
    params: CogDisplayParams,
    paint: RasterPaint,
    bounds: Option<LatLngBounds>,
    /// URL of the materialized source; `None` while absent.
    current_url: Option<String>,
}

impl DynamicRasterController {
    pub fn new(endpoint: impl Into<String>, cog_url: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            cog_url: cog_url.into(),
            params: CogDisplayParams::default(),
            paint: RasterPaint::default(),
            bounds: None,
            current_url: None,
        }
    }

    /// Restricts tile requests of the created source to the given region.
    pub fn with_bounds(mut self, bounds: LatLngBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_params(mut self, params: CogDisplayParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_paint(mut self, paint: RasterPaint) -> Self {
        self.paint = paint;
        self
    }

    pub fn params(&self) -> &CogDisplayParams {
        &self.params
    }

    /// The paint state the layer has, or will have once materialized.
    pub fn paint(&self) -> RasterPaint {
        self.paint
    }

    pub fn is_present(&self) -> bool {
        self.current_url.is_some()
    }

    fn build_url(&self) -> String {
        CogTileUrl::new(self.endpoint.clone(), self.cog_url.clone())
            .with_params(self.params.clone())
            .template()
    }

    /// Creates the layer from the current parameters if it is absent.
    pub fn materialize(&mut self, doc: &mut StyleDocument) -> Result<()> {
        if self.is_present() {
            return Ok(());
        }
        let url = self.build_url();
        self.create(doc, url)
    }

    /// Applies new display parameters, rebuilding the layer/source pair.
    /// A no-op when already present with an identical URL.
    pub fn reconfigure(&mut self, doc: &mut StyleDocument, params: CogDisplayParams) -> Result<()> {
        self.params = params;
        let url = self.build_url();
        if self.current_url.as_deref() == Some(url.as_str()) {
            debug!("reconfigure skipped, url unchanged");
            return Ok(());
        }
        if self.is_present() {
            self.teardown(doc)?;
        }
        self.create(doc, url)
    }

    /// Removes the layer and its source; idempotent.
    pub fn remove(&mut self, doc: &mut StyleDocument) -> Result<()> {
        if self.is_present() {
            self.teardown(doc)?;
        }
        Ok(())
    }

    /// Updates the desired opacity; applied live when present.
    pub fn set_opacity(&mut self, doc: &mut StyleDocument, opacity: f64) -> Result<()> {
        self.paint.opacity = opacity.clamp(0.0, 1.0);
        if self.is_present() {
            doc.set_opacity(COG_LAYER_ID, self.paint.opacity)?;
        }
        Ok(())
    }

    /// Updates the desired visibility; applied live when present.
    pub fn set_visible(&mut self, doc: &mut StyleDocument, visible: bool) -> Result<()> {
        self.paint.visible = visible;
        if self.is_present() {
            doc.set_visibility(COG_LAYER_ID, visible)?;
        }
        Ok(())
    }

    /// Layer first, then source.
    fn teardown(&mut self, doc: &mut StyleDocument) -> Result<()> {
        doc.remove_layer(COG_LAYER_ID);
        doc.remove_source(COG_SOURCE_ID)?;
        self.current_url = None;
        Ok(())
    }

    /// Source first, then layer, inserted directly below the elevation
    /// overlay anchor so z-order survives any number of rebuilds.
    fn create(&mut self, doc: &mut StyleDocument, url: String) -> Result<()> {
        doc.add_source(TileSourceConfig {
            id: COG_SOURCE_ID.to_string(),
            scheme: TileScheme::XyzTemplate,
            url_template: url.clone(),
            tile_size: TILE_SIZE,
            bounds: self.bounds.clone(),
        })?;
        let anchor = doc.has_layer(ELEVATION_LAYER_ID).then_some(ELEVATION_LAYER_ID);
        doc.add_layer(
            LayerConfig::new(COG_LAYER_ID, COG_SOURCE_ID).with_paint(self.paint),
            anchor,
        )?;
        self.current_url = Some(url);
        debug!("dynamic layer materialized");
        Ok(())
    }
}
