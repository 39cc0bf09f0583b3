//! Templated URL construction for the WMS 1.3.0 elevation/slope overlay.

use crate::core::bounds::Bounds;
use crate::core::config::WmsDisplayParams;
use crate::core::constants::{BBOX_PLACEHOLDER, TILE_SIZE};
use crate::tiles::query::QueryString;

/// Builds `GetMap` request URLs against a WMS 1.3.0 endpoint.
///
/// The fixed protocol skeleton is always emitted; the variable display
/// parameters come from [`WmsDisplayParams`] and are appended
/// percent-encoded when present, silently omitted when absent. Construction
/// is pure: identical configuration always yields an identical URL, so the
/// output doubles as a cache key for the rendering engine.
#[derive(Debug, Clone, PartialEq)]
pub struct WmsUrlBuilder {
    endpoint: String,
    layer: String,
    format: String,
    transparent: bool,
    crs: String,
    width: u32,
    height: u32,
    params: WmsDisplayParams,
}

impl WmsUrlBuilder {
    pub fn new(endpoint: impl Into<String>, layer: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            layer: layer.into(),
            format: "image/png".to_string(),
            transparent: true,
            crs: "EPSG:3857".to_string(),
            width: TILE_SIZE,
            height: TILE_SIZE,
            params: WmsDisplayParams::default(),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_params(mut self, params: WmsDisplayParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &WmsDisplayParams {
        &self.params
    }

    /// Query string shared by the templated and resolved forms; `bbox` is
    /// appended verbatim so the placeholder token survives.
    fn query(&self, bbox: &str) -> String {
        let mut query = QueryString::new();
        query.push("SERVICE", "WMS");
        query.push("VERSION", "1.3.0");
        query.push("REQUEST", "GetMap");
        query.push("LAYERS", &self.layer);
        query.push("STYLES", &self.params.style);
        query.push("FORMAT", &self.format);
        query.push("TRANSPARENT", if self.transparent { "true" } else { "false" });
        query.push("CRS", &self.crs);
        query.push("WIDTH", &self.width.to_string());
        query.push("HEIGHT", &self.height.to_string());
        query.push("EXAGGERATION", &self.params.exaggeration.to_string());
        if let Some(rescale) = &self.params.rescale {
            query.push("RESCALE", &rescale.to_string());
        }
        query.push_raw("BBOX", bbox);
        query.finish()
    }

    /// Tile-request template with the bounding box left as the literal
    /// `{bbox-epsg-3857}` token, substituted per tile by the rendering
    /// engine. Resolving it here would be a correctness bug.
    pub fn template(&self) -> String {
        format!("{}?{}", self.endpoint, self.query(BBOX_PLACEHOLDER))
    }

    /// Resolves one concrete `GetMap` request over a projected box, for
    /// one-shot fetches (legend or export previews) outside the tiling path.
    pub fn get_map_url(&self, bounds: &Bounds) -> String {
        format!("{}?{}", self.endpoint, self.query(&bounds.bbox_param()))
    }
}
