//! Templated URL construction for the local COG tiling endpoint.

use crate::core::config::CogDisplayParams;
use crate::tiles::query::QueryString;

/// Builds XYZ tile-request templates against the dynamic-tiling server that
/// reads the ingested Cloud-Optimized GeoTIFF.
///
/// The `{z}/{x}/{y}` path tokens are left as literal text for the rendering
/// engine to substitute per tile. The colormap and rescale query parameters
/// are always emitted; when not configured they fall back to the documented
/// defaults in [`CogDisplayParams::elevation`]. Construction is pure, so
/// identical parameters always produce the same string.
#[derive(Debug, Clone, PartialEq)]
pub struct CogTileUrl {
    endpoint: String,
    cog_url: String,
    params: CogDisplayParams,
}

impl CogTileUrl {
    /// `endpoint` is the tiling server's tile route (no trailing slash
    /// required); `cog_url` addresses the raster artifact it should read.
    pub fn new(endpoint: impl Into<String>, cog_url: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            cog_url: cog_url.into(),
            params: CogDisplayParams::default(),
        }
    }

    pub fn with_params(mut self, params: CogDisplayParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &CogDisplayParams {
        &self.params
    }

    /// Tile-request template with literal `{z}/{x}/{y}` tokens and
    /// percent-encoded display parameters.
    pub fn template(&self) -> String {
        let mut query = QueryString::new();
        query.push("url", &self.cog_url);
        query.push("colormap_name", &self.params.colormap);
        query.push("rescale", &self.params.rescale.to_string());
        format!(
            "{}/{{z}}/{{x}}/{{y}}.png?{}",
            self.endpoint.trim_end_matches('/'),
            query.finish()
        )
    }
}
