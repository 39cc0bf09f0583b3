//! Startup assembly of the style document and initial viewport.

use crate::core::constants::{
    AOI_EAST, AOI_NORTH, AOI_SOUTH, AOI_WEST, BASEMAP_LAYER_ID, BASEMAP_SOURCE_ID,
    BASEMAP_URL_TEMPLATE, ELEVATION_LAYER_ID, ELEVATION_SOURCE_ID, ELEVATION_WMS_ENDPOINT,
    ELEVATION_WMS_LAYER, INITIAL_CENTER_LAT, INITIAL_CENTER_LNG, INITIAL_ZOOM, LABELS_LAYER_ID,
    LABELS_SOURCE_ID, LABELS_URL_TEMPLATE, MAX_ZOOM, MIN_ZOOM, TILE_SIZE,
};
use crate::core::geo::{LatLng, LatLngBounds};
use crate::style::document::{LayerConfig, StyleDocument, TileScheme, TileSourceConfig};
use crate::style::dynamic::DynamicRasterController;
use crate::tiles::wms::WmsUrlBuilder;
use crate::{MapError, Result};
use log::info;
use serde::Serialize;

/// Everything the rendering engine needs to construct a map session.
#[derive(Debug, Clone, Serialize)]
pub struct MapInit {
    pub style: StyleDocument,
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// AOI the viewport is never allowed to pan outside of.
    pub max_bounds: LatLngBounds,
}

/// Builds the initial [`StyleDocument`] once at startup.
///
/// Layer order, bottom to top: satellite basemap, dynamic COG raster, WMS
/// elevation/slope overlay, labels. The dynamic layer is created through the
/// controller even when it starts hidden, so startup and runtime creation
/// share one code path and the controller's state machine owns every
/// materialization.
#[derive(Debug, Clone)]
pub struct StyleComposer {
    aoi: LatLngBounds,
    center: LatLng,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    wms: WmsUrlBuilder,
}

impl StyleComposer {
    pub fn new() -> Self {
        Self {
            aoi: LatLngBounds::from_coords(AOI_SOUTH, AOI_WEST, AOI_NORTH, AOI_EAST),
            center: LatLng::new(INITIAL_CENTER_LAT, INITIAL_CENTER_LNG),
            zoom: INITIAL_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wms: WmsUrlBuilder::new(ELEVATION_WMS_ENDPOINT, ELEVATION_WMS_LAYER),
        }
    }

    /// Overrides the session AOI.
    pub fn with_aoi(mut self, aoi: LatLngBounds) -> Self {
        self.aoi = aoi;
        self
    }

    /// Overrides the initial viewport.
    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    /// Overrides the elevation overlay's URL builder.
    pub fn with_wms(mut self, wms: WmsUrlBuilder) -> Self {
        self.wms = wms;
        self
    }

    pub fn aoi(&self) -> &LatLngBounds {
        &self.aoi
    }

    /// Assembles the style document and validates the viewport against the
    /// AOI. The controller materializes the dynamic layer below the
    /// elevation anchor as part of composition.
    pub fn compose(&self, controller: &mut DynamicRasterController) -> Result<MapInit> {
        if !self.aoi.is_valid() {
            return Err(MapError::View("AOI bounds are inverted".to_string()));
        }
        if !self.center.is_projectable() {
            return Err(MapError::InvalidCoordinates(format!(
                "initial center ({}, {}) is outside the projection domain",
                self.center.lat, self.center.lng
            )));
        }
        if !self.aoi.contains(&self.center) {
            return Err(MapError::View(format!(
                "initial center ({}, {}) lies outside the AOI",
                self.center.lat, self.center.lng
            )));
        }
        if self.zoom < self.min_zoom || self.zoom > self.max_zoom {
            return Err(MapError::View(format!(
                "initial zoom {} outside [{}, {}]",
                self.zoom, self.min_zoom, self.max_zoom
            )));
        }

        let mut style = StyleDocument::new();

        style.add_source(TileSourceConfig {
            id: BASEMAP_SOURCE_ID.to_string(),
            scheme: TileScheme::XyzTemplate,
            url_template: BASEMAP_URL_TEMPLATE.to_string(),
            tile_size: TILE_SIZE,
            bounds: None,
        })?;
        style.add_layer(LayerConfig::new(BASEMAP_LAYER_ID, BASEMAP_SOURCE_ID), None)?;

        style.add_source(TileSourceConfig {
            id: ELEVATION_SOURCE_ID.to_string(),
            scheme: TileScheme::WmsTemplate,
            url_template: self.wms.template(),
            tile_size: TILE_SIZE,
            bounds: Some(self.aoi.clone()),
        })?;
        style.add_layer(
            LayerConfig::new(ELEVATION_LAYER_ID, ELEVATION_SOURCE_ID),
            None,
        )?;

        style.add_source(TileSourceConfig {
            id: LABELS_SOURCE_ID.to_string(),
            scheme: TileScheme::XyzTemplate,
            url_template: LABELS_URL_TEMPLATE.to_string(),
            tile_size: TILE_SIZE,
            bounds: None,
        })?;
        style.add_layer(LayerConfig::new(LABELS_LAYER_ID, LABELS_SOURCE_ID), None)?;

        controller.materialize(&mut style)?;
        style.validate()?;

        info!(
            "composed style with {} layers, centered at ({}, {})",
            style.layers().len(),
            self.center.lat,
            self.center.lng
        );

        Ok(MapInit {
            style,
            center: self.center,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            max_bounds: self.aoi.clone(),
        })
    }
}

impl Default for StyleComposer {
    fn default() -> Self {
        Self::new()
    }
}
