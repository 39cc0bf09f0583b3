//! # Reliefmap
//!
//! Raster layer composition and runtime reconfiguration for terrain web maps.
//!
//! This library owns the declarative side of a terrain viewer: it builds
//! templated tile-request URLs for WMS 1.3.0 and XYZ tiling endpoints from
//! semantic display parameters (colormap, rescale range, vertical
//! exaggeration, map style), projects coordinates between WGS84 and Web
//! Mercator, and mutates a live, ordered layer/source graph in response to
//! control events without ever leaving a layer pointing at a missing source.
//!
//! Tile fetching, caching, and compositing belong to the rendering engine
//! consuming the [`StyleDocument`]; this crate only decides what that engine
//! should be pointed at.

pub mod core;
pub mod input;
pub mod prelude;
pub mod style;
pub mod tiles;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    config::{CogDisplayParams, RescaleRange, WmsDisplayParams},
    geo::{LatLng, LatLngBounds, Point},
};

pub use crate::style::{
    composer::{MapInit, StyleComposer},
    document::{LayerConfig, RasterPaint, StyleDocument, TileScheme, TileSourceConfig},
    dynamic::DynamicRasterController,
};

pub use crate::tiles::{cog::CogTileUrl, wms::WmsUrlBuilder};

pub use crate::input::{
    events::{ControlEvent, EventHandled},
    handler::ControlHandler,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("View error: {0}")]
    View(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Error type alias for convenience
pub type Error = MapError;
