//! Prelude module for common reliefmap types and traits
//!
//! Re-exports the most commonly used types and functions for easy importing
//! with `use reliefmap::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    config::{CogDisplayParams, RescaleRange, WmsDisplayParams},
    constants,
    geo::{LatLng, LatLngBounds, Point},
};

pub use crate::tiles::{cog::CogTileUrl, query::QueryString, wms::WmsUrlBuilder};

pub use crate::style::{
    composer::{MapInit, StyleComposer},
    document::{LayerConfig, RasterPaint, StyleDocument, TileScheme, TileSourceConfig},
    dynamic::DynamicRasterController,
};

pub use crate::input::{
    events::{ControlEvent, EventHandled},
    handler::ControlHandler,
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
