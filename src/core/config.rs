//! Display-parameter configuration for the raster layers.
//!
//! Every implicit fallback the control surface relies on is enumerated here
//! as an explicit named constructor, so call sites never depend on hidden
//! parameter defaulting.

use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered value range a single-band raster is stretched over before
/// colormapping. Serialized as `"min,max"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RescaleRange {
    min: f64,
    max: f64,
}

impl RescaleRange {
    /// Creates a range; `min` must be strictly below `max` and both finite.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(MapError::Parse(format!(
                "rescale bounds must be finite, got {min},{max}"
            )));
        }
        if min >= max {
            return Err(MapError::Parse(format!(
                "rescale min must be below max, got {min},{max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl fmt::Display for RescaleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

impl FromStr for RescaleRange {
    type Err = MapError;

    /// Parses the `"min,max"` shape entered in the rescale text control.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(2, ',');
        let min = parts
            .next()
            .ok_or_else(|| MapError::Parse(format!("malformed rescale: {s:?}")))?;
        let max = parts
            .next()
            .ok_or_else(|| MapError::Parse(format!("malformed rescale: {s:?}")))?;
        let min: f64 = min
            .trim()
            .parse()
            .map_err(|_| MapError::Parse(format!("non-numeric rescale min: {s:?}")))?;
        let max: f64 = max
            .trim()
            .parse()
            .map_err(|_| MapError::Parse(format!("non-numeric rescale max: {s:?}")))?;
        Self::new(min, max)
    }
}

/// Display parameters for the dynamically tiled COG raster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CogDisplayParams {
    pub colormap: String,
    pub rescale: RescaleRange,
}

impl CogDisplayParams {
    pub fn new(colormap: impl Into<String>, rescale: RescaleRange) -> Self {
        Self {
            colormap: colormap.into(),
            rescale,
        }
    }

    /// DTM elevation display: metres above sea level over the AOI.
    pub fn elevation() -> Self {
        Self {
            colormap: "cividis".to_string(),
            rescale: RescaleRange {
                min: 100.0,
                max: 600.0,
            },
        }
    }

    /// Slope display: degrees, emphasizing steep terrain.
    pub fn slope() -> Self {
        Self {
            colormap: "viridis".to_string(),
            rescale: RescaleRange {
                min: 30.0,
                max: 90.0,
            },
        }
    }
}

impl Default for CogDisplayParams {
    fn default() -> Self {
        Self::elevation()
    }
}

/// Variable display parameters for the remote WMS overlay. The protocol
/// skeleton (service, version, CRS, tile size) lives on the builder; only
/// the knobs the UI exposes are here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmsDisplayParams {
    /// WMS style name (`STYLES`).
    pub style: String,
    /// Vertical exaggeration factor, a vendor extension.
    pub exaggeration: f64,
    /// Optional per-channel rescale, a vendor extension; omitted from the
    /// request when absent.
    pub rescale: Option<RescaleRange>,
}

impl WmsDisplayParams {
    pub fn new(style: impl Into<String>, exaggeration: f64) -> Self {
        Self {
            style: style.into(),
            exaggeration,
            rescale: None,
        }
    }

    pub fn with_rescale(mut self, rescale: RescaleRange) -> Self {
        self.rescale = Some(rescale);
        self
    }
}

impl Default for WmsDisplayParams {
    fn default() -> Self {
        Self {
            style: "hillshade".to_string(),
            exaggeration: 2.0,
            rescale: None,
        }
    }
}
