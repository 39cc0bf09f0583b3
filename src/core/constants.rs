//! Session-wide constants: layer graph ids, upstream endpoints, and the
//! area of interest the viewer is restricted to.
//! Keeping them in a single place makes it easier to retarget the viewer at
//! a different ingested raster.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Literal bounding-box token the rendering engine substitutes per tile.
/// The WMS builder must emit this untouched.
pub const BBOX_PLACEHOLDER: &str = "{bbox-epsg-3857}";

/// Satellite basemap, bottom of the stack.
pub const BASEMAP_SOURCE_ID: &str = "satellite";
pub const BASEMAP_LAYER_ID: &str = "satellite-layer";
pub const BASEMAP_URL_TEMPLATE: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";

/// Dynamic COG-derived raster, rebuilt on every parameter change.
pub const COG_SOURCE_ID: &str = "dtm";
pub const COG_LAYER_ID: &str = "dtm-layer";

/// Local dynamic-tiling endpoint serving the ingested DTM.
pub const COG_TILE_ENDPOINT: &str = "http://127.0.0.1:8000/cog/tiles";

/// Path of the ingested Cloud-Optimized GeoTIFF on the tiling server.
pub const COG_URL: &str = "file:///data/dtm/aoi_dtm.tif";

/// Remote elevation/slope WMS overlay; also the z-order anchor the dynamic
/// layer is inserted directly below.
pub const ELEVATION_SOURCE_ID: &str = "elevation";
pub const ELEVATION_LAYER_ID: &str = "elevation-layer";
pub const ELEVATION_WMS_ENDPOINT: &str = "https://datacube.services.geo.ca/ows/elevation";
pub const ELEVATION_WMS_LAYER: &str = "dtm-hillshade";

/// Label overlay, top of the stack.
pub const LABELS_SOURCE_ID: &str = "labels";
pub const LABELS_LAYER_ID: &str = "labels-layer";
pub const LABELS_URL_TEMPLATE: &str =
    "https://basemaps.cartocdn.com/light_only_labels/{z}/{x}/{y}.png";

/// Area of interest (degrees, WGS84): the Gatineau Hills AOI the DTM was
/// extracted over. The viewport may never pan outside it.
pub const AOI_WEST: f64 = -76.05;
pub const AOI_SOUTH: f64 = 45.25;
pub const AOI_EAST: f64 = -75.35;
pub const AOI_NORTH: f64 = 45.65;

/// Initial viewport, required to sit inside the AOI.
pub const INITIAL_CENTER_LAT: f64 = 45.47;
pub const INITIAL_CENTER_LNG: f64 = -75.72;
pub const INITIAL_ZOOM: f64 = 11.0;
pub const MIN_ZOOM: f64 = 9.0;
pub const MAX_ZOOM: f64 = 16.0;
