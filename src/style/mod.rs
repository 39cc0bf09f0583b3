pub mod composer;
pub mod document;
pub mod dynamic;

// Re-export the essential types
pub use composer::{MapInit, StyleComposer};
pub use document::{LayerConfig, RasterPaint, StyleDocument, TileScheme, TileSourceConfig};
pub use dynamic::DynamicRasterController;
