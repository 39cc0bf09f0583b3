pub mod cog;
pub mod query;
pub mod wms;

// Re-exports for convenience
pub use cog::CogTileUrl;
pub use query::QueryString;
pub use wms::WmsUrlBuilder;
