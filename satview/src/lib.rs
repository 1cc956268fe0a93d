//! satview - Satellite slippy-map core
//!
//! Keeps a 9×9 window of satellite tiles around a movable center, fills it one
//! tile at a time in spiral order from a remote tile service, and indexes
//! user markers by the tile slot they fall in.
//!
//! # High-Level API
//!
//! [`view::MapView`] ties the pieces together:
//!
//! ```ignore
//! use satview::config::LoaderConfig;
//! use satview::coord::GeoPosition;
//! use satview::decode::JpegDecoder;
//! use satview::loader::{FetchDecodePipeline, TileLoader};
//! use satview::provider::{AsyncReqwestClient, MapboxProvider};
//! use satview::view::MapView;
//!
//! let client = AsyncReqwestClient::new(None)?;
//! let provider = MapboxProvider::new(client, token);
//! let pipeline = FetchDecodePipeline::new(provider, JpegDecoder::new());
//! let loader = TileLoader::new(pipeline, runtime.handle().clone(), &LoaderConfig::default());
//!
//! let mut view = MapView::new(GeoPosition::new(62.779147, 40.334442), 15, loader)?;
//! while let Some(outcome) = view.process_next_event().await {
//!     println!("{}", outcome);
//! }
//! ```

pub mod config;
pub mod coord;
pub mod decode;
pub mod grid;
pub mod loader;
pub mod log;
pub mod logging;
pub mod marker;
pub mod provider;
pub mod view;

/// Version of the satview library and CLI.
///
/// Defined in the workspace `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_modules_are_reachable() {
        use crate::coord::tile_address_of;
        use crate::view::center_tile_of;

        let pixel = coord::geo_to_world_pixel(62.779147, 40.334442);
        assert_eq!(center_tile_of(pixel, 15), tile_address_of(pixel, 15));
    }
}
