//! Provider types and traits

use std::fmt;
use std::future::Future;

use crate::coord::TileAddress;

/// Errors that can occur while fetching tile bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// HTTP request failed
    HttpError(String),
    /// Tile does not exist at its zoom level
    UnsupportedCoordinates { x: u32, y: u32, zoom: u8 },
    /// Zoom level not supported by this provider
    UnsupportedZoom(u8),
    /// Invalid response data from provider
    InvalidResponse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            ProviderError::UnsupportedCoordinates { x, y, zoom } => {
                write!(
                    f,
                    "Tile ({}, {}) at zoom {} not supported by provider",
                    x, y, zoom
                )
            }
            ProviderError::UnsupportedZoom(zoom) => {
                write!(f, "Zoom level {} not supported by provider", zoom)
            }
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Source of raw tile bytes.
///
/// Returns the encoded image exactly as served. Decoding happens elsewhere.
pub trait TileProvider: Send + Sync {
    /// Fetches the encoded image for one tile.
    fn fetch_tile(
        &self,
        address: TileAddress,
    ) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;

    /// Provider-specific resource path (with query) for `address`.
    fn tile_path(&self, address: TileAddress) -> String;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;

    /// Returns the minimum supported zoom level.
    fn min_zoom(&self) -> u8;

    /// Returns the maximum supported zoom level.
    fn max_zoom(&self) -> u8;

    /// Checks if this provider supports the given zoom level.
    fn supports_zoom(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom() && zoom <= self.max_zoom()
    }
}
