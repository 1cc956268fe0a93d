//! MapBox satellite imagery provider.
//!
//! # URL Pattern
//!
//! `https://{host}/v4/{tileset}/{z}/{x}/{y}.{format}?access_token={token}`
//!
//! With the defaults this is
//! `https://api.mapbox.com/v4/mapbox.satellite/{z}/{x}/{y}.jpg90?access_token={token}`,
//! a JPEG at 90% quality. Coordinates are standard XYZ: X grows east, Y grows
//! south, both in `0..2^zoom`.

use crate::coord::{tiles_per_axis, TileAddress, MAX_ZOOM as VIEW_MAX_ZOOM};
use crate::provider::{AsyncHttpClient, ProviderError, TileProvider};
use tracing::debug;

/// Default API host.
pub const DEFAULT_HOST: &str = "api.mapbox.com";

/// Default tileset.
pub const DEFAULT_TILESET: &str = "mapbox.satellite";

/// Default image format suffix.
pub const DEFAULT_FORMAT: &str = "jpg90";

const MIN_ZOOM: u8 = 0;

/// Satellite imagery beyond the viewer's finest zoom is never requested.
const MAX_ZOOM: u8 = VIEW_MAX_ZOOM;

/// MapBox raster tile provider.
///
/// The access token is an opaque string supplied once at startup.
///
/// # Example
///
/// ```
/// use satview::coord::TileAddress;
/// use satview::provider::{AsyncReqwestClient, MapboxProvider, TileProvider};
///
/// let client = AsyncReqwestClient::new(None).unwrap();
/// let provider = MapboxProvider::new(client, "pk.token");
/// let path = provider.tile_path(TileAddress { x: 20055, y: 8987, zoom: 15 });
/// assert_eq!(path, "/v4/mapbox.satellite/15/20055/8987.jpg90?access_token=pk.token");
/// ```
pub struct MapboxProvider<C: AsyncHttpClient> {
    http_client: C,
    host: String,
    tileset: String,
    format: String,
    access_token: String,
}

impl<C: AsyncHttpClient> MapboxProvider<C> {
    /// Creates a provider for the default host, tileset and format.
    pub fn new(http_client: C, access_token: impl Into<String>) -> Self {
        Self {
            http_client,
            host: DEFAULT_HOST.to_string(),
            tileset: DEFAULT_TILESET.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            access_token: access_token.into(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_tileset(mut self, tileset: impl Into<String>) -> Self {
        self.tileset = tileset.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Full URL for `address`.
    pub fn tile_url(&self, address: TileAddress) -> String {
        format!("https://{}{}", self.host, self.tile_path(address))
    }
}

impl<C: AsyncHttpClient> TileProvider for MapboxProvider<C> {
    async fn fetch_tile(&self, address: TileAddress) -> Result<Vec<u8>, ProviderError> {
        if !self.supports_zoom(address.zoom) {
            return Err(ProviderError::UnsupportedZoom(address.zoom));
        }
        let tiles = tiles_per_axis(address.zoom);
        if address.x >= tiles || address.y >= tiles {
            return Err(ProviderError::UnsupportedCoordinates {
                x: address.x,
                y: address.y,
                zoom: address.zoom,
            });
        }

        let url = self.tile_url(address);
        let bytes = self.http_client.get(&url).await?;
        if bytes.is_empty() {
            return Err(ProviderError::InvalidResponse(format!(
                "empty body for tile {}",
                address
            )));
        }

        debug!(tile = %address, bytes = bytes.len(), "Tile bytes received");
        Ok(bytes)
    }

    fn tile_path(&self, address: TileAddress) -> String {
        format!(
            "/v4/{}/{}/{}/{}.{}?access_token={}",
            self.tileset, address.zoom, address.x, address.y, self.format, self.access_token
        )
    }

    fn name(&self) -> &str {
        "MapBox"
    }

    fn min_zoom(&self) -> u8 {
        MIN_ZOOM
    }

    fn max_zoom(&self) -> u8 {
        MAX_ZOOM
    }
}
