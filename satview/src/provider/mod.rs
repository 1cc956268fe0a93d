//! Tile byte providers
//!
//! A provider turns a [`TileAddress`](crate::coord::TileAddress) into the raw
//! encoded image bytes for that tile. Transport is abstracted behind
//! [`AsyncHttpClient`] so providers can be tested without a network.
//!
//! ```ignore
//! use satview::provider::{AsyncReqwestClient, MapboxProvider, TileProvider};
//!
//! let client = AsyncReqwestClient::new(None)?;
//! let provider = MapboxProvider::new(client, token);
//! let bytes = provider.fetch_tile(address).await?;
//! ```

mod http;
mod mapbox;
mod types;

pub use http::{AsyncHttpClient, AsyncReqwestClient};
pub use mapbox::{MapboxProvider, DEFAULT_FORMAT, DEFAULT_HOST, DEFAULT_TILESET};
pub use types::{ProviderError, TileProvider};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
