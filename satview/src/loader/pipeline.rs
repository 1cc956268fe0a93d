//! Fetch + decode pipeline run by the background task.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, trace};

use super::LoadError;
use crate::coord::TileAddress;
use crate::decode::{DecodeError, TileDecoder, TileImage};
use crate::provider::TileProvider;

/// Turns a tile address into a decoded image.
///
/// Runs off the owning thread and must not touch grid state.
pub trait TilePipeline: Send + Sync + 'static {
    fn load(
        &self,
        address: TileAddress,
    ) -> impl Future<Output = Result<TileImage, LoadError>> + Send;
}

/// Fetches bytes from a provider, then decodes them on the blocking pool.
pub struct FetchDecodePipeline<P, D> {
    provider: P,
    decoder: Arc<D>,
}

impl<P, D> FetchDecodePipeline<P, D>
where
    P: TileProvider + 'static,
    D: TileDecoder + 'static,
{
    pub fn new(provider: P, decoder: D) -> Self {
        Self {
            provider,
            decoder: Arc::new(decoder),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P, D> TilePipeline for FetchDecodePipeline<P, D>
where
    P: TileProvider + 'static,
    D: TileDecoder + 'static,
{
    async fn load(&self, address: TileAddress) -> Result<TileImage, LoadError> {
        trace!(tile = %address, provider = self.provider.name(), "Fetching tile");
        let bytes = self.provider.fetch_tile(address).await?;

        let decoder = Arc::clone(&self.decoder);
        let image = tokio::task::spawn_blocking(move || decoder.decode(&bytes))
            .await
            .map_err(|e| DecodeError::Worker(e.to_string()))??;

        debug!(tile = %address, "Tile decoded");
        Ok(image)
    }
}
