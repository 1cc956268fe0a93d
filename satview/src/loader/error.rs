//! Loader error types

use thiserror::Error;

use crate::coord::TileAddress;
use crate::decode::DecodeError;
use crate::provider::ProviderError;

/// Why a tile could not be loaded.
///
/// Never fatal: the slot is marked failed and loading moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("transport error: {0}")]
    Transport(#[from] ProviderError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// A fetch is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tile {in_flight} is still loading")]
pub struct LoaderBusy {
    pub in_flight: TileAddress,
}
