//! TileDecoder trait and the JPEG implementation.

use image::imageops::{self, FilterType};
use image::ImageFormat;
use thiserror::Error;

use super::TileImage;
use crate::coord::TILE_SIZE;

/// Errors produced while decoding tile bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The provider returned no bytes.
    #[error("empty image buffer")]
    Empty,

    /// The codec rejected the data (corrupt or unsupported).
    #[error("image decode error: {0}")]
    Codec(String),

    /// The blocking decode worker panicked or was cancelled.
    #[error("decode worker failed: {0}")]
    Worker(String),
}

/// Trait for tile decoding strategies.
///
/// Implementations run on a blocking worker thread, so they must be
/// `Send + Sync` and free to block.
pub trait TileDecoder: Send + Sync {
    /// Decode a complete image file into a tile-sized RGBA image.
    fn decode(&self, bytes: &[u8]) -> Result<TileImage, DecodeError>;
}

/// Decoder for JPEG tile imagery.
///
/// Images that are not 256×256 (e.g. high-DPI tilesets) are resampled to
/// the tile size so every slot holds the same geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegDecoder;

impl JpegDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl TileDecoder for JpegDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<TileImage, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)
            .map_err(|e| DecodeError::Codec(e.to_string()))?
            .to_rgba8();

        if decoded.width() == TILE_SIZE && decoded.height() == TILE_SIZE {
            return Ok(TileImage::new(decoded));
        }

        tracing::trace!(
            width = decoded.width(),
            height = decoded.height(),
            "Resampling tile image to {}px",
            TILE_SIZE
        );
        Ok(TileImage::new(imageops::resize(
            &decoded,
            TILE_SIZE,
            TILE_SIZE,
            FilterType::Triangle,
        )))
    }
}
