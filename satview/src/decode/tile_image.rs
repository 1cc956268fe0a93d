//! Decoded tile image handle.

use image::RgbaImage;

use crate::coord::TILE_SIZE;

/// Decoded imagery for one tile.
///
/// Owned exclusively by the grid slot holding it; evicting the slot drops
/// the pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TileImage {
    pixels: RgbaImage,
}

impl TileImage {
    /// Wraps already-decoded pixels.
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// A transparent tile-sized image.
    pub fn blank() -> Self {
        Self::new(RgbaImage::new(TILE_SIZE, TILE_SIZE))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the RGBA pixel buffer for drawing.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

impl From<RgbaImage> for TileImage {
    fn from(pixels: RgbaImage) -> Self {
        Self::new(pixels)
    }
}
