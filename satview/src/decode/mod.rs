//! Tile image decoding.
//!
//! Turns the raw bytes returned by a tile provider into a [`TileImage`], the
//! renderable handle stored in grid slots. Decoding sits behind the
//! [`TileDecoder`] trait so the loader can run against a fake codec in tests.
//!
//! # Example
//!
//! ```
//! use satview::decode::{JpegDecoder, TileDecoder};
//!
//! let decoder = JpegDecoder::new();
//! assert!(decoder.decode(b"not an image").is_err());
//! ```

mod decoder;
mod tile_image;

pub use decoder::{DecodeError, JpegDecoder, TileDecoder};
pub use tile_image::TileImage;
