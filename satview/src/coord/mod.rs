//! Coordinate conversion module
//!
//! Converts between geographic coordinates (latitude/longitude), world pixels
//! (absolute pixels at the finest zoom level) and Web Mercator tile addresses.
//! Everything here is pure arithmetic with no hidden state.

mod types;

pub use types::{
    tiles_per_axis, CoordError, GeoPosition, ScreenPoint, ScreenRect, TileAddress, WorldPixel,
    MAX_WORLD_PIXEL, MAX_ZOOM, MIN_ZOOM, TILE_SIZE, WORLD_SIZE,
};

use std::f64::consts::PI;

/// Projects a geographic position to world pixels (Web Mercator at zoom 19).
///
/// Latitude is not clamped to the Mercator-valid range. Callers must keep
/// `|lat| < 90`; at the poles the projection diverges and the float-to-integer
/// conversion saturates to the world edge (or 0 for NaN).
#[inline]
pub fn geo_to_world_pixel(lat: f64, lon: f64) -> WorldPixel {
    let lat_rad = lat * PI / 180.0;
    let x = (lon + 180.0) / 360.0 * (1u64 << MAX_ZOOM) as f64 * TILE_SIZE as f64;
    let half_world = (1u64 << (MAX_ZOOM - 1)) as f64 * TILE_SIZE as f64;
    let y = (1.0 - lat_rad.tan().asinh() / PI) * half_world;
    WorldPixel::new(x as u32, y as u32)
}

impl From<GeoPosition> for WorldPixel {
    fn from(position: GeoPosition) -> Self {
        geo_to_world_pixel(position.lat, position.lon)
    }
}

/// Converts a world pixel back to a geographic position (inverse Web Mercator).
#[inline]
pub fn world_pixel_to_geo(pixel: WorldPixel) -> GeoPosition {
    let world = WORLD_SIZE as f64;
    let lon = pixel.x as f64 / world * 360.0 - 180.0;
    let y = pixel.y as f64 / world;
    let lat = (PI * (1.0 - 2.0 * y)).sinh().atan() * 180.0 / PI;
    GeoPosition::new(lat, lon)
}

/// Edge length of a tile at `zoom`, in world pixels.
///
/// Zoom values above [`MAX_ZOOM`] are clamped rather than rejected.
#[inline]
pub fn tile_size_at(zoom: u8) -> u32 {
    TILE_SIZE << (MAX_ZOOM - zoom.min(MAX_ZOOM))
}

/// Returns the address of the tile containing `pixel` at `zoom`.
#[inline]
pub fn tile_address_of(pixel: WorldPixel, zoom: u8) -> TileAddress {
    let zoom = zoom.min(MAX_ZOOM);
    let size = tile_size_at(zoom);
    TileAddress {
        x: pixel.x / size,
        y: pixel.y / size,
        zoom,
    }
}

/// Maps a screen position to the world pixel under it.
///
/// `view_center` is the screen position where `map_center` is drawn. Each
/// screen pixel covers `tile_size_at(zoom) / 256` world pixels. The result is
/// clamped to the world bounds.
pub fn screen_to_world_pixel(
    view_center: ScreenPoint,
    mouse: ScreenPoint,
    map_center: WorldPixel,
    zoom: u8,
) -> WorldPixel {
    let scale = (tile_size_at(zoom) / TILE_SIZE) as i64;
    let dx = (mouse.x as i64 - view_center.x as i64) * scale;
    let dy = (mouse.y as i64 - view_center.y as i64) * scale;
    WorldPixel::clamped(map_center.x as i64 + dx, map_center.y as i64 + dy)
}

#[cfg(test)]
mod tests;
