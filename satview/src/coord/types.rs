//! Coordinate type definitions

use std::fmt;

/// Edge length of one tile image in screen pixels.
pub const TILE_SIZE: u32 = 256;

/// Zoom range supported by the viewer.
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 19;

/// Edge length of the whole world in world pixels (pixels at [`MAX_ZOOM`]).
pub const WORLD_SIZE: u32 = TILE_SIZE << MAX_ZOOM;

/// Largest addressable world pixel on either axis.
pub const MAX_WORLD_PIXEL: u32 = WORLD_SIZE - 1;

/// Absolute pixel position at the finest zoom level.
///
/// This is the canonical position space: map centers, markers and mouse
/// positions are all converted into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WorldPixel {
    /// X coordinate (east-west), 0 at the antimeridian
    pub x: u32,
    /// Y coordinate (north-south), 0 at the north edge
    pub y: u32,
}

impl WorldPixel {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Builds a world pixel from signed coordinates, clamping both axes into
    /// `[0, MAX_WORLD_PIXEL]`.
    pub fn clamped(x: i64, y: i64) -> Self {
        let max = MAX_WORLD_PIXEL as i64;
        Self {
            x: x.clamp(0, max) as u32,
            y: y.clamp(0, max) as u32,
        }
    }
}

impl fmt::Display for WorldPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPosition {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPosition {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

/// Tile address in the Web Mercator / slippy map system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileAddress {
    /// Column (east-west), 0 at west
    pub x: u32,
    /// Row (north-south), 0 at north
    pub y: u32,
    /// Zoom level (0-19)
    pub zoom: u8,
}

impl TileAddress {
    /// Creates a tile address, checking the zoom level and that the tile
    /// exists at that zoom.
    pub fn new(x: u32, y: u32, zoom: u8) -> Result<Self, CoordError> {
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom));
        }
        let tiles = tiles_per_axis(zoom);
        if x >= tiles || y >= tiles {
            return Err(CoordError::TileOutOfRange { x, y, zoom });
        }
        Ok(Self { x, y, zoom })
    }

    /// Edge length of this tile in world pixels.
    #[inline]
    pub fn size(&self) -> u32 {
        super::tile_size_at(self.zoom)
    }

    /// World pixel of the tile's north-west corner.
    #[inline]
    pub fn origin(&self) -> WorldPixel {
        let size = self.size();
        WorldPixel::new(self.x * size, self.y * size)
    }

    /// Returns true if `pixel` lies inside this tile's half-open bounding box.
    pub fn contains(&self, pixel: WorldPixel) -> bool {
        let size = self.size() as u64;
        let (x0, y0) = (self.x as u64 * size, self.y as u64 * size);
        let (px, py) = (pixel.x as u64, pixel.y as u64);
        px >= x0 && px < x0 + size && py >= y0 && py < y0 + size
    }

    /// Returns the address `dx` columns and `dy` rows away at the same zoom,
    /// or `None` if it falls outside the world.
    pub fn offset(&self, dx: i64, dy: i64) -> Option<Self> {
        let tiles = tiles_per_axis(self.zoom) as i64;
        let x = self.x as i64 + dx;
        let y = self.y as i64 + dy;
        if (0..tiles).contains(&x) && (0..tiles).contains(&y) {
            Some(Self {
                x: x as u32,
                y: y as u32,
                zoom: self.zoom,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Number of tiles along one axis at `zoom`.
#[inline]
pub fn tiles_per_axis(zoom: u8) -> u32 {
    1 << zoom.min(MAX_ZOOM)
}

/// Position on screen in pixels, relative to the window origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Center point of the rectangle (integer division, like the renderer).
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }

    /// Returns true if the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Errors from checked coordinate constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Zoom level is outside the supported range (0 to 19)
    InvalidZoom(u8),
    /// Tile column or row does not exist at this zoom
    TileOutOfRange { x: u32, y: u32, zoom: u8 },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidZoom(zoom) => {
                write!(
                    f,
                    "Invalid zoom level: {} (must be between {} and {})",
                    zoom, MIN_ZOOM, MAX_ZOOM
                )
            }
            CoordError::TileOutOfRange { x, y, zoom } => {
                write!(
                    f,
                    "Tile ({}, {}) does not exist at zoom {} (max index {})",
                    x,
                    y,
                    zoom,
                    tiles_per_axis(*zoom) - 1
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
