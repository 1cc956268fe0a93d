//! Screen projection of the grid and markers.
//!
//! The view center is drawn at the viewport center. Slot `[0, 0]` starts at
//! the viewport center minus the distance from the window origin to the view
//! center, divided by the zoom scale; every other slot follows at 256 pixel
//! steps. Only settled slots (loaded or failed) are projected, so tiles and
//! markers appear together once a tile has been resolved.

use crate::coord::{ScreenPoint, ScreenRect, TileAddress, TILE_SIZE};
use crate::decode::TileImage;
use crate::grid::{SlotIndex, SlotStatus};
use crate::loader::TilePipeline;
use crate::marker::{is_hoverable, marker_inset, MarkerColor, MarkerId, MARKER_FOOTPRINT};

use super::MapView;

/// A settled slot that intersects the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleSlot<'a> {
    pub slot: SlotIndex,
    pub address: Option<TileAddress>,
    /// Where the 256x256 tile lands on screen.
    pub rect: ScreenRect,
    pub status: SlotStatus,
    /// `None` for failed slots.
    pub image: Option<&'a TileImage>,
}

/// A marker drawn inside a settled slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleMarker {
    pub id: MarkerId,
    /// Screen position of the marker's world pixel.
    pub position: ScreenPoint,
    /// Full 15x15 footprint, before the zoom inset.
    pub rect: ScreenRect,
    /// Pixels to trim from each side when drawing.
    pub inset: u32,
    pub color: MarkerColor,
}

impl<P: TilePipeline> MapView<P> {
    /// Screen position of slot `[0, 0]`'s north-west corner in `viewport`.
    fn grid_begin(&self, viewport: ScreenRect) -> (i64, i64) {
        let window = self.grid.window();
        let scale = (window.tile_size() / TILE_SIZE) as i64;
        let (origin_x, origin_y) = window.origin();
        let center = viewport.center();
        (
            center.x as i64 - (self.center.x as i64 - origin_x) / scale,
            center.y as i64 - (self.center.y as i64 - origin_y) / scale,
        )
    }

    fn slot_rect(&self, slot: SlotIndex, begin: (i64, i64)) -> ScreenRect {
        let step = TILE_SIZE as i64;
        ScreenRect::new(
            (begin.0 + slot.col as i64 * step) as i32,
            (begin.1 + slot.row as i64 * step) as i32,
            TILE_SIZE as i32,
            TILE_SIZE as i32,
        )
    }

    /// Settled slots overlapping `viewport`, in row-major order.
    pub fn visible_slots(&self, viewport: ScreenRect) -> Vec<VisibleSlot<'_>> {
        let begin = self.grid_begin(viewport);
        SlotIndex::all()
            .filter_map(|slot| {
                let state = self.grid.state(slot);
                if !state.is_settled() {
                    return None;
                }
                let rect = self.slot_rect(slot, begin);
                if !rect.intersects(&viewport) {
                    return None;
                }
                Some(VisibleSlot {
                    slot,
                    address: self.grid.window().address_of(slot),
                    rect,
                    status: state.status(),
                    image: state.image(),
                })
            })
            .collect()
    }

    /// Markers of settled slots whose footprint overlaps `viewport`.
    ///
    /// Order is slot row-major, then store order within a slot. That is the
    /// draw order, so later entries paint over earlier ones.
    pub fn visible_markers(&self, viewport: ScreenRect) -> Vec<VisibleMarker> {
        let window = self.grid.window();
        let scale = (window.tile_size() / TILE_SIZE) as i64;
        let (origin_x, origin_y) = window.origin();
        let (begin_x, begin_y) = self.grid_begin(viewport);
        let inset = marker_inset(self.zoom());
        let half = (MARKER_FOOTPRINT / 2) as i64;
        let footprint = MARKER_FOOTPRINT as i32;

        let mut visible = Vec::new();
        for slot in SlotIndex::all() {
            if !self.grid.state(slot).is_settled() {
                continue;
            }
            for &id in self.markers.query(slot) {
                let Some(marker) = self.markers.get(id) else {
                    continue;
                };
                let position = marker.position();
                let x = begin_x + (position.x as i64 - origin_x) / scale;
                let y = begin_y + (position.y as i64 - origin_y) / scale;
                let rect = ScreenRect::new(
                    (x - half) as i32,
                    (y - half) as i32,
                    footprint,
                    footprint,
                );
                if !rect.intersects(&viewport) {
                    continue;
                }
                visible.push(VisibleMarker {
                    id,
                    position: ScreenPoint::new(x as i32, y as i32),
                    rect,
                    inset,
                    color: marker.color(),
                });
            }
        }
        visible
    }

    /// The marker under `point`, if markers are large enough to pick at the
    /// current zoom. The first marker in draw order wins.
    pub fn marker_at(&self, point: ScreenPoint, viewport: ScreenRect) -> Option<MarkerId> {
        if !is_hoverable(self.zoom()) || !viewport.contains(point) {
            return None;
        }
        self.visible_markers(viewport)
            .into_iter()
            .find(|marker| marker.rect.contains(point))
            .map(|marker| marker.id)
    }
}
