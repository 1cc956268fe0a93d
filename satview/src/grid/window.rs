//! Mapping between slots and tile addresses.

use crate::coord::{tile_address_of, TileAddress, WorldPixel};

use super::slot::{SlotIndex, GRID_RADIUS, GRID_SIZE};

/// The 9×9 block of tile addresses currently covered by the grid.
///
/// Only the center tile is stored. Every slot address is derived from it:
/// `slot(row, col) = center + (col - 4, row - 4)` at the center's zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWindow {
    center: TileAddress,
}

impl GridWindow {
    pub fn new(center: TileAddress) -> Self {
        Self { center }
    }

    /// Window whose center tile contains `pixel` at `zoom`.
    pub fn centered_on(pixel: WorldPixel, zoom: u8) -> Self {
        Self::new(tile_address_of(pixel, zoom))
    }

    #[inline]
    pub fn center(&self) -> TileAddress {
        self.center
    }

    #[inline]
    pub fn zoom(&self) -> u8 {
        self.center.zoom
    }

    /// Tile edge length in world pixels at this window's zoom.
    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.center.size()
    }

    /// Address of the tile held by `slot`, or `None` if it would lie outside
    /// the world (window overhanging the map edge).
    pub fn address_of(&self, slot: SlotIndex) -> Option<TileAddress> {
        let (dx, dy) = slot.offset_from_center();
        self.center.offset(dx, dy)
    }

    /// Slot that holds `address`, if the address is inside this window.
    ///
    /// Addresses at another zoom never map to a slot.
    pub fn slot_of(&self, address: TileAddress) -> Option<SlotIndex> {
        if address.zoom != self.center.zoom {
            return None;
        }
        let col = address.x as i64 - self.center.x as i64 + GRID_RADIUS as i64;
        let row = address.y as i64 - self.center.y as i64 + GRID_RADIUS as i64;
        let range = 0..GRID_SIZE as i64;
        if range.contains(&row) && range.contains(&col) {
            SlotIndex::new(row as usize, col as usize)
        } else {
            None
        }
    }

    /// Slot whose tile box contains `pixel`.
    pub fn slot_containing(&self, pixel: WorldPixel) -> Option<SlotIndex> {
        self.slot_of(tile_address_of(pixel, self.zoom()))
    }

    /// Signed slot shift `(dx, dy)` that carries content from this window
    /// into `next`: old center minus new center, per axis.
    ///
    /// Meaningful only when both windows share a zoom level.
    pub fn shift_to(&self, next: &GridWindow) -> (i64, i64) {
        (
            self.center.x as i64 - next.center.x as i64,
            self.center.y as i64 - next.center.y as i64,
        )
    }

    /// World-pixel position of the north-west corner of slot `[0, 0]`.
    ///
    /// Signed because the window can overhang the north or west edge.
    pub fn origin(&self) -> (i64, i64) {
        let size = self.tile_size() as i64;
        (
            (self.center.x as i64 - GRID_RADIUS as i64) * size,
            (self.center.y as i64 - GRID_RADIUS as i64) * size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(x: u32, y: u32, zoom: u8) -> GridWindow {
        GridWindow::new(TileAddress { x, y, zoom })
    }

    #[test]
    fn test_slot_addresses_follow_center_offset() {
        let w = window(100, 100, 15);
        assert_eq!(
            w.address_of(SlotIndex::new(0, 0).unwrap()),
            Some(TileAddress { x: 96, y: 96, zoom: 15 })
        );
        assert_eq!(
            w.address_of(SlotIndex::new(2, 7).unwrap()),
            Some(TileAddress { x: 103, y: 98, zoom: 15 })
        );
        assert_eq!(w.address_of(SlotIndex::CENTER), Some(w.center()));
    }

    #[test]
    fn test_slot_of_inverts_address_of() {
        let w = window(100, 100, 15);
        for slot in SlotIndex::all() {
            let address = w.address_of(slot).unwrap();
            assert_eq!(w.slot_of(address), Some(slot));
        }
        assert_eq!(w.slot_of(TileAddress { x: 105, y: 100, zoom: 15 }), None);
        assert_eq!(w.slot_of(TileAddress { x: 100, y: 100, zoom: 16 }), None);
    }

    #[test]
    fn test_window_overhanging_world_edge() {
        let w = window(1, 0, 2);
        assert_eq!(w.address_of(SlotIndex::new(0, 0).unwrap()), None);
        assert_eq!(
            w.address_of(SlotIndex::new(4, 3).unwrap()),
            Some(TileAddress { x: 0, y: 0, zoom: 2 })
        );
        assert_eq!(
            w.address_of(SlotIndex::new(4, 6).unwrap()),
            Some(TileAddress { x: 3, y: 0, zoom: 2 })
        );
        assert_eq!(w.address_of(SlotIndex::new(4, 7).unwrap()), None);
        assert_eq!(SlotIndex::all().filter(|s| w.address_of(*s).is_some()).count(), 16);
    }

    #[test]
    fn test_shift_is_old_minus_new() {
        let old = window(100, 100, 15);
        let new = window(105, 98, 15);
        assert_eq!(old.shift_to(&new), (-5, 2));
    }

    #[test]
    fn test_slot_containing_pixel() {
        let w = window(100, 100, 15);
        let size = w.tile_size();
        let pixel = WorldPixel::new(101 * size + 7, 99 * size);
        assert_eq!(w.slot_containing(pixel), SlotIndex::new(3, 5));
    }

    #[test]
    fn test_origin_can_be_negative() {
        let w = window(2, 0, 19);
        assert_eq!(w.origin(), (-512, -1024));
    }
}
