//! Square spiral fill order.

use crate::grid::{SlotIndex, TileGrid, GRID_SIZE};

/// Slots from the center outwards.
///
/// The center comes first, then the borders of the 3×3, 5×5, 7×7 and 9×9
/// squares. Each border is walked clockwise: along the top edge starting one
/// right of the top-left corner, down the right edge, back along the bottom
/// edge and up the left edge, finishing on the top-left corner.
pub fn spiral_order() -> impl Iterator<Item = SlotIndex> {
    std::iter::once(SlotIndex::CENTER).chain((3..=GRID_SIZE).step_by(2).flat_map(ring))
}

/// The `4 * (size - 1)` border slots of the centered `size`×`size` square.
fn ring(size: usize) -> impl Iterator<Item = SlotIndex> {
    let first = (GRID_SIZE - size) / 2;
    let last = first + size - 1;

    let top = (first + 1..=last).map(move |col| (first, col));
    let right = (first + 1..=last).map(move |row| (row, last));
    let bottom = (first..last).rev().map(move |col| (last, col));
    let left = (first..last).rev().map(move |row| (row, first));

    top.chain(right)
        .chain(bottom)
        .chain(left)
        .map(|(row, col)| SlotIndex { row, col })
}

/// First pending slot in spiral order, if any.
pub fn next_pending(grid: &TileGrid) -> Option<SlotIndex> {
    spiral_order().find(|slot| grid.is_pending(*slot))
}
