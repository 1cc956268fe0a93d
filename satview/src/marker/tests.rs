//! Tests for the marker store and index

use super::*;
use crate::coord::{TileAddress, WorldPixel};
use crate::grid::{GridWindow, SlotIndex};
use proptest::prelude::*;

fn window(x: u32, y: u32, zoom: u8) -> GridWindow {
    GridWindow::new(TileAddress { x, y, zoom })
}

/// World pixel at `(fx, fy)` pixels inside tile `(x, y)`.
fn inside(w: &GridWindow, x: u32, y: u32, fx: u32, fy: u32) -> WorldPixel {
    let size = w.tile_size();
    WorldPixel::new(x * size + fx, y * size + fy)
}

/// World pixel offset from `around` by whole multiples of `step`.
fn offset(around: WorldPixel, (dx, dy): (i64, i64), step: u32) -> WorldPixel {
    let x = around.x as i64 + dx * step as i64;
    let y = around.y as i64 + dy * step as i64;
    WorldPixel::new(x as u32, y as u32)
}

/// Every marker inside the 81 tile boxes appears in exactly one bucket, and
/// no other marker appears at all.
fn assert_partition(index: &MarkerIndex, w: &GridWindow) {
    let mut seen = vec![0usize; index.len()];
    for slot in SlotIndex::all() {
        for id in index.query(slot) {
            seen[id.index()] += 1;
            let marker = index.get(*id).unwrap();
            assert_eq!(w.slot_containing(marker.position()), Some(slot));
        }
    }
    for marker in index.store().iter() {
        let expected = usize::from(w.slot_containing(marker.position()).is_some());
        assert_eq!(seen[marker.id().index()], expected, "marker {}", marker.id());
    }
}

#[test]
fn test_insert_files_marker_in_its_slot() {
    let w = window(100, 100, 15);
    let mut index = MarkerIndex::new();

    let id = index.insert(MarkerDraft::new(inside(&w, 101, 98, 10, 10), "Camp"), &w);
    let slot = SlotIndex::new(2, 5).unwrap();
    assert_eq!(index.query(slot), &[id]);
    assert_eq!(index.get(id).unwrap().name(), "Camp");
}

#[test]
fn test_insert_outside_window_is_stored_but_not_bucketed() {
    let w = window(100, 100, 15);
    let mut index = MarkerIndex::new();

    let id = index.insert(MarkerDraft::new(inside(&w, 120, 100, 0, 0), "Far"), &w);
    assert_eq!(index.len(), 1);
    assert!(index.get(id).is_some());
    assert!(SlotIndex::all().all(|slot| index.query(slot).is_empty()));
}

#[test]
fn test_bucket_order_follows_store_order() {
    let w = window(100, 100, 15);
    let mut index = MarkerIndex::new();
    let a = index.insert(MarkerDraft::new(inside(&w, 100, 100, 500, 500), "A"), &w);
    let _far = index.insert(MarkerDraft::new(inside(&w, 90, 90, 0, 0), "Far"), &w);
    let b = index.insert(MarkerDraft::new(inside(&w, 100, 100, 100, 100), "B"), &w);

    assert_eq!(index.query(SlotIndex::CENTER), &[a, b]);
    index.rebuild(SlotIndex::CENTER, &w);
    assert_eq!(index.query(SlotIndex::CENTER), &[a, b]);
}

#[test]
fn test_tile_box_is_half_open() {
    let w = window(100, 100, 15);
    let mut index = MarkerIndex::new();
    let size = w.tile_size();
    let edge = index.insert(MarkerDraft::new(WorldPixel::new(101 * size, 100 * size), "Edge"), &w);

    assert!(index.query(SlotIndex::CENTER).is_empty());
    assert_eq!(index.query(SlotIndex::new(4, 5).unwrap()), &[edge]);
}

#[test]
fn test_shift_moves_buckets_and_rebuilds_exposed() {
    let old = window(100, 100, 15);
    let mut index = MarkerIndex::new();
    let kept = index.insert(MarkerDraft::new(inside(&old, 100, 100, 1, 1), "Kept"), &old);
    let entering = index.insert(MarkerDraft::new(inside(&old, 106, 100, 1, 1), "Entering"), &old);
    assert!(SlotIndex::all().all(|slot| !index.query(slot).contains(&entering)));

    let new = window(102, 100, 15);
    let (dx, dy) = old.shift_to(&new);
    index.shift(dx, dy, &new);

    assert_eq!(index.query(SlotIndex::new(4, 2).unwrap()), &[kept]);
    assert_eq!(index.query(SlotIndex::new(4, 8).unwrap()), &[entering]);
    assert_partition(&index, &new);
}

proptest! {
    #[test]
    fn prop_full_window_shift_rebuilds_everything(
        offsets in prop::collection::vec((-300i64..300, -300i64..300), 1..150),
        east in 9u32..20,
    ) {
        let old = window(100, 100, 15);
        let around = inside(&old, 100, 100, 0, 0);
        let mut index = MarkerIndex::new();
        for (i, d) in offsets.iter().enumerate() {
            let p = offset(around, *d, old.tile_size() / 16);
            index.insert(MarkerDraft::new(p, format!("m{}", i)), &old);
        }

        let new = window(100 + east, 100, 15);
        let (dx, dy) = old.shift_to(&new);
        index.shift(dx, dy, &new);
        assert_partition(&index, &new);
    }

    #[test]
    fn prop_partition_holds_across_pans_and_zoom(
        offsets in prop::collection::vec((-120i64..120, -120i64..120), 1..200),
        pans in prop::collection::vec((-10i64..=10, -10i64..=10), 1..8),
        zoom in 12u8..=19,
    ) {
        let mut w = window(1000, 1000, 14);
        let center = inside(&w, 1000, 1000, 0, 0);
        let mut index = MarkerIndex::new();
        for (i, d) in offsets.iter().enumerate() {
            let p = offset(center, *d, w.tile_size() / 16);
            index.insert(MarkerDraft::new(p, format!("m{}", i)), &w);
        }
        assert_partition(&index, &w);

        for (sx, sy) in pans {
            let next = window(
                (w.center().x as i64 + sx) as u32,
                (w.center().y as i64 + sy) as u32,
                14,
            );
            let (dx, dy) = w.shift_to(&next);
            index.shift(dx, dy, &next);
            w = next;
            assert_partition(&index, &w);
        }

        let zoomed = GridWindow::centered_on(center, zoom);
        index.rebuild_all(&zoomed);
        assert_partition(&index, &zoomed);
    }
}

#[test]
fn test_out_of_world_slots_have_empty_buckets() {
    let w = window(0, 0, 3);
    let mut index = MarkerIndex::new();
    index.insert(MarkerDraft::new(WorldPixel::new(5, 5), "Corner"), &w);

    for slot in SlotIndex::all() {
        index.rebuild(slot, &w);
    }
    assert_eq!(index.query(SlotIndex::CENTER).len(), 1);
    assert!(index.query(SlotIndex::new(0, 0).unwrap()).is_empty());
    assert_partition(&index, &w);
}

#[test]
fn test_create_rejects_empty_name() {
    let w = window(100, 100, 15);
    let mut index = MarkerIndex::new();

    let result = index.create(MarkerDraft::new(inside(&w, 100, 100, 0, 0), ""), &w);
    assert_eq!(result, Err(MarkerError::EmptyName));
    let result = index.create(MarkerDraft::new(inside(&w, 100, 100, 0, 0), "   "), &w);
    assert_eq!(result, Err(MarkerError::EmptyName));
    assert_eq!(index.len(), 0);
}

#[test]
fn test_create_rejects_overlap_within_footprint() {
    let w = window(100, 100, 15);
    let mut index = MarkerIndex::new();
    let p = inside(&w, 100, 100, 200, 200);

    let first = index.create(MarkerDraft::new(p, "First"), &w).unwrap();
    let near = WorldPixel::new(p.x + 14, p.y - 14);
    assert_eq!(
        index.create(MarkerDraft::new(near, "Second"), &w),
        Err(MarkerError::Overlaps { existing: first })
    );
    assert_eq!(index.len(), 1);

    // Exactly one footprint away on one axis is allowed
    let clear = WorldPixel::new(p.x + 15, p.y);
    assert!(index.create(MarkerDraft::new(clear, "Third"), &w).is_ok());
}

#[test]
fn test_create_rejects_long_fields() {
    let w = window(100, 100, 15);
    let mut index = MarkerIndex::new();
    let p = inside(&w, 100, 100, 0, 0);

    let long_name = "n".repeat(MAX_NAME_LEN + 1);
    assert_eq!(
        index.create(MarkerDraft::new(p, long_name), &w),
        Err(MarkerError::NameTooLong { len: 128, max: 127 })
    );

    let draft = MarkerDraft::new(p, "ok").with_description("d".repeat(MAX_DESCRIPTION_LEN + 1));
    assert!(matches!(
        index.create(draft, &w),
        Err(MarkerError::DescriptionTooLong { .. })
    ));

    let draft = MarkerDraft::new(p, "n".repeat(MAX_NAME_LEN))
        .with_description("d".repeat(MAX_DESCRIPTION_LEN))
        .with_color(MarkerColor::Yellow);
    let id = index.create(draft, &w).unwrap();
    assert_eq!(index.get(id).unwrap().color(), MarkerColor::Yellow);
}

#[test]
fn test_marker_colors() {
    assert_eq!(MarkerColor::ALL.len(), 8);
    for (i, color) in MarkerColor::ALL.iter().enumerate() {
        assert_eq!(color.index(), i);
        assert_eq!(MarkerColor::from_index(i), Some(*color));
        assert_eq!(color.rgba()[3], 255);
    }
    assert_eq!(MarkerColor::from_index(8), None);
    assert_eq!(MarkerColor::Yellow.rgba(), [253, 233, 0, 255]);
    assert_eq!(MarkerColor::Red.rgba(), [255, 0, 60, 255]);
    assert_eq!(MarkerColor::Gray.to_string(), "gray");
}

#[test]
fn test_marker_inset_by_zoom() {
    assert_eq!(marker_inset(19), 0);
    assert_eq!(marker_inset(17), 0);
    assert_eq!(marker_inset(16), 5);
    assert_eq!(marker_inset(15), 5);
    assert_eq!(marker_inset(13), 6);
    assert_eq!(marker_inset(0), 7);
    assert!(is_hoverable(15));
    assert!(!is_hoverable(14));
}

#[test]
fn test_error_messages() {
    assert_eq!(MarkerError::EmptyName.to_string(), "Empty marker name");
    assert_eq!(
        MarkerError::Overlaps { existing: MarkerId(3) }.to_string(),
        "Marker overlaps existing marker #3"
    );
}
