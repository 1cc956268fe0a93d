//! Marker spatial index
//!
//! Markers live in a flat append-only [`MarkerStore`]. The [`MarkerIndex`]
//! keeps, for each of the 81 grid slots, the ids of the markers inside that
//! slot's tile box, so drawing and hit-testing only look at markers near the
//! visible tiles. Buckets are rebuilt when a slot's tile changes (load, shift,
//! eviction); rebuilding scans the whole store, which is cheap at the rate
//! tiles change.

mod error;
mod index;
mod types;

pub use error::MarkerError;
pub use index::{MarkerIndex, MarkerStore};
pub use types::{Marker, MarkerColor, MarkerDraft, MarkerId};

/// Edge length of a drawn marker in screen pixels, and the minimum world
/// pixel distance (per axis) between two markers.
pub const MARKER_FOOTPRINT: u32 = 15;

/// Longest accepted marker name, in characters.
pub const MAX_NAME_LEN: usize = 127;

/// Longest accepted marker description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 2047;

/// Pixels trimmed from each side of a marker when drawn at `zoom`.
///
/// Markers shrink as the map zooms out. Past an inset of 5 they are too small
/// to point at, see [`is_hoverable`].
pub fn marker_inset(zoom: u8) -> u32 {
    match zoom {
        17.. => 0,
        15..=16 => 5,
        13..=14 => 6,
        _ => 7,
    }
}

/// Whether markers can be hovered or picked at `zoom`.
pub fn is_hoverable(zoom: u8) -> bool {
    marker_inset(zoom) < 6
}

#[cfg(test)]
mod tests;
