//! Marker store and per-slot buckets.

use crate::grid::{GridWindow, SlotArray, SlotIndex, GRID_CELLS};

use super::{
    Marker, MarkerDraft, MarkerError, MarkerId, MARKER_FOOTPRINT, MAX_DESCRIPTION_LEN,
    MAX_NAME_LEN,
};

/// Append-only owner of every marker.
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    markers: Vec<Marker>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, draft: MarkerDraft) -> MarkerId {
        let id = MarkerId(self.markers.len());
        self.markers.push(Marker::from_draft(id, draft));
        id
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Markers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }
}

/// Partitions the store into one bucket per grid slot.
///
/// A bucket holds the ids of markers whose position lies in its slot's tile
/// box, in store order. Buckets never own markers. Every operation that
/// changes which tile a slot covers must be mirrored here, passing the
/// window as it is after the change.
#[derive(Debug, Clone, Default)]
pub struct MarkerIndex {
    store: MarkerStore,
    buckets: SlotArray<Vec<MarkerId>>,
}

impl MarkerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Appends a marker without validation and files it into its bucket.
    pub fn insert(&mut self, draft: MarkerDraft, window: &GridWindow) -> MarkerId {
        let position = draft.position;
        let id = self.store.push(draft);
        if let Some(slot) = window.slot_containing(position) {
            self.buckets[slot].push(id);
        }
        id
    }

    /// Recomputes one bucket by scanning the whole store.
    pub fn rebuild(&mut self, slot: SlotIndex, window: &GridWindow) {
        let bucket = &mut self.buckets[slot];
        bucket.clear();
        let Some(address) = window.address_of(slot) else {
            return;
        };
        bucket.extend(
            self.store
                .iter()
                .filter(|marker| address.contains(marker.position()))
                .map(|marker| marker.id()),
        );
    }

    /// Recomputes every bucket in one pass over the store.
    pub fn rebuild_all(&mut self, window: &GridWindow) {
        self.buckets.reset_all();
        for marker in self.store.iter() {
            if let Some(slot) = window.slot_containing(marker.position()) {
                self.buckets[slot].push(marker.id());
            }
        }
    }

    /// Moves buckets along with a grid shift and rebuilds the exposed ones.
    pub fn shift(&mut self, dx: i64, dy: i64, window: &GridWindow) {
        let exposed = self.buckets.shift(dx, dy);
        if exposed.len() == GRID_CELLS {
            self.rebuild_all(window);
            return;
        }
        for slot in exposed {
            self.rebuild(slot, window);
        }
    }

    /// Ids of the markers in `slot`, in store order.
    pub fn query(&self, slot: SlotIndex) -> &[MarkerId] {
        &self.buckets[slot]
    }

    /// Validates a draft against the field limits and existing markers.
    pub fn check(&self, draft: &MarkerDraft) -> Result<(), MarkerError> {
        if draft.name.trim().is_empty() {
            return Err(MarkerError::EmptyName);
        }
        let len = draft.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(MarkerError::NameTooLong {
                len,
                max: MAX_NAME_LEN,
            });
        }
        let len = draft.description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(MarkerError::DescriptionTooLong {
                len,
                max: MAX_DESCRIPTION_LEN,
            });
        }

        let footprint = MARKER_FOOTPRINT as i64;
        let overlapping = self.store.iter().find(|marker| {
            let dx = marker.position().x as i64 - draft.position.x as i64;
            let dy = marker.position().y as i64 - draft.position.y as i64;
            dx.abs() < footprint && dy.abs() < footprint
        });
        match overlapping {
            Some(marker) => Err(MarkerError::Overlaps {
                existing: marker.id(),
            }),
            None => Ok(()),
        }
    }

    /// Validates then inserts. The store is untouched on error.
    pub fn create(
        &mut self,
        draft: MarkerDraft,
        window: &GridWindow,
    ) -> Result<MarkerId, MarkerError> {
        self.check(&draft)?;
        Ok(self.insert(draft, window))
    }
}
