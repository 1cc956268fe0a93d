//! Tile cache grid
//!
//! A fixed 9×9 window of tile slots centered on the viewer's current tile.
//! The grid owns the decoded image of every loaded slot. Slot addresses are
//! never stored: they are derived from the window center, so content stays
//! consistent with its address as long as every recentering goes through
//! [`TileGrid::recenter`].
//!
//! The grid knows nothing about fetching. The loader asks it for pending
//! slots and hands results back through [`TileGrid::complete`].

mod slot;
mod window;

pub use slot::{SlotArray, SlotIndex, GRID_CELLS, GRID_RADIUS, GRID_SIZE};
pub use window::GridWindow;

use std::fmt;

use crate::coord::TileAddress;
use crate::decode::TileImage;

/// Load state of one slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SlotState {
    #[default]
    Empty,
    /// A fetch for this slot's address is in flight.
    Loading,
    Loaded(TileImage),
    /// Fetch or decode failed. Stays failed until an explicit retry.
    Failed,
}

impl SlotState {
    pub fn status(&self) -> SlotStatus {
        match self {
            SlotState::Empty => SlotStatus::Empty,
            SlotState::Loading => SlotStatus::Loading,
            SlotState::Loaded(_) => SlotStatus::Loaded,
            SlotState::Failed => SlotStatus::Failed,
        }
    }

    pub fn image(&self) -> Option<&TileImage> {
        match self {
            SlotState::Loaded(image) => Some(image),
            _ => None,
        }
    }

    /// Loaded or failed: the slot has finished loading either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, SlotState::Loaded(_) | SlotState::Failed)
    }
}

/// Image-free summary of [`SlotState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotStatus {
    Empty,
    Loading,
    Loaded,
    Failed,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlotStatus::Empty => "empty",
            SlotStatus::Loading => "loading",
            SlotStatus::Loaded => "loaded",
            SlotStatus::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Why a completed fetch was not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The address scrolled out of the window while the fetch was in flight.
    OutOfWindow,
    /// The zoom level changed while the fetch was in flight.
    StaleZoom,
    /// The slot was evicted and re-exposed, so it no longer waits for this fetch.
    NotLoading,
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DiscardReason::OutOfWindow => "tile left the window",
            DiscardReason::StaleZoom => "zoom level changed",
            DiscardReason::NotLoading => "slot is no longer loading",
        };
        f.write_str(reason)
    }
}

/// What a recentering did to the slot contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recentering {
    /// Same center tile, nothing moved.
    Unchanged,
    /// Content moved by `(dx, dy)` slots; `exposed` slots were reset.
    Shifted {
        dx: i64,
        dy: i64,
        exposed: Vec<SlotIndex>,
    },
    /// Every slot was evicted (zoom change or shift of a full window).
    Invalidated,
}

/// Per-status slot counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridStats {
    pub empty: usize,
    pub loading: usize,
    pub loaded: usize,
    pub failed: usize,
    /// Slots whose address lies outside the world. Counted here only.
    pub outside: usize,
}

impl GridStats {
    pub fn settled(&self) -> usize {
        self.loaded + self.failed
    }
}

impl fmt::Display for GridStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} loaded, {} failed, {} loading, {} empty, {} outside",
            self.loaded, self.failed, self.loading, self.empty, self.outside
        )
    }
}

/// The 9×9 slot window and its contents.
#[derive(Debug, Clone)]
pub struct TileGrid {
    window: GridWindow,
    slots: SlotArray<SlotState>,
}

impl TileGrid {
    /// Creates a grid with every slot empty.
    pub fn new(window: GridWindow) -> Self {
        Self {
            window,
            slots: SlotArray::new(),
        }
    }

    #[inline]
    pub fn window(&self) -> &GridWindow {
        &self.window
    }

    pub fn state(&self, slot: SlotIndex) -> &SlotState {
        &self.slots[slot]
    }

    pub fn status(&self, slot: SlotIndex) -> SlotStatus {
        self.slots[slot].status()
    }

    pub fn image(&self, slot: SlotIndex) -> Option<&TileImage> {
        self.slots[slot].image()
    }

    /// Moves the window to `next`.
    ///
    /// At the same zoom, content is shifted by old center minus new center so
    /// every kept slot still holds the tile of its derived address. A shift of
    /// 9 or more slots on either axis, or any zoom change, evicts everything.
    pub fn recenter(&mut self, next: GridWindow) -> Recentering {
        if next == self.window {
            return Recentering::Unchanged;
        }
        if next.zoom() != self.window.zoom() {
            self.invalidate(next);
            return Recentering::Invalidated;
        }

        let (dx, dy) = self.window.shift_to(&next);
        self.window = next;
        if dx.unsigned_abs() >= GRID_SIZE as u64 || dy.unsigned_abs() >= GRID_SIZE as u64 {
            self.slots.reset_all();
            return Recentering::Invalidated;
        }

        let exposed = self.slots.shift(dx, dy);
        Recentering::Shifted { dx, dy, exposed }
    }

    /// Evicts every slot and moves to `window`.
    pub fn invalidate(&mut self, window: GridWindow) {
        self.window = window;
        self.slots.reset_all();
    }

    /// Empty slot with an address inside the world.
    pub fn is_pending(&self, slot: SlotIndex) -> bool {
        matches!(self.slots[slot], SlotState::Empty) && self.window.address_of(slot).is_some()
    }

    pub fn has_pending(&self) -> bool {
        SlotIndex::all().any(|slot| self.is_pending(slot))
    }

    /// Marks a pending slot as loading and returns the address to fetch.
    ///
    /// Returns `None` if the slot is not pending.
    pub fn mark_loading(&mut self, slot: SlotIndex) -> Option<TileAddress> {
        if !self.is_pending(slot) {
            return None;
        }
        let address = self.window.address_of(slot)?;
        self.slots[slot] = SlotState::Loading;
        Some(address)
    }

    /// Stores the result of a fetch for `address`.
    ///
    /// `None` marks the slot failed. The result is discarded if the address
    /// no longer maps into the window or its slot is not waiting for it.
    pub fn complete(
        &mut self,
        address: TileAddress,
        image: Option<TileImage>,
    ) -> Result<SlotIndex, DiscardReason> {
        if address.zoom != self.window.zoom() {
            return Err(DiscardReason::StaleZoom);
        }
        let slot = self
            .window
            .slot_of(address)
            .ok_or(DiscardReason::OutOfWindow)?;
        if !matches!(self.slots[slot], SlotState::Loading) {
            return Err(DiscardReason::NotLoading);
        }

        self.slots[slot] = match image {
            Some(image) => SlotState::Loaded(image),
            None => SlotState::Failed,
        };
        Ok(slot)
    }

    /// Resets every failed slot to empty. Returns how many were reset.
    pub fn retry_failed(&mut self) -> usize {
        let failed: Vec<SlotIndex> = SlotIndex::all()
            .filter(|slot| matches!(self.slots[*slot], SlotState::Failed))
            .collect();
        for slot in &failed {
            self.slots[*slot] = SlotState::Empty;
        }
        failed.len()
    }

    /// Nothing left to fetch and nothing in flight.
    pub fn is_settled(&self) -> bool {
        self.slots.iter().all(|(slot, state)| {
            state.is_settled() || self.window.address_of(slot).is_none()
        })
    }

    pub fn stats(&self) -> GridStats {
        let mut stats = GridStats::default();
        for (slot, state) in self.slots.iter() {
            if self.window.address_of(slot).is_none() {
                stats.outside += 1;
                continue;
            }
            match state.status() {
                SlotStatus::Empty => stats.empty += 1,
                SlotStatus::Loading => stats.loading += 1,
                SlotStatus::Loaded => stats.loaded += 1,
                SlotStatus::Failed => stats.failed += 1,
            }
        }
        stats
    }
}
