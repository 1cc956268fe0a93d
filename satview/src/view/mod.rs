//! The map view: tile grid, loader and markers behind one owner.
//!
//! [`MapView`] is driven from a single thread. Input arrives as method calls
//! or [`MapCommand`]s; completed fetches arrive through the loader channel and
//! are applied by [`MapView::drain_events`] or [`MapView::process_next_event`].
//! Every mutation runs to completion before the next one starts, so the grid
//! never needs a lock.
//!
//! After any call returns, the center tile is the tile containing the center
//! world pixel, and every loaded slot holds the tile of its derived address.

mod command;
mod present;

pub use command::{CommandOutcome, MapCommand};
pub use present::{VisibleMarker, VisibleSlot};

use std::fmt;
use std::sync::Arc;

use crate::coord::{
    tile_address_of, world_pixel_to_geo, CoordError, GeoPosition, TileAddress, WorldPixel,
    MAX_WORLD_PIXEL, MAX_ZOOM,
};
use crate::grid::{
    DiscardReason, GridStats, GridWindow, Recentering, SlotIndex, SlotStatus, TileGrid,
};
use crate::loader::{Dispatch, TileLoaded, TileLoader, TilePipeline};
use crate::log::{Logger, TracingLogger};
use crate::marker::{Marker, MarkerDraft, MarkerError, MarkerId, MarkerIndex};
use crate::{log_debug, log_info, log_trace};

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileOutcome {
    /// Stored as loaded in `slot`.
    Loaded(SlotIndex),
    /// Stored as failed in `slot`.
    Failed(SlotIndex),
    /// Dropped without touching the grid.
    Discarded(DiscardReason),
}

impl fmt::Display for TileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileOutcome::Loaded(slot) => write!(f, "loaded into {}", slot),
            TileOutcome::Failed(slot) => write!(f, "failed at {}", slot),
            TileOutcome::Discarded(reason) => write!(f, "discarded ({})", reason),
        }
    }
}

/// Slippy-map state for one session.
pub struct MapView<P: TilePipeline> {
    center: WorldPixel,
    grid: TileGrid,
    markers: MarkerIndex,
    loader: TileLoader<P>,
    fully_loaded: bool,
    logger: Arc<dyn Logger>,
}

impl<P: TilePipeline> MapView<P> {
    /// Creates a view centered on `center` and starts loading.
    ///
    /// Logs through `tracing`.
    pub fn new(
        center: impl Into<WorldPixel>,
        zoom: u8,
        loader: TileLoader<P>,
    ) -> Result<Self, CoordError> {
        Self::with_logger(center, zoom, loader, Arc::new(TracingLogger::new()))
    }

    /// Creates a view that logs through `logger`.
    pub fn with_logger(
        center: impl Into<WorldPixel>,
        zoom: u8,
        loader: TileLoader<P>,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, CoordError> {
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom));
        }
        let center = clamp_to_world(center.into());
        let grid = TileGrid::new(GridWindow::centered_on(center, zoom));

        let mut view = Self {
            center,
            grid,
            markers: MarkerIndex::new(),
            loader,
            fully_loaded: false,
            logger,
        };
        log_info!(
            view.logger,
            "Map view at {} zoom {} (center tile {})",
            world_pixel_to_geo(center),
            zoom,
            view.center_tile()
        );
        view.resume_loading();
        Ok(view)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn center(&self) -> WorldPixel {
        self.center
    }

    pub fn center_geo(&self) -> GeoPosition {
        world_pixel_to_geo(self.center)
    }

    pub fn zoom(&self) -> u8 {
        self.grid.window().zoom()
    }

    pub fn center_tile(&self) -> TileAddress {
        self.grid.window().center()
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn slot_status(&self, slot: SlotIndex) -> SlotStatus {
        self.grid.status(slot)
    }

    pub fn stats(&self) -> GridStats {
        self.grid.stats()
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.fully_loaded
    }

    /// Address of the fetch in flight, if any.
    pub fn in_flight(&self) -> Option<TileAddress> {
        self.loader.in_flight()
    }

    pub fn markers(&self) -> &MarkerIndex {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id)
    }

    /// Marker ids filed under `slot`.
    pub fn bucket(&self, slot: SlotIndex) -> &[MarkerId] {
        self.markers.query(slot)
    }

    pub fn pipeline(&self) -> &P {
        self.loader.pipeline()
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Moves the view center to `target`, clamped to the world.
    ///
    /// Kept tiles shift with the window; a shift of 9 or more tiles on either
    /// axis evicts everything.
    pub fn pan_to(&mut self, target: WorldPixel) {
        self.center = clamp_to_world(target);
        let next = GridWindow::centered_on(self.center, self.zoom());

        match self.grid.recenter(next) {
            Recentering::Unchanged => return,
            Recentering::Shifted { dx, dy, exposed } => {
                log_trace!(
                    self.logger,
                    "Grid shifted by ({}, {}), {} slots exposed",
                    dx,
                    dy,
                    exposed.len()
                );
                self.markers.shift(dx, dy, self.grid.window());
            }
            Recentering::Invalidated => {
                log_debug!(
                    self.logger,
                    "Pan to tile {} overshot the window, evicting all tiles",
                    self.center_tile()
                );
                self.markers.rebuild_all(self.grid.window());
            }
        }

        self.fully_loaded = false;
        self.resume_loading();
    }

    /// Switches to `zoom`, evicting every tile.
    ///
    /// Zoom levels above 19 are rejected and leave the view untouched. Setting
    /// the current zoom again only re-pumps the loader. Returns whether the
    /// zoom was accepted.
    pub fn set_zoom(&mut self, zoom: u8) -> bool {
        if zoom > MAX_ZOOM {
            log_debug!(self.logger, "Rejected zoom level {}", zoom);
            return false;
        }
        if zoom == self.zoom() {
            self.resume_loading();
            return true;
        }

        let window = GridWindow::centered_on(self.center, zoom);
        self.grid.invalidate(window);
        self.markers.rebuild_all(self.grid.window());
        log_debug!(
            self.logger,
            "Zoom {} -> center tile {}, all tiles evicted",
            zoom,
            self.center_tile()
        );

        self.fully_loaded = false;
        self.resume_loading();
        true
    }

    /// Applies a completed fetch and keeps the loader going.
    pub fn on_tile_loaded(&mut self, event: TileLoaded) -> TileOutcome {
        let TileLoaded { address, result } = event;
        let image = match result {
            Ok(image) => Some(image),
            Err(e) => {
                log_debug!(self.logger, "Tile {} failed: {}", address, e);
                None
            }
        };
        let failed = image.is_none();

        let outcome = match self.grid.complete(address, image) {
            Ok(slot) => {
                self.markers.rebuild(slot, self.grid.window());
                if failed {
                    TileOutcome::Failed(slot)
                } else {
                    log_debug!(self.logger, "Tile {} loaded into slot {}", address, slot);
                    TileOutcome::Loaded(slot)
                }
            }
            Err(reason) => {
                log_debug!(self.logger, "Tile {} discarded: {}", address, reason);
                TileOutcome::Discarded(reason)
            }
        };

        self.resume_loading();
        outcome
    }

    /// Applies every completion already waiting in the channel.
    pub fn drain_events(&mut self) -> Vec<TileOutcome> {
        let mut outcomes = Vec::new();
        while let Some(event) = self.loader.try_recv() {
            outcomes.push(self.on_tile_loaded(event));
        }
        outcomes
    }

    /// Waits for the in-flight fetch and applies it.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn process_next_event(&mut self) -> Option<TileOutcome> {
        let event = self.loader.recv().await?;
        Some(self.on_tile_loaded(event))
    }

    /// Makes every failed slot eligible for loading again.
    pub fn retry_failed(&mut self) -> usize {
        let count = self.grid.retry_failed();
        if count > 0 {
            log_info!(self.logger, "Retrying {} failed tiles", count);
            self.fully_loaded = false;
            self.resume_loading();
        }
        count
    }

    /// Validates a marker at a world position and stores it.
    pub fn create_marker_at(&mut self, draft: MarkerDraft) -> Result<MarkerId, MarkerError> {
        let name = draft.name.clone();
        match self.markers.create(draft, self.grid.window()) {
            Ok(id) => {
                log_info!(self.logger, "Marker {} '{}' created", id, name);
                Ok(id)
            }
            Err(e) => {
                log_debug!(self.logger, "Marker '{}' rejected: {}", name, e);
                Err(e)
            }
        }
    }

    /// Dispatches the next pending slot if the loader is free, or records that
    /// the grid is fully loaded.
    fn resume_loading(&mut self) {
        match self.loader.pump(&mut self.grid) {
            Dispatch::Started { slot, address } => {
                log_debug!(self.logger, "Loading tile {} into slot {}", address, slot);
            }
            Dispatch::Busy(_) => {}
            Dispatch::Idle => {
                if !self.fully_loaded && self.grid.is_settled() {
                    self.fully_loaded = true;
                    log_info!(self.logger, "Grid fully loaded: {}", self.grid.stats());
                }
            }
        }
    }
}

fn clamp_to_world(pixel: WorldPixel) -> WorldPixel {
    WorldPixel::new(pixel.x.min(MAX_WORLD_PIXEL), pixel.y.min(MAX_WORLD_PIXEL))
}

/// Center tile for a position, as the view would compute it.
pub fn center_tile_of(center: WorldPixel, zoom: u8) -> TileAddress {
    tile_address_of(clamp_to_world(center), zoom)
}
