//! Sequential tile loader
//!
//! Fills the grid one tile at a time in spiral order. Each dispatch runs the
//! [`TilePipeline`] on a detached tokio task; the task owns nothing shared
//! and reports back through a bounded channel that only the owning thread
//! reads. Grid state is never touched off that thread.
//!
//! At most one fetch is in flight. The loader remembers the address it
//! dispatched and refuses a second dispatch until the completion for it has
//! been received.

mod error;
mod pipeline;
mod spiral;

pub use error::{LoadError, LoaderBusy};
pub use pipeline::{FetchDecodePipeline, TilePipeline};
pub use spiral::{next_pending, spiral_order};

#[cfg(test)]
pub use pipeline::tests::MockPipeline;

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::config::LoaderConfig;
use crate::coord::TileAddress;
use crate::decode::TileImage;
use crate::grid::{SlotIndex, TileGrid};

/// Completion notification posted by the background task.
#[derive(Debug)]
pub struct TileLoaded {
    pub address: TileAddress,
    pub result: Result<TileImage, LoadError>,
}

impl TileLoaded {
    /// The image, or `None` for a failed load.
    pub fn into_image(self) -> Option<TileImage> {
        self.result.ok()
    }
}

/// Outcome of [`TileLoader::pump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A fetch for `address` was started and `slot` marked loading.
    Started { slot: SlotIndex, address: TileAddress },
    /// A fetch is already in flight.
    Busy(TileAddress),
    /// Nothing left to load.
    Idle,
}

/// Single-flight tile loader.
pub struct TileLoader<P: TilePipeline> {
    pipeline: Arc<P>,
    runtime: Handle,
    tx: mpsc::Sender<TileLoaded>,
    rx: mpsc::Receiver<TileLoaded>,
    in_flight: Option<TileAddress>,
}

impl<P: TilePipeline> TileLoader<P> {
    /// Creates a loader whose background tasks run on `runtime`.
    pub fn new(pipeline: P, runtime: Handle, config: &LoaderConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.channel_capacity().max(1));
        Self {
            pipeline: Arc::new(pipeline),
            runtime,
            tx,
            rx,
            in_flight: None,
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Address of the fetch in flight, if any.
    pub fn in_flight(&self) -> Option<TileAddress> {
        self.in_flight
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_none()
    }

    /// Starts a background fetch for `address`.
    pub fn dispatch(&mut self, address: TileAddress) -> Result<(), LoaderBusy> {
        if let Some(in_flight) = self.in_flight {
            return Err(LoaderBusy { in_flight });
        }
        self.in_flight = Some(address);

        let pipeline = Arc::clone(&self.pipeline);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = pipeline.load(address).await;
            if tx.send(TileLoaded { address, result }).await.is_err() {
                trace!(tile = %address, "Loader dropped before tile completed");
            }
        });

        debug!(tile = %address, "Tile dispatched");
        Ok(())
    }

    /// Picks the next pending slot in spiral order, marks it loading and
    /// dispatches its fetch.
    pub fn pump(&mut self, grid: &mut TileGrid) -> Dispatch {
        if let Some(in_flight) = self.in_flight {
            return Dispatch::Busy(in_flight);
        }
        let Some(slot) = next_pending(grid) else {
            return Dispatch::Idle;
        };
        let Some(address) = grid.mark_loading(slot) else {
            return Dispatch::Idle;
        };
        match self.dispatch(address) {
            Ok(()) => Dispatch::Started { slot, address },
            Err(busy) => Dispatch::Busy(busy.in_flight),
        }
    }

    /// Takes a completion without waiting.
    pub fn try_recv(&mut self) -> Option<TileLoaded> {
        let event = self.rx.try_recv().ok()?;
        self.in_flight = None;
        Some(event)
    }

    /// Waits for the in-flight fetch to complete.
    ///
    /// Returns `None` immediately when nothing is in flight and no completion
    /// is queued.
    pub async fn recv(&mut self) -> Option<TileLoaded> {
        if self.in_flight.is_none() {
            return self.try_recv();
        }
        let event = self.rx.recv().await?;
        self.in_flight = None;
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridWindow, SlotStatus, GRID_CELLS};

    fn loader(pipeline: MockPipeline) -> TileLoader<MockPipeline> {
        TileLoader::new(pipeline, Handle::current(), &LoaderConfig::default())
    }

    fn grid() -> TileGrid {
        TileGrid::new(GridWindow::new(TileAddress { x: 100, y: 100, zoom: 15 }))
    }

    #[tokio::test]
    async fn test_second_dispatch_is_refused_while_in_flight() {
        let mock = MockPipeline::gated();
        let mut loader = loader(mock.clone());
        let a = TileAddress { x: 1, y: 1, zoom: 3 };
        let b = TileAddress { x: 2, y: 1, zoom: 3 };

        loader.dispatch(a).unwrap();
        assert_eq!(loader.dispatch(b), Err(LoaderBusy { in_flight: a }));

        mock.release(1);
        let event = loader.recv().await.unwrap();
        assert_eq!(event.address, a);
        assert!(loader.is_idle());
        assert!(loader.dispatch(b).is_ok());
    }

    #[tokio::test]
    async fn test_pump_marks_center_loading_first() {
        let mock = MockPipeline::gated();
        let mut loader = loader(mock.clone());
        let mut grid = grid();

        let dispatch = loader.pump(&mut grid);
        assert_eq!(
            dispatch,
            Dispatch::Started {
                slot: SlotIndex::CENTER,
                address: TileAddress { x: 100, y: 100, zoom: 15 }
            }
        );
        assert_eq!(grid.status(SlotIndex::CENTER), SlotStatus::Loading);

        // Busy: nothing else is marked
        assert!(matches!(loader.pump(&mut grid), Dispatch::Busy(_)));
        assert_eq!(grid.stats().loading, 1);
        mock.release(1);
    }

    #[tokio::test]
    async fn test_loader_fills_grid_in_spiral_order() {
        let mock = MockPipeline::new();
        let mut loader = loader(mock.clone());
        let mut grid = grid();

        while let Dispatch::Started { .. } = loader.pump(&mut grid) {
            let event = loader.recv().await.unwrap();
            grid.complete(event.address, event.into_image()).unwrap();
        }

        assert_eq!(loader.pump(&mut grid), Dispatch::Idle);
        assert_eq!(grid.stats().loaded, GRID_CELLS);
        let expected: Vec<TileAddress> = spiral_order()
            .map(|slot| grid.window().address_of(slot).unwrap())
            .collect();
        assert_eq!(mock.requested(), expected);
    }

    #[tokio::test]
    async fn test_failed_load_is_reported() {
        let mock = MockPipeline::new();
        let center = TileAddress { x: 100, y: 100, zoom: 15 };
        mock.fail(center);
        let mut loader = loader(mock);
        let mut grid = grid();

        loader.pump(&mut grid);
        let event = loader.recv().await.unwrap();
        assert!(matches!(event.result, Err(LoadError::Transport(_))));
        grid.complete(event.address, event.into_image()).unwrap();
        assert_eq!(grid.status(SlotIndex::CENTER), SlotStatus::Failed);
    }

    #[tokio::test]
    async fn test_recv_without_dispatch_returns_none() {
        let mut loader = loader(MockPipeline::new());
        assert!(loader.recv().await.is_none());
        assert!(loader.try_recv().is_none());
    }
}
