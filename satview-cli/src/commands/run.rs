//! Run command - load the 9x9 tile window around a position.
//!
//! Drives a [`MapView`] headlessly until every slot has settled or the time
//! limit runs out, then prints the load statistics. Optionally stitches the
//! loaded tiles into one PNG.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::{imageops, Rgba, RgbaImage};
use satview::coord::{GeoPosition, TILE_SIZE};
use satview::decode::JpegDecoder;
use satview::grid::{SlotIndex, GRID_CELLS, GRID_SIZE};
use satview::loader::{FetchDecodePipeline, TileLoader, TilePipeline};
use satview::provider::{AsyncReqwestClient, MapboxProvider};
use satview::view::{MapView, TileOutcome};
use tokio::time::Instant;
use tracing::{info, warn};

use super::locate::check_position;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the run command.
#[derive(Default)]
pub struct RunArgs {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub zoom: Option<u8>,
    pub access_token: Option<String>,
    /// Overall time limit in seconds
    pub timeout: u64,
    pub mosaic: Option<PathBuf>,
    pub debug: bool,
}

/// Counts of what happened during a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub failed: usize,
    pub discarded: usize,
    pub timed_out: bool,
}

impl LoadSummary {
    fn record(&mut self, outcome: TileOutcome) {
        match outcome {
            TileOutcome::Loaded(_) => self.loaded += 1,
            TileOutcome::Failed(_) => self.failed += 1,
            TileOutcome::Discarded(_) => self.discarded += 1,
        }
    }

    fn settled(&self) -> usize {
        self.loaded + self.failed
    }
}

pub fn run(args: RunArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("run");
    let config = runner.config();

    let lat = args.lat.unwrap_or(config.map.latitude);
    let lon = args.lon.unwrap_or(config.map.longitude);
    let zoom = args.zoom.unwrap_or(config.map.zoom);
    check_position(lat, zoom)?;

    let token = args
        .access_token
        .or_else(|| config.provider.access_token.clone())
        .filter(|token| !token.is_empty())
        .ok_or(CliError::MissingToken)?;

    let loader_config = config.loader.to_loader_config();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    let client = AsyncReqwestClient::new(loader_config.request_timeout())?;
    let provider = MapboxProvider::new(client, token)
        .with_host(config.provider.host.clone())
        .with_tileset(config.provider.tileset.clone())
        .with_format(config.provider.format.clone());
    let pipeline = FetchDecodePipeline::new(provider, JpegDecoder::new());
    let loader = TileLoader::new(pipeline, runtime.handle().clone(), &loader_config);

    let mut view = MapView::new(GeoPosition::new(lat, lon), zoom, loader)?;

    println!("Loading tiles around {}, {} at zoom {}", lat, lon, zoom);
    println!("  Center tile: {}", view.center_tile());
    println!("  Log file:    {}", runner.log_path().display());
    println!();

    let limit = Duration::from_secs(args.timeout);
    let started = Instant::now();
    let summary = runtime.block_on(drive(&mut view, limit));
    let elapsed = started.elapsed();
    println!();

    if summary.timed_out {
        warn!("Stopped after {:?} with the grid still loading", limit);
        println!("Time limit of {}s reached before the grid settled.", args.timeout);
    }

    let stats = view.stats();
    info!("Run finished in {:.1}s: {}", elapsed.as_secs_f64(), stats);
    println!("Finished in {:.1}s", elapsed.as_secs_f64());
    println!("  Loaded:    {}", stats.loaded);
    println!("  Failed:    {}", stats.failed);
    println!("  Pending:   {}", stats.empty + stats.loading);
    println!("  Off-world: {}", stats.outside);
    if summary.discarded > 0 {
        println!("  Discarded: {}", summary.discarded);
    }

    if let Some(path) = args.mosaic {
        let placed = write_mosaic(&view, &path)?;
        println!();
        println!("Mosaic with {} tiles written to {}", placed, path.display());
    }

    Ok(())
}

/// Applies completions until nothing is in flight or `limit` has passed.
async fn drive<P: TilePipeline>(view: &mut MapView<P>, limit: Duration) -> LoadSummary {
    let deadline = Instant::now() + limit;
    let mut summary = LoadSummary::default();

    loop {
        match tokio::time::timeout_at(deadline, view.process_next_event()).await {
            Ok(Some(outcome)) => {
                summary.record(outcome);
                if let TileOutcome::Failed(slot) = outcome {
                    println!("  slot {} failed", slot);
                }
                print!("\r  {}/{} tiles settled", summary.settled(), GRID_CELLS);
                let _ = std::io::stdout().flush();
            }
            Ok(None) => break,
            Err(_) => {
                summary.timed_out = true;
                break;
            }
        }
    }
    summary
}

/// Stitches every loaded slot into one image, row-major like the grid.
/// Slots without imagery stay black.
fn write_mosaic<P: TilePipeline>(view: &MapView<P>, path: &Path) -> Result<usize, CliError> {
    let side = GRID_SIZE as u32 * TILE_SIZE;
    let mut canvas = RgbaImage::from_pixel(side, side, Rgba([0, 0, 0, 255]));

    let mut placed = 0;
    for slot in SlotIndex::all() {
        if let Some(image) = view.grid().image(slot) {
            let x = slot.col as i64 * TILE_SIZE as i64;
            let y = slot.row as i64 * TILE_SIZE as i64;
            imageops::replace(&mut canvas, image.pixels(), x, y);
            placed += 1;
        }
    }

    canvas.save(path).map_err(|e| CliError::FileWrite {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    info!(path = %path.display(), tiles = placed, "Mosaic written");
    Ok(placed)
}
