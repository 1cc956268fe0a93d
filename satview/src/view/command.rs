//! Input commands.
//!
//! Front ends translate their raw events (drags, wheel ticks, form submits)
//! into [`MapCommand`]s and hand them to [`MapView::execute`] together with
//! the viewport the map is drawn in.

use std::fmt;

use crate::coord::{
    screen_to_world_pixel, ScreenPoint, ScreenRect, WorldPixel, MAX_ZOOM, MIN_ZOOM,
};
use crate::loader::TilePipeline;
use crate::marker::{MarkerColor, MarkerDraft, MarkerError, MarkerId};

use super::MapView;

/// A user action on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapCommand {
    /// Content dragged by `(dx, dy)` screen pixels.
    Pan { dx: i32, dy: i32 },
    /// Wheel zoom by `delta` levels with the pointer at `cursor`.
    ZoomBy { delta: i32, cursor: ScreenPoint },
    /// New marker under the screen position `at`.
    CreateMarker {
        at: ScreenPoint,
        name: String,
        description: String,
        color: MarkerColor,
    },
    /// Reload every failed tile.
    RetryFailed,
}

/// Result of [`MapView::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Moved,
    Zoomed(u8),
    MarkerCreated(MarkerId),
    MarkerRejected(MarkerError),
    Retried(usize),
    /// The command had no effect.
    Ignored,
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Moved => write!(f, "moved"),
            CommandOutcome::Zoomed(zoom) => write!(f, "zoom {}", zoom),
            CommandOutcome::MarkerCreated(id) => write!(f, "marker {} created", id),
            CommandOutcome::MarkerRejected(e) => write!(f, "marker rejected: {}", e),
            CommandOutcome::Retried(count) => write!(f, "{} tiles retried", count),
            CommandOutcome::Ignored => write!(f, "ignored"),
        }
    }
}

impl<P: TilePipeline> MapView<P> {
    /// Applies one command.
    pub fn execute(&mut self, command: MapCommand, viewport: ScreenRect) -> CommandOutcome {
        match command {
            MapCommand::Pan { dx, dy } => {
                if dx == 0 && dy == 0 {
                    return CommandOutcome::Ignored;
                }
                self.pan_by(dx, dy);
                CommandOutcome::Moved
            }
            MapCommand::ZoomBy { delta, cursor } => match self.zoom_by(delta, cursor, viewport) {
                Some(zoom) => CommandOutcome::Zoomed(zoom),
                None => CommandOutcome::Ignored,
            },
            MapCommand::CreateMarker {
                at,
                name,
                description,
                color,
            } => {
                let draft = MarkerDraft::new(self.screen_to_world(at, viewport), name)
                    .with_description(description)
                    .with_color(color);
                match self.create_marker_at(draft) {
                    Ok(id) => CommandOutcome::MarkerCreated(id),
                    Err(e) => CommandOutcome::MarkerRejected(e),
                }
            }
            MapCommand::RetryFailed => match self.retry_failed() {
                0 => CommandOutcome::Ignored,
                count => CommandOutcome::Retried(count),
            },
        }
    }

    /// Drags the content by `(dx, dy)` screen pixels. The center moves the
    /// opposite way, scaled to world pixels.
    pub fn pan_by(&mut self, dx: i32, dy: i32) {
        let target = screen_to_world_pixel(
            ScreenPoint::new(0, 0),
            ScreenPoint::new(-dx, -dy),
            self.center,
            self.zoom(),
        );
        self.pan_to(target);
    }

    /// Changes zoom by `delta` levels around the view center.
    ///
    /// Ignored when `cursor` is outside `viewport`. The target level is
    /// clamped to the zoom range; returns the new zoom, or `None` when the
    /// zoom did not change.
    pub fn zoom_by(
        &mut self,
        delta: i32,
        cursor: ScreenPoint,
        viewport: ScreenRect,
    ) -> Option<u8> {
        if !viewport.contains(cursor) {
            return None;
        }
        let target = (self.zoom() as i32 + delta).clamp(MIN_ZOOM as i32, MAX_ZOOM as i32) as u8;
        if target == self.zoom() {
            return None;
        }
        self.set_zoom(target);
        Some(target)
    }

    /// World pixel under a screen position.
    pub fn screen_to_world(&self, point: ScreenPoint, viewport: ScreenRect) -> WorldPixel {
        screen_to_world_pixel(viewport.center(), point, self.center, self.zoom())
    }
}
