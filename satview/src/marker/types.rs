//! Marker type definitions

use std::fmt;

use crate::coord::WorldPixel;

/// Position of a marker in the [`MarkerStore`](super::MarkerStore).
///
/// Ids are dense and never reused since markers are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub(crate) usize);

impl MarkerId {
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The eight marker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarkerColor {
    #[default]
    White,
    Cyan,
    Green,
    Magenta,
    Yellow,
    Red,
    Blue,
    Gray,
}

impl MarkerColor {
    /// All colors in palette order.
    pub const ALL: [MarkerColor; 8] = [
        MarkerColor::White,
        MarkerColor::Cyan,
        MarkerColor::Green,
        MarkerColor::Magenta,
        MarkerColor::Yellow,
        MarkerColor::Red,
        MarkerColor::Blue,
        MarkerColor::Gray,
    ];

    /// Opaque RGBA value.
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            MarkerColor::White => [255, 255, 255, 255],
            MarkerColor::Cyan => [0, 255, 255, 255],
            MarkerColor::Green => [0, 255, 0, 255],
            MarkerColor::Magenta => [255, 0, 255, 255],
            MarkerColor::Yellow => [253, 233, 0, 255],
            MarkerColor::Red => [255, 0, 60, 255],
            MarkerColor::Blue => [0, 0, 255, 255],
            MarkerColor::Gray => [65, 65, 65, 255],
        }
    }

    /// Position in the palette, `0..8`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            MarkerColor::White => "white",
            MarkerColor::Cyan => "cyan",
            MarkerColor::Green => "green",
            MarkerColor::Magenta => "magenta",
            MarkerColor::Yellow => "yellow",
            MarkerColor::Red => "red",
            MarkerColor::Blue => "blue",
            MarkerColor::Gray => "gray",
        }
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named, colored point on the map. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    id: MarkerId,
    name: String,
    description: String,
    position: WorldPixel,
    color: MarkerColor,
}

impl Marker {
    pub(crate) fn from_draft(id: MarkerId, draft: MarkerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            position: draft.position,
            color: draft.color,
        }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn position(&self) -> WorldPixel {
        self.position
    }

    pub fn color(&self) -> MarkerColor {
        self.color
    }
}

/// Marker contents before validation and id assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerDraft {
    pub position: WorldPixel,
    pub name: String,
    pub description: String,
    pub color: MarkerColor,
}

impl MarkerDraft {
    pub fn new(position: WorldPixel, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
            description: String::new(),
            color: MarkerColor::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_color(mut self, color: MarkerColor) -> Self {
        self.color = color;
        self
    }
}
