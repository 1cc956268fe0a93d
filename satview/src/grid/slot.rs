//! Slot indexing and the fixed 9×9 cell store.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Edge length of the slot window. Odd, so a unique center slot exists.
pub const GRID_SIZE: usize = 9;

/// Slots between the center and the window edge.
pub const GRID_RADIUS: usize = GRID_SIZE / 2;

/// Total slots in the window.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Position of a slot in the window, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex {
    pub row: usize,
    pub col: usize,
}

impl SlotIndex {
    pub const CENTER: SlotIndex = SlotIndex {
        row: GRID_RADIUS,
        col: GRID_RADIUS,
    };

    /// Returns `None` when the position is outside the window.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Self { row, col })
    }

    /// Row-major position in `0..GRID_CELLS`.
    #[inline]
    pub fn flat(&self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    pub fn from_flat(index: usize) -> Option<Self> {
        (index < GRID_CELLS).then(|| Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        })
    }

    /// Column and row offset `(dx, dy)` from the center slot.
    #[inline]
    pub fn offset_from_center(&self) -> (i64, i64) {
        (
            self.col as i64 - GRID_RADIUS as i64,
            self.row as i64 - GRID_RADIUS as i64,
        )
    }

    /// Every slot in row-major order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..GRID_CELLS).map(|i| Self {
            row: i / GRID_SIZE,
            col: i % GRID_SIZE,
        })
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// One value per slot, with whole-window shifting.
///
/// Used for tile states and for marker buckets so both move in lockstep
/// when the window pans.
#[derive(Debug, Clone)]
pub struct SlotArray<T> {
    cells: [T; GRID_CELLS],
}

impl<T: Default> SlotArray<T> {
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| T::default()),
        }
    }

    /// Moves every cell `dx` columns and `dy` rows.
    ///
    /// Cells pushed past the window edge are dropped. Cells left uncovered
    /// are reset to `T::default()` and returned in row-major order. A shift of
    /// a full window or more on either axis therefore resets everything.
    pub fn shift(&mut self, dx: i64, dy: i64) -> Vec<SlotIndex> {
        let old = std::mem::replace(&mut self.cells, std::array::from_fn(|_| T::default()));
        let mut covered = [false; GRID_CELLS];

        for (index, cell) in SlotIndex::all().zip(old) {
            let row = index.row as i64 + dy;
            let col = index.col as i64 + dx;
            if (0..GRID_SIZE as i64).contains(&row) && (0..GRID_SIZE as i64).contains(&col) {
                let target = row as usize * GRID_SIZE + col as usize;
                self.cells[target] = cell;
                covered[target] = true;
            }
        }

        SlotIndex::all().filter(|index| !covered[index.flat()]).collect()
    }

    /// Resets every cell to `T::default()`.
    pub fn reset_all(&mut self) {
        for cell in &mut self.cells {
            *cell = T::default();
        }
    }
}

impl<T: Default> Default for SlotArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotArray<T> {
    /// Iterates `(slot, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &T)> {
        SlotIndex::all().zip(self.cells.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T> Index<SlotIndex> for SlotArray<T> {
    type Output = T;

    fn index(&self, index: SlotIndex) -> &T {
        &self.cells[index.flat()]
    }
}

impl<T> IndexMut<SlotIndex> for SlotArray<T> {
    fn index_mut(&mut self, index: SlotIndex) -> &mut T {
        &mut self.cells[index.flat()]
    }
}
