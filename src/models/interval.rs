//! Day-index interval model.
//!
//! An `Interval` is an event reduced to `[start_index, end_index]`
//! day-index bounds inside the current window. Both bounds are
//! inclusive, so two intervals overlap iff neither ends strictly
//! before the other starts.
//!
//! # Invariant
//! `0 <= start_index <= end_index < window.length`. Clipping
//! (`layout::timeline`) is responsible for establishing this; the row
//! assigner and grid mapper rely on it.

use serde::{Deserialize, Serialize};

/// An event clipped to day-index bounds within the visible window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Identifier of the originating event.
    pub id: String,
    /// First covered day index (inclusive).
    pub start_index: usize,
    /// Last covered day index (inclusive).
    pub end_index: usize,
    /// The event started before the window and was cut at the left edge.
    pub extends_left: bool,
    /// The event ends after the window and was cut at the right edge.
    pub extends_right: bool,
}

impl Interval {
    /// Creates an interval fully inside the window.
    pub fn new(id: impl Into<String>, start_index: usize, end_index: usize) -> Self {
        Self {
            id: id.into(),
            start_index,
            end_index,
            extends_left: false,
            extends_right: false,
        }
    }

    /// Number of day columns covered, endpoints inclusive.
    #[inline]
    pub fn span(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// Whether two intervals share at least one day index.
    ///
    /// Inclusive-bounds test: `!(a.end < b.start || b.end < a.start)`.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end_index < other.start_index || other.end_index < self.start_index)
    }
}
