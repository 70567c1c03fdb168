//! Layout output model: grid records and card density.
//!
//! A `LayoutRecord` is the engine's output unit — one per surviving
//! event — carrying 1-indexed grid coordinates for any column/row based
//! layout system. Coordinates are emitted as plain numbers; mapping
//! them to inline positioning is the rendering adapter's job.
//!
//! `Density` classifies how much detail a rendered card may show:
//! wider cards progressively unlock a status label and a visible date
//! range.

use serde::{Deserialize, Serialize};

/// How much detail a rendered card has room for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Density {
    /// Title only.
    Compact,
    /// Title plus a secondary status label.
    Labeled,
    /// Title, status label, and a visible date range.
    Detailed,
}

/// Span thresholds controlling card density.
///
/// A card spanning at least `label_min_span` columns shows its status
/// label; at least `dates_min_span` columns also shows its date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityPolicy {
    /// Minimum column span for `Density::Labeled`.
    pub label_min_span: usize,
    /// Minimum column span for `Density::Detailed`.
    pub dates_min_span: usize,
}

impl Default for DensityPolicy {
    fn default() -> Self {
        Self {
            label_min_span: 2,
            dates_min_span: 3,
        }
    }
}

impl DensityPolicy {
    /// Classifies a column span.
    pub fn classify(&self, col_span: usize) -> Density {
        if col_span >= self.dates_min_span {
            Density::Detailed
        } else if col_span >= self.label_min_span {
            Density::Labeled
        } else {
            Density::Compact
        }
    }
}

/// Grid placement for a single event.
///
/// `row` is 0-indexed (top track first); `col_start` and `col_span` are
/// 1-indexed grid-column coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRecord {
    /// Identifier of the originating event.
    pub id: String,
    /// Assigned track, 0-indexed.
    pub row: usize,
    /// First grid column, 1-indexed.
    pub col_start: usize,
    /// Number of grid columns covered.
    pub col_span: usize,
    /// Detail level the card has room for.
    pub density: Density,
    /// The event continues past the left window edge.
    pub extends_left: bool,
    /// The event continues past the right window edge.
    pub extends_right: bool,
}
