//! Visible window model.
//!
//! A `Window` is the contiguous day range currently rendered: a start
//! date and a length in day columns (7 for week view, 28-31 for month
//! view). Day indices are offsets from `start`; index 0 is the first
//! visible column.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The currently visible day range of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Date of the first visible day column.
    pub start: NaiveDate,
    /// Number of day columns rendered. Must be at least 1; a zero-length
    /// window is rejected by `layout` with `LayoutError::InvalidWindow`.
    pub length: usize,
}

impl Window {
    /// Creates a window of `length` day columns starting at `start`.
    pub fn new(start: NaiveDate, length: usize) -> Self {
        Self { start, length }
    }

    /// Signed day offset of `date` from the window start.
    ///
    /// Negative when `date` precedes the window; may exceed
    /// `length - 1` when it lies past the window.
    #[inline]
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.start).num_days()
    }

    /// Index of the last visible day column (`length - 1`).
    ///
    /// `None` for a zero-length window.
    pub fn last_index(&self) -> Option<usize> {
        self.length.checked_sub(1)
    }

    /// Whether `date` falls inside the visible range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let offset = self.day_offset(date);
        offset >= 0 && offset < self.length as i64
    }
}
