//! Raw calendar event model.
//!
//! A `RawEvent` is the engine's input: an identifier plus a whole-day
//! date range. Everything else on the event (title, status, arbitrary
//! attributes) is opaque payload — the layout pipeline never inspects
//! it, and a renderer joins it back to the output by `id`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A date-ranged event to be placed on the calendar grid.
///
/// Dates are whole-day granularity (`NaiveDate`); both endpoints are
/// inclusive. An event whose `end` precedes its `start` is invalid and
/// is dropped with a diagnostic during clipping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Unique event identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// First day of the event (inclusive).
    pub start: NaiveDate,
    /// Last day of the event (inclusive).
    pub end: NaiveDate,
    /// Domain-specific key-value metadata (status, format, employee, ...).
    pub attributes: HashMap<String, String>,
}

impl RawEvent {
    /// Creates a new event covering `[start, end]`.
    pub fn new(id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            start,
            end,
            attributes: HashMap::new(),
        }
    }

    /// Sets the event title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Duration in days, endpoints inclusive.
    ///
    /// Negative for invalid events (`end` before `start`).
    pub fn duration_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }
}
