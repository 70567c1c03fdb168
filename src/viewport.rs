//! Viewport navigation: visible-range state machine.
//!
//! Tracks the current view mode and anchor date and derives the
//! `Window` the layout pipeline runs against. Every transition
//! (advance, retreat, mode switch, jump) re-derives the window; the
//! emitted window is the sole trigger for recomputing the layout.
//!
//! # Window derivation
//!
//! - `Week`: starts on the Monday of the anchor's week, 7 columns.
//! - `Month`: starts on the 1st of the anchor's month, 28-31 columns.
//! - `HalfYear`: long-range mode with a horizontally scrolled grid;
//!   starts at the anchor, fixed 30 columns.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Window;

/// Granularity of the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Monday-aligned 7-day window.
    Week,
    /// Full calendar month.
    Month,
    /// 30-day scrolling window for long-range browsing.
    HalfYear,
}

/// Navigation state for the visible calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportWindow {
    /// Current granularity.
    pub mode: ViewMode,
    /// The date the view is centered on. Any date within the displayed
    /// period; window derivation aligns it to the period start.
    pub anchor: NaiveDate,
}

impl ViewportWindow {
    /// Creates a viewport in month mode anchored at `anchor`.
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            mode: ViewMode::Month,
            anchor,
        }
    }

    /// Sets the initial view mode.
    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    /// Moves forward by one unit of the current mode.
    pub fn advance(&mut self) -> Window {
        self.anchor = match self.mode {
            ViewMode::Week => self.anchor.checked_add_days(Days::new(7)),
            ViewMode::Month => self.anchor.checked_add_months(Months::new(1)),
            ViewMode::HalfYear => self.anchor.checked_add_days(Days::new(30)),
        }
        .unwrap_or(self.anchor);
        self.window()
    }

    /// Moves backward by one unit of the current mode.
    pub fn retreat(&mut self) -> Window {
        self.anchor = match self.mode {
            ViewMode::Week => self.anchor.checked_sub_days(Days::new(7)),
            ViewMode::Month => self.anchor.checked_sub_months(Months::new(1)),
            ViewMode::HalfYear => self.anchor.checked_sub_days(Days::new(30)),
        }
        .unwrap_or(self.anchor);
        self.window()
    }

    /// Switches granularity, keeping the anchor date.
    pub fn set_mode(&mut self, mode: ViewMode) -> Window {
        self.mode = mode;
        self.window()
    }

    /// Sets the anchor directly.
    pub fn jump_to(&mut self, date: NaiveDate) -> Window {
        self.anchor = date;
        self.window()
    }

    /// Derives the visible window for the current state.
    pub fn window(&self) -> Window {
        match self.mode {
            ViewMode::Week => Window::new(monday_of_week(self.anchor), 7),
            ViewMode::Month => {
                let first = self.anchor.with_day(1).unwrap_or(self.anchor);
                Window::new(first, days_in_month(first) as usize)
            }
            ViewMode::HalfYear => Window::new(self.anchor, 30),
        }
    }
}

/// Monday of the week containing `date`.
fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Number of days in the calendar month containing `date`.
fn days_in_month(date: NaiveDate) -> i64 {
    let first = date.with_day(1).unwrap_or(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days(),
        None => 31,
    }
}
