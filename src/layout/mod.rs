//! The layout pipeline: events in, grid records out.
//!
//! Three pure stages run in sequence on every recomputation:
//!
//! 1. **`timeline`**: clip raw events to day-index intervals within
//!    the window.
//! 2. **`rows`**: partition the intervals into the minimum number of
//!    non-overlapping rows (the algorithmic core).
//! 3. **`grid`**: map each placed interval to 1-indexed grid
//!    coordinates and a density classification.
//!
//! The whole pass is synchronous, side-effect-free, and holds no
//! memory of previous runs — identical input always yields identical
//! output, so re-rendering the same data never reshuffles rows.

mod grid;
mod rows;
mod timeline;

pub use grid::map_to_grid;
pub use rows::{assign_rows, RowAssignment, RowPlan};
pub use timeline::clip_events;

use serde::{Deserialize, Serialize};

use crate::error::{Diagnostic, LayoutError};
use crate::models::{DensityPolicy, LayoutRecord, RawEvent, Window};

/// The result of one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// One record per surviving event, in the input order of the
    /// events that survived clipping.
    pub records: Vec<LayoutRecord>,
    /// Number of rows used. Equals the maximum overlap depth; zero for
    /// an empty event set.
    pub row_count: usize,
    /// Non-fatal diagnostics for dropped events.
    pub diagnostics: Vec<Diagnostic>,
}

/// Lays out events on the day grid of `window`.
///
/// The single public entry point of the engine. Rejects a zero-length
/// window upfront; every other irregularity (invalid events, events
/// outside the window, an empty event set) is handled per event
/// without aborting the pass.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timegrid::{layout, DensityPolicy, RawEvent, Window};
///
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let events = vec![
///     RawEvent::new(
///         "onboarding",
///         NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
///     ),
/// ];
///
/// let result = layout(&events, &Window::new(monday, 7), &DensityPolicy::default()).unwrap();
/// assert_eq!(result.row_count, 1);
/// assert_eq!(result.records[0].col_start, 2);
/// assert_eq!(result.records[0].col_span, 3);
/// ```
pub fn layout(
    events: &[RawEvent],
    window: &Window,
    policy: &DensityPolicy,
) -> Result<Layout, LayoutError> {
    if window.length == 0 {
        return Err(LayoutError::InvalidWindow {
            length: window.length,
        });
    }

    let (intervals, diagnostics) = clip_events(events, window);
    let plan = assign_rows(&intervals);

    let records = intervals
        .iter()
        .zip(&plan.assignments)
        .map(|(interval, assignment)| map_to_grid(interval, assignment.row, policy))
        .collect();

    Ok(Layout {
        records,
        row_count: plan.row_count,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagnosticKind;
    use crate::models::Density;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rows_by_id(result: &Layout) -> HashMap<String, usize> {
        result
            .records
            .iter()
            .map(|r| (r.id.clone(), r.row))
            .collect()
    }

    #[test]
    fn test_week_scenario_end_to_end() {
        // Window covers day indices 0..=7; C runs past the edge and is
        // clipped from [6,8] to [6,7].
        let base = date(2025, 3, 3);
        let day = |offset: u64| base + chrono::Days::new(offset);
        let events = vec![
            RawEvent::new("D", day(1), day(2)),
            RawEvent::new("B", day(2), day(5)),
            RawEvent::new("A", day(3), day(7)),
            RawEvent::new("C", day(6), day(8)),
        ];

        let result = layout(&events, &Window::new(base, 8), &DensityPolicy::default()).unwrap();
        let rows = rows_by_id(&result);

        assert_eq!(result.row_count, 2);
        assert_eq!(rows["D"], 0);
        assert_eq!(rows["A"], 0);
        assert_eq!(rows["B"], 1);
        assert_eq!(rows["C"], 1);

        let c = result.records.iter().find(|r| r.id == "C").unwrap();
        assert_eq!(c.col_start, 7);
        assert_eq!(c.col_span, 2);
        assert!(c.extends_right);
        assert_eq!(c.density, Density::Labeled);
    }

    #[test]
    fn test_empty_event_set() {
        let result = layout(
            &[],
            &Window::new(date(2025, 3, 3), 7),
            &DensityPolicy::default(),
        )
        .unwrap();

        assert!(result.records.is_empty());
        assert_eq!(result.row_count, 0);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_zero_length_window_rejected() {
        let events = vec![RawEvent::new("E1", date(2025, 3, 3), date(2025, 3, 4))];
        let err = layout(
            &events,
            &Window::new(date(2025, 3, 3), 0),
            &DensityPolicy::default(),
        )
        .unwrap_err();

        assert_eq!(err, LayoutError::InvalidWindow { length: 0 });
    }

    #[test]
    fn test_diagnostics_surfaced_without_aborting() {
        let events = vec![
            RawEvent::new("bad", date(2025, 3, 6), date(2025, 3, 4)),
            RawEvent::new("good", date(2025, 3, 4), date(2025, 3, 5)),
        ];
        let result = layout(
            &events,
            &Window::new(date(2025, 3, 3), 7),
            &DensityPolicy::default(),
        )
        .unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].id, "good");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::InvalidInterval);
    }

    #[test]
    fn test_recomputation_is_stateless() {
        let events = vec![
            RawEvent::new("A", date(2025, 3, 3), date(2025, 3, 7)),
            RawEvent::new("B", date(2025, 3, 5), date(2025, 3, 9)),
        ];
        let window = Window::new(date(2025, 3, 3), 7);
        let policy = DensityPolicy::default();

        let first = layout(&events, &window, &policy).unwrap();
        let second = layout(&events, &window, &policy).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_layout_serde_round_trip() {
        let events = vec![RawEvent::new("E1", date(2025, 3, 4), date(2025, 3, 6))];
        let result = layout(
            &events,
            &Window::new(date(2025, 3, 3), 7),
            &DensityPolicy::default(),
        )
        .unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
