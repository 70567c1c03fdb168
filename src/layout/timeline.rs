//! Event clipping: raw events to day-index intervals.
//!
//! Converts raw date-ranged events into normalized `Interval`s
//! expressed as day indices within the current window. Events fully
//! outside the window are dropped silently (debug-logged); events
//! whose end precedes their start are dropped with an
//! `InvalidInterval` diagnostic while the rest of the pass continues.
//!
//! Output order is the insertion order of surviving events. Sorting
//! is the row assigner's concern, not this module's.

use log::{debug, warn};

use crate::error::Diagnostic;
use crate::models::{Interval, RawEvent, Window};

/// Clips events to the visible window.
///
/// Each surviving event becomes an `Interval` with
/// `start_index = max(0, offset(event.start))` and
/// `end_index = min(length - 1, offset(event.end))`. The extends
/// flags record which edges were cut.
///
/// The window must have at least one column; `layout` validates that
/// before calling here.
pub fn clip_events(events: &[RawEvent], window: &Window) -> (Vec<Interval>, Vec<Diagnostic>) {
    let last = window.length as i64 - 1;
    let mut intervals = Vec::with_capacity(events.len());
    let mut diagnostics = Vec::new();

    for event in events {
        if event.end < event.start {
            warn!(
                "dropping event '{}': end {} precedes start {}",
                event.id, event.end, event.start
            );
            diagnostics.push(Diagnostic::invalid_interval(
                &event.id,
                format!("end {} precedes start {}", event.end, event.start),
            ));
            continue;
        }

        let start_offset = window.day_offset(event.start);
        let end_offset = window.day_offset(event.end);

        if end_offset < 0 || start_offset > last {
            debug!("event '{}' lies outside the visible window", event.id);
            continue;
        }

        intervals.push(Interval {
            id: event.id.clone(),
            start_index: start_offset.max(0) as usize,
            end_index: end_offset.min(last) as usize,
            extends_left: start_offset < 0,
            extends_right: end_offset > last,
        });
    }

    (intervals, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagnosticKind;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn week_window() -> Window {
        // Monday 2025-03-03 through Sunday 2025-03-09.
        Window::new(date(2025, 3, 3), 7)
    }

    #[test]
    fn test_event_inside_window() {
        let events = vec![RawEvent::new("E1", date(2025, 3, 4), date(2025, 3, 6))];
        let (intervals, diagnostics) = clip_events(&events, &week_window());

        assert!(diagnostics.is_empty());
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start_index, 1);
        assert_eq!(intervals[0].end_index, 3);
        assert!(!intervals[0].extends_left);
        assert!(!intervals[0].extends_right);
    }

    #[test]
    fn test_clipping_both_edges() {
        let events = vec![RawEvent::new("E1", date(2025, 2, 25), date(2025, 3, 20))];
        let (intervals, _) = clip_events(&events, &week_window());

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start_index, 0);
        assert_eq!(intervals[0].end_index, 6);
        assert!(intervals[0].extends_left);
        assert!(intervals[0].extends_right);
    }

    #[test]
    fn test_outside_events_dropped_silently() {
        let events = vec![
            RawEvent::new("before", date(2025, 2, 1), date(2025, 2, 28)),
            RawEvent::new("after", date(2025, 3, 10), date(2025, 3, 12)),
        ];
        let (intervals, diagnostics) = clip_events(&events, &week_window());

        assert!(intervals.is_empty());
        // Out-of-window is not an error condition.
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_interval_diagnostic_continues() {
        let events = vec![
            RawEvent::new("bad", date(2025, 3, 6), date(2025, 3, 4)),
            RawEvent::new("good", date(2025, 3, 5), date(2025, 3, 5)),
        ];
        let (intervals, diagnostics) = clip_events(&events, &week_window());

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].id, "good");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::InvalidInterval);
        assert_eq!(diagnostics[0].event_id, "bad");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let events = vec![
            RawEvent::new("late", date(2025, 3, 8), date(2025, 3, 9)),
            RawEvent::new("early", date(2025, 3, 3), date(2025, 3, 4)),
        ];
        let (intervals, _) = clip_events(&events, &week_window());

        let ids: Vec<&str> = intervals.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early"]);
    }

    #[test]
    fn test_single_day_event_at_window_edge() {
        let events = vec![RawEvent::new("E1", date(2025, 3, 9), date(2025, 3, 9))];
        let (intervals, _) = clip_events(&events, &week_window());

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start_index, 6);
        assert_eq!(intervals[0].end_index, 6);
    }
}
