//! Row assignment: minimal-track interval partitioning.
//!
//! Partitions a set of intervals into the minimum number of rows such
//! that no two intervals sharing a row overlap. For interval graphs
//! the clique number equals the chromatic number, so the greedy
//! first-fit pass below is provably optimal: the number of rows used
//! equals the maximum overlap depth of the input.
//!
//! # Algorithm
//!
//! 1. Sort by `start_index` ascending; ties by span descending (longer
//!    events claim a row first, reducing fragmentation), then by `id`
//!    ascending. The key fully disambiguates, so identical input sets
//!    always produce identical assignments regardless of input order.
//! 2. Each row tracks only the `end_index` of its most recently placed
//!    interval.
//! 3. First-fit: place each interval on the first row that is free
//!    before it starts (`last_end < start_index`), else open a new row.
//!
//! # Complexity
//! `O(n log n + n*k)` where `k` is the number of rows produced.
//! `k` equals the overlap depth, which is small for realistic
//! calendars.
//!
//! # Reference
//! Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

use serde::{Deserialize, Serialize};

use crate::models::Interval;

/// A single interval-to-row assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAssignment {
    /// Identifier of the assigned interval.
    pub id: String,
    /// Assigned row, 0-indexed.
    pub row: usize,
}

/// The complete row partition for one layout pass.
///
/// Assignments are parallel to the input interval order. No state is
/// retained across passes; every recomputation starts from scratch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowPlan {
    /// One assignment per input interval, in input order.
    pub assignments: Vec<RowAssignment>,
    /// Number of distinct rows used. Equals the maximum overlap depth.
    pub row_count: usize,
}

/// Partitions intervals into the minimum number of non-overlapping rows.
pub fn assign_rows(intervals: &[Interval]) -> RowPlan {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by(|&a, &b| {
        let ia = &intervals[a];
        let ib = &intervals[b];
        ia.start_index
            .cmp(&ib.start_index)
            .then_with(|| ib.span().cmp(&ia.span()))
            .then_with(|| ia.id.cmp(&ib.id))
    });

    // Per row: end_index of the most recently placed interval.
    let mut row_ends: Vec<usize> = Vec::new();
    let mut rows = vec![0usize; intervals.len()];

    for &idx in &order {
        let interval = &intervals[idx];
        match row_ends
            .iter()
            .position(|&last_end| last_end < interval.start_index)
        {
            Some(row) => {
                row_ends[row] = interval.end_index;
                rows[idx] = row;
            }
            None => {
                rows[idx] = row_ends.len();
                row_ends.push(interval.end_index);
            }
        }
    }

    RowPlan {
        assignments: intervals
            .iter()
            .zip(&rows)
            .map(|(interval, &row)| RowAssignment {
                id: interval.id.clone(),
                row,
            })
            .collect(),
        row_count: row_ends.len(),
    }
}
