//! Grid mapping: row assignments to 1-indexed grid coordinates.
//!
//! Pure, stateless translation from a placed interval to a
//! `LayoutRecord`: `col_start = start_index + 1`,
//! `col_span = end_index - start_index + 1`, plus the density
//! classification from the active policy. Coordinates are numeric so
//! the rendering adapter can apply them via inline positioning instead
//! of a closed enumeration of pre-generated class names.

use crate::models::{DensityPolicy, Interval, LayoutRecord};

/// Maps one placed interval to its grid record.
pub fn map_to_grid(interval: &Interval, row: usize, policy: &DensityPolicy) -> LayoutRecord {
    let col_span = interval.span();
    LayoutRecord {
        id: interval.id.clone(),
        row,
        col_start: interval.start_index + 1,
        col_span,
        density: policy.classify(col_span),
        extends_left: interval.extends_left,
        extends_right: interval.extends_right,
    }
}
