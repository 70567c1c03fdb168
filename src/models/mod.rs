//! Layout domain models.
//!
//! Core data types flowing through the layout pipeline, from raw input
//! to grid output:
//!
//! | Type | Role |
//! |------|------|
//! | `RawEvent` | Input: date-ranged event with opaque payload |
//! | `Window` | Visible day range and its length |
//! | `Interval` | Event clipped to day-index bounds |
//! | `LayoutRecord` | Output: grid coordinates and density |
//!
//! All of these are pure derived values; nothing here is retained
//! across recomputations.

mod event;
mod interval;
mod record;
mod window;

pub use event::RawEvent;
pub use interval::Interval;
pub use record::{Density, DensityPolicy, LayoutRecord};
pub use window::Window;
