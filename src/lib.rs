//! Calendar timeline layout engine.
//!
//! Given a set of date-ranged events and a visible window, assigns
//! each event to one of a minimal number of display rows ("tracks")
//! so that events sharing a row never overlap in time, and computes
//! each event's horizontal placement (column start, column span)
//! inside a fixed-width day grid. Interval partitioning is the
//! chromatic number problem of the associated interval graph; for
//! interval graphs the greedy assignment used here is provably
//! optimal.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `RawEvent`, `Window`, `Interval`,
//!   `LayoutRecord`, `Density`
//! - **`layout`**: The pipeline — clipping, row assignment, grid
//!   mapping — behind the single entry point `layout`
//! - **`viewport`**: Week/month/half-year navigation state machine
//!   deriving the visible window
//! - **`debounce`**: Coalescing of rapid resize notifications
//! - **`error`**: Fatal errors and per-event diagnostics
//!
//! # Determinism
//!
//! Every stage is a pure function of its inputs with no state
//! retained across runs. Identical input — regardless of event
//! order — always yields identical row assignments, so re-rendering
//! never visibly reshuffles the grid.
//!
//! # References
//!
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs"
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//!   (interval partitioning)

pub mod debounce;
pub mod error;
pub mod layout;
pub mod models;
pub mod viewport;

pub use error::{Diagnostic, DiagnosticKind, LayoutError};
pub use layout::{layout, Layout};
pub use models::{Density, DensityPolicy, Interval, LayoutRecord, RawEvent, Window};
pub use viewport::{ViewMode, ViewportWindow};
