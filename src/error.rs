//! Error and diagnostic types for the layout pipeline.
//!
//! Two severities exist. `LayoutError` aborts a whole layout pass and
//! is only produced for malformed window input. `Diagnostic` is
//! non-fatal: the offending event is dropped, the rest of the pass
//! continues, and the diagnostics are surfaced to the caller on the
//! `Layout` result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal layout errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The window has no day columns to place events into.
    #[error("window length must be at least 1 day column (got {length})")]
    InvalidWindow {
        /// The rejected length.
        length: usize,
    },
}

/// Categories of non-fatal per-event diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The event's end date precedes its start date.
    InvalidInterval,
}

/// A non-fatal diagnostic for a dropped event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic category.
    pub kind: DiagnosticKind,
    /// Identifier of the offending event.
    pub event_id: String,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates an invalid-interval diagnostic.
    pub fn invalid_interval(event_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::InvalidInterval,
            event_id: event_id.into(),
            message: message.into(),
        }
    }
}
