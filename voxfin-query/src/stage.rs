//! Tagged per-stage results.
//!
//! The orchestrator mixes best-effort stages with fail-fast ones; tagging
//! every stage's result the same way keeps the transition logic a pure
//! mapping from outcome to next state, independent of any backend.

use crate::error::QueryError;

/// The result of one pipeline stage.
#[derive(Debug)]
pub enum StageOutcome<T> {
    /// The stage completed normally.
    Ok(T),
    /// The stage produced a usable value in degraded form; the reason is
    /// recorded for observability.
    Degraded(T, String),
    /// The stage failed. Whether that ends the request is the
    /// orchestrator's call, not the stage's.
    Failed(QueryError),
}

impl<T> StageOutcome<T> {
    /// The stage's value, if it produced one.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Ok(v) | Self::Degraded(v, _) => Some(v),
            Self::Failed(_) => None,
        }
    }
}
