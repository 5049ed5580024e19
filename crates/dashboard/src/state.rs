//! Dashboard lifecycle states and the single user-facing error kind.

use thiserror::Error;

/// The only error the dashboard surfaces.
///
/// Every roster fetch failure (missing file, malformed data, network) is
/// collapsed into this one kind; the underlying cause is logged, not shown.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Failed to load employee data")]
    DataUnavailable,
}

/// Where the dashboard is in its `Loading -> Ready | Error` lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardState {
    /// Waiting for the roster fetch to finish
    Loading,
    /// Roster installed; filter changes recompute in place
    Ready,
    /// Roster fetch failed. Terminal.
    Error(String),
}

impl DashboardState {
    pub(crate) fn from_error(err: DashboardError) -> Self {
        DashboardState::Error(err.to_string())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DashboardState::Ready)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DashboardState::Error(_))
    }

    /// The user-facing message when in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            DashboardState::Error(message) => Some(message),
            _ => None,
        }
    }
}
