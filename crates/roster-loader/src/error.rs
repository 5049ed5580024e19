//! Error types for the roster-loader crate.

use thiserror::Error;

use crate::types::EmployeeId;

/// Errors that can occur while loading and validating a roster.
#[derive(Error, Debug)]
pub enum RosterLoadError {
    /// Roster file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the roster
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Roster document is not a JSON array of employees
    #[error("Malformed roster in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share the same identity
    #[error("Duplicate employee id {id} in roster")]
    DuplicateId { id: EmployeeId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RosterLoadError>;
