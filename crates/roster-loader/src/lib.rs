//! # Roster Loader Crate
//!
//! This crate defines the employee roster and the sources it is fetched from.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Employee, EmployeeId, Rating)
//! - **parser**: Parse and validate JSON roster documents
//! - **source**: The `RosterSource` trait and its file/in-memory implementations
//! - **error**: Error types for roster loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use roster_loader::{JsonFileSource, RosterSource};
//!
//! let source = JsonFileSource::new("data/employees.json");
//! let roster = source.fetch_roster().await?;
//!
//! println!("Loaded {} employees", roster.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{RosterLoadError, Result};
pub use types::{Employee, EmployeeId, Rating};
pub use source::{JsonFileSource, RosterSource, StaticSource};
