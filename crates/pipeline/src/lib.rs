//! Filter engine for the employee roster.
//!
//! This crate provides:
//! - FilterCriteria describing the active search term and filter sets
//! - Filter trait and implementations for roster filtering
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! The roster is narrowed in successive passes:
//! 1. SearchTermFilter keeps case-insensitive matches on name, email or department
//! 2. DepartmentFilter keeps members of the selected departments
//! 3. RatingFilter keeps the selected performance ratings
//!
//! An empty term or an empty set is a pass-through for its stage.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{apply, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .with_search_term("eng")
//!     .with_ratings([4, 5]);
//!
//! let filtered = apply(&roster, &criteria);
//! ```

pub mod criteria;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use criteria::FilterCriteria;
pub use traits::Filter;
pub use filter_pipeline::{apply, FilterPipeline};
