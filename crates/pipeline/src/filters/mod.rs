//! Filter implementations for the roster pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod department;
pub mod rating;
pub mod search_term;

// Re-export for convenience
pub use department::DepartmentFilter;
pub use rating::RatingFilter;
pub use search_term::SearchTermFilter;
