//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a roster.

use crate::criteria::FilterCriteria;
use roster_loader::Employee;

/// Core trait for narrowing a roster.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared across tasks
/// - Filters take ownership of the Vec<Employee> and return a filtered Vec
/// - Filtering never fails: a field that cannot be matched is a non-match
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of employees.
    ///
    /// Implementations must keep the relative order of the survivors and
    /// must return `employees` untouched when their criteria field is empty.
    fn apply(&self, employees: Vec<Employee>, criteria: &FilterCriteria) -> Vec<Employee>;
}
