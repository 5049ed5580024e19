//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, plus the
//! [`apply`] entry point the dashboard uses.

use crate::criteria::FilterCriteria;
use crate::filters::{DepartmentFilter, RatingFilter, SearchTermFilter};
use crate::traits::Filter;
use roster_loader::Employee;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// Filters run in insertion order and each one narrows the output of the
/// previous one, so the pipeline as a whole is the logical AND of its filters.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchTermFilter)
///     .add_filter(DepartmentFilter)
///     .add_filter(RatingFilter);
///
/// let filtered = pipeline.apply(&roster, &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The dashboard's pipeline: search term, then department, then rating.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SearchTermFilter)
            .add_filter(DepartmentFilter)
            .add_filter(RatingFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in the order they run.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to a copy of the roster.
    ///
    /// ## Algorithm
    /// 1. Clone the roster (the caller's slice is never touched)
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the survivors in their original relative order
    pub fn apply(&self, roster: &[Employee], criteria: &FilterCriteria) -> Vec<Employee> {
        let mut current = roster.to_vec();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Narrow `roster` to the employees matching `criteria`.
///
/// Pure and deterministic: the same roster and criteria always give the
/// same result, and the result is an order-preserving subsequence of the
/// roster.
pub fn apply(roster: &[Employee], criteria: &FilterCriteria) -> Vec<Employee> {
    FilterPipeline::standard().apply(roster, criteria)
}
