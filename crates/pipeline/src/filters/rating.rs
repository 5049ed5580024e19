//! Filter on performance rating.
//!
//! Ratings are treated as an arbitrary set of integers; there is no
//! assumption that they fall in 1-5.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use roster_loader::Employee;

/// Keeps employees whose rating is in `criteria.rating_filter`.
///
/// An employee without a rating never matches a non-empty rating filter.
pub struct RatingFilter;

impl Filter for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn apply(&self, employees: Vec<Employee>, criteria: &FilterCriteria) -> Vec<Employee> {
        if criteria.rating_filter.is_empty() {
            return employees;
        }

        employees
            .into_iter()
            .filter(|employee| {
                employee
                    .performance_rating
                    .is_some_and(|rating| criteria.rating_filter.contains(&rating))
            })
            .collect()
    }
}
