//! Free-text search across the employee's name, email and department.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use roster_loader::Employee;

/// Keeps employees whose first name, last name, email or department
/// contains the search term, ignoring case.
///
/// ## Algorithm
/// 1. Lowercase the term once
/// 2. For each employee, lowercase the four fields and test `contains`
/// 3. Keep the employee if any field matches
pub struct SearchTermFilter;

impl SearchTermFilter {
    fn matches(employee: &Employee, term: &str) -> bool {
        [
            &employee.first_name,
            &employee.last_name,
            &employee.email,
            &employee.department,
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(term))
    }
}

impl Filter for SearchTermFilter {
    fn name(&self) -> &str {
        "SearchTermFilter"
    }

    fn apply(&self, employees: Vec<Employee>, criteria: &FilterCriteria) -> Vec<Employee> {
        let Some(term) = criteria.normalized_term() else {
            return employees;
        };

        employees
            .into_iter()
            .filter(|employee| Self::matches(employee, &term))
            .collect()
    }
}
