//! Filter criteria: the search term and filter sets currently active.

use roster_loader::Rating;
use std::collections::BTreeSet;

/// The combination of search term and filter sets the user has selected.
///
/// An empty term or an empty set imposes no restriction for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, email and department
    pub search_term: String,
    /// Allowed departments (exact match)
    pub department_filter: BTreeSet<String>,
    /// Allowed performance ratings
    pub rating_filter: BTreeSet<Rating>,
}

impl FilterCriteria {
    /// Criteria that match every employee.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_departments<I, S>(mut self, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.department_filter = departments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ratings(mut self, ratings: impl IntoIterator<Item = Rating>) -> Self {
        self.rating_filter = ratings.into_iter().collect();
        self
    }

    /// The search term lowercased, or `None` when it is empty.
    pub fn normalized_term(&self) -> Option<String> {
        if self.search_term.is_empty() {
            None
        } else {
            Some(self.search_term.to_lowercase())
        }
    }

    /// True when no field restricts the roster.
    pub fn is_unrestricted(&self) -> bool {
        self.search_term.is_empty()
            && self.department_filter.is_empty()
            && self.rating_filter.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unrestricted() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_unrestricted());
        assert_eq!(criteria.normalized_term(), None);
    }

    #[test]
    fn test_builder() {
        let criteria = FilterCriteria::new()
            .with_search_term("ENG")
            .with_departments(["Sales", "Engineering", "Sales"])
            .with_ratings([5, 3]);

        assert!(!criteria.is_unrestricted());
        assert_eq!(criteria.normalized_term().as_deref(), Some("eng"));
        assert_eq!(criteria.department_filter.len(), 2);
        assert!(criteria.rating_filter.contains(&3));
    }
}
