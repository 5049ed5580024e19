//! Filter to keep only employees in the selected departments.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use roster_loader::Employee;

/// Keeps employees whose department is in `criteria.department_filter`.
///
/// Department names are compared exactly; an empty set keeps everyone.
/// An employee without a department never matches a non-empty set.
pub struct DepartmentFilter;

impl Filter for DepartmentFilter {
    fn name(&self) -> &str {
        "DepartmentFilter"
    }

    fn apply(&self, employees: Vec<Employee>, criteria: &FilterCriteria) -> Vec<Employee> {
        if criteria.department_filter.is_empty() {
            return employees;
        }

        employees
            .into_iter()
            .filter(|employee| {
                employee
                    .department
                    .as_ref()
                    .is_some_and(|department| criteria.department_filter.contains(department))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_roster() -> Vec<Employee> {
        vec![
            Employee::new(1, "Ann", "Lee", "ann@example.com", "Sales", 3),
            Employee::new(2, "Bob", "Ray", "bob@example.com", "Engineering", 5),
            Employee::new(3, "Cara", "Kim", "cara@example.com", "Marketing", 4),
        ]
    }

    #[test]
    fn test_department_filter() {
        let criteria = FilterCriteria::new().with_departments(["Marketing", "Sales"]);
        let filtered = DepartmentFilter.apply(create_test_roster(), &criteria);

        // Source order is kept, not set order
        assert_eq!(filtered.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_department_filter_is_exact() {
        let criteria = FilterCriteria::new().with_departments(["sales"]);
        let filtered = DepartmentFilter.apply(create_test_roster(), &criteria);

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_missing_department_never_matches() {
        let mut unassigned = Employee::new(4, "Dan", "Fox", "", "", 2);
        unassigned.department = None;
        let blank = Employee::new(5, "Eve", "Ng", "", "", 2);

        let criteria = FilterCriteria::new().with_departments([""]);
        let filtered = DepartmentFilter.apply(vec![unassigned, blank], &criteria);

        assert_eq!(filtered.iter().map(|e| e.id).collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_unknown_department_excludes_all() {
        let criteria = FilterCriteria::new().with_departments(["Legal"]);
        assert!(DepartmentFilter.apply(create_test_roster(), &criteria).is_empty());
    }
}
