//! Core domain types for the employee roster.
//!
//! Records arrive from an external data source as JSON with camelCase keys.
//! Every field except `id` is optional: a field that is missing, `null`, or
//! of the wrong JSON type loads as `None`, so a partially filled record still
//! loads and simply fails to match the filters that look at the absent field.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique, stable identifier for an employee
pub type EmployeeId = u32;

/// Performance rating. Usually 1-5, but no fixed range is assumed.
pub type Rating = i32;

// =============================================================================
// Employee
// =============================================================================

/// A single employee record as supplied by the roster source.
///
/// Immutable once fetched; the dashboard only ever clones it into derived
/// views or the bookmark store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    /// Department name, an open set of values (e.g. "Engineering")
    #[serde(default, deserialize_with = "lenient_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub performance_rating: Option<Rating>,
}

/// Keep JSON strings; anything else (null, numbers, objects) is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Ok(Some(text)),
        _ => Ok(None),
    }
}

/// Keep integers that fit a `Rating`; anything else is absent.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<Rating>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => Ok(number
            .as_i64()
            .and_then(|rating| Rating::try_from(rating).ok())),
        _ => Ok(None),
    }
}

impl Employee {
    /// Build a fully populated employee.
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        performance_rating: Rating,
    ) -> Self {
        Self {
            id,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            department: Some(department.into()),
            performance_rating: Some(performance_rating),
        }
    }

    /// "First Last", skipping whichever part is absent or empty.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 7,
            "firstName": "Ann",
            "lastName": "Lee",
            "email": "ann.lee@example.com",
            "department": "Sales",
            "performanceRating": 3
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee, Employee::new(7, "Ann", "Lee", "ann.lee@example.com", "Sales", 3));
    }

    #[test]
    fn test_missing_fields_default() {
        let employee: Employee = serde_json::from_str(r#"{"id": 9, "firstName": "Bob"}"#).unwrap();

        assert_eq!(employee.first_name.as_deref(), Some("Bob"));
        assert_eq!(employee.email, None);
        assert_eq!(employee.department, None);
        assert_eq!(employee.performance_rating, None);
    }

    #[test]
    fn test_null_fields_are_absent() {
        let json = r#"{"id": 3, "firstName": "Ann", "email": null, "department": null, "performanceRating": null}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();

        assert_eq!(employee.first_name.as_deref(), Some("Ann"));
        assert_eq!(employee.email, None);
        assert_eq!(employee.department, None);
        assert_eq!(employee.performance_rating, None);
    }

    #[test]
    fn test_wrong_typed_fields_are_absent() {
        let json = r#"{"id": 3, "lastName": 42, "email": ["a@b.c"], "performanceRating": "five"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();

        assert_eq!(employee.last_name, None);
        assert_eq!(employee.email, None);
        assert_eq!(employee.performance_rating, None);

        let fractional: Employee = serde_json::from_str(r#"{"id": 4, "performanceRating": 3.5}"#).unwrap();
        assert_eq!(fractional.performance_rating, None);
    }

    #[test]
    fn test_empty_department_is_not_absent() {
        let employee: Employee = serde_json::from_str(r#"{"id": 5, "department": ""}"#).unwrap();
        assert_eq!(employee.department.as_deref(), Some(""));
    }

    #[test]
    fn test_full_name() {
        let mut employee = Employee::new(1, "Ann", "Lee", "", "", 1);
        assert_eq!(employee.full_name(), "Ann Lee");

        employee.last_name = None;
        assert_eq!(employee.full_name(), "Ann");

        employee.first_name = Some(String::new());
        assert_eq!(employee.full_name(), "");
    }
}
