//! Parser for roster documents.
//!
//! A roster document is a JSON array of employee objects:
//! `[{"id": 1, "firstName": "Ann", ..., "performanceRating": 3}, ...]`

use crate::error::{RosterLoadError, Result};
use crate::types::*;
use std::collections::HashSet;

/// Parse a roster document and validate it.
///
/// `file` only labels errors; it does not need to be a real path.
pub fn parse_roster(content: &str, file: &str) -> Result<Vec<Employee>> {
    let employees: Vec<Employee> =
        serde_json::from_str(content).map_err(|source| RosterLoadError::JsonError {
            file: file.to_string(),
            source,
        })?;

    validate(&employees)?;
    Ok(employees)
}

/// Check that every employee id is unique.
///
/// Order is left untouched; the roster is displayed in source order.
pub fn validate(employees: &[Employee]) -> Result<()> {
    let mut seen: HashSet<EmployeeId> = HashSet::with_capacity(employees.len());
    for employee in employees {
        if !seen.insert(employee.id) {
            return Err(RosterLoadError::DuplicateId { id: employee.id });
        }
    }
    Ok(())
}
