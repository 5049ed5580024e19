//! Read-only state handed to the presentation layer.

use crate::state::DashboardState;
use bookmarks::BookmarkStore;
use roster_loader::{Employee, EmployeeId};

/// Counters shown in the stats bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterStats {
    /// Employees in the roster
    pub total: usize,
    /// Employees matching the current criteria
    pub filtered: usize,
    /// Employees in the bookmark store
    pub bookmarked: usize,
}

/// A department option for the filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSummary {
    pub name: String,
    /// Number of roster employees in this department
    pub count: usize,
}

/// Distinct departments in first-seen roster order.
///
/// Employees with a missing or blank department are not listed as an option.
pub fn summarize_departments(roster: &[Employee]) -> Vec<DepartmentSummary> {
    let mut summaries: Vec<DepartmentSummary> = Vec::new();
    let departments = roster
        .iter()
        .filter_map(|e| e.department.as_deref())
        .filter(|d| !d.is_empty());
    for department in departments {
        match summaries.iter_mut().find(|s| s.name == department) {
            Some(summary) => summary.count += 1,
            None => summaries.push(DepartmentSummary {
                name: department.to_string(),
                count: 1,
            }),
        }
    }
    summaries
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    pub state: &'a DashboardState,
    pub roster: &'a [Employee],
    pub filtered: &'a [Employee],
    pub stats: RosterStats,
    pub(crate) bookmarks: &'a BookmarkStore,
}

impl DashboardView<'_> {
    pub fn is_bookmarked(&self, id: EmployeeId) -> bool {
        self.bookmarks.contains(id)
    }

    pub fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }

    /// True when the roster is loaded but nothing matches the criteria.
    pub fn has_no_matches(&self) -> bool {
        self.state.is_ready() && self.filtered.is_empty()
    }
}
