//! # Dashboard Controller
//!
//! This module coordinates the dashboard:
//! 1. Fetch the roster once from a `RosterSource`
//! 2. Recompute the filtered result whenever the criteria change
//! 3. Route bookmark toggles to the injected `BookmarkStore`
//!
//! Every mutation takes `&mut self`, so events are handled one at a time and
//! a recomputation always sees the latest committed roster and criteria.

use std::collections::BTreeSet;
use std::time::Instant;

use tracing::{error, info, warn};

use bookmarks::BookmarkStore;
use pipeline::{FilterCriteria, FilterPipeline};
use roster_loader::{Employee, EmployeeId, Rating, RosterSource};

use crate::state::{DashboardError, DashboardState};
use crate::view::{summarize_departments, DashboardView, DepartmentSummary, RosterStats};

/// Owns the roster, the active criteria and the derived filtered result.
pub struct DashboardController {
    state: DashboardState,
    roster: Vec<Employee>,
    criteria: FilterCriteria,
    filtered: Vec<Employee>,
    bookmarks: BookmarkStore,
    filter_pipeline: FilterPipeline,
}

impl DashboardController {
    /// Create a controller in the `Loading` state around an existing store.
    pub fn new(bookmarks: BookmarkStore) -> Self {
        Self {
            state: DashboardState::Loading,
            roster: Vec::new(),
            criteria: FilterCriteria::new(),
            filtered: Vec::new(),
            bookmarks,
            filter_pipeline: FilterPipeline::standard(),
        }
    }

    /// Fetch the roster from `source` and install it.
    ///
    /// On success the filtered result is recomputed against the current
    /// criteria and the state becomes `Ready`. Any failure moves the
    /// dashboard into the terminal `Error` state with an empty roster.
    /// Calling this again from `Ready` replaces the roster; calling it from
    /// `Error` does nothing.
    ///
    /// # Returns
    /// The number of employees installed.
    pub async fn load<S>(&mut self, source: &S) -> Result<usize, DashboardError>
    where
        S: RosterSource + ?Sized,
    {
        if self.state.is_terminal() {
            warn!("Ignoring roster load from {}: dashboard is in a terminal error state", source.name());
            return Err(DashboardError::DataUnavailable);
        }

        let start_time = Instant::now();
        self.state = DashboardState::Loading;
        info!("Loading roster from {}", source.name());

        match source.fetch_roster().await {
            Ok(roster) => {
                let count = roster.len();
                self.install_roster(roster);
                self.state = DashboardState::Ready;
                info!(
                    "Roster ready: {} employees ({} matching) in {:.2?}",
                    count,
                    self.filtered.len(),
                    start_time.elapsed()
                );
                Ok(count)
            }
            Err(err) => {
                error!("Failed to fetch roster from {}: {:#}", source.name(), err);
                self.roster.clear();
                self.filtered.clear();
                self.state = DashboardState::from_error(DashboardError::DataUnavailable);
                Err(DashboardError::DataUnavailable)
            }
        }
    }

    /// Commit a new roster, then recompute from it.
    fn install_roster(&mut self, roster: Vec<Employee>) {
        self.roster = roster;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = self.filter_pipeline.apply(&self.roster, &self.criteria);
    }

    /// Replace the active criteria and recompute the filtered result.
    ///
    /// Recomputes even when `criteria` equals the current criteria.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> &[Employee] {
        self.criteria = criteria;
        self.recompute();
        &self.filtered
    }

    // Render-layer callbacks

    pub fn on_search(&mut self, term: impl Into<String>) -> &[Employee] {
        let criteria = FilterCriteria {
            search_term: term.into(),
            ..self.criteria.clone()
        };
        self.set_criteria(criteria)
    }

    pub fn on_department_filter(&mut self, departments: BTreeSet<String>) -> &[Employee] {
        let criteria = FilterCriteria {
            department_filter: departments,
            ..self.criteria.clone()
        };
        self.set_criteria(criteria)
    }

    pub fn on_rating_filter(&mut self, ratings: BTreeSet<Rating>) -> &[Employee] {
        let criteria = FilterCriteria {
            rating_filter: ratings,
            ..self.criteria.clone()
        };
        self.set_criteria(criteria)
    }

    /// Toggle the bookmark for `employee`.
    ///
    /// Leaves the roster and the filtered result alone. Returns whether the
    /// employee is bookmarked afterwards.
    pub fn on_bookmark_toggle(&mut self, employee: &Employee) -> bool {
        self.bookmarks.toggle(employee)
    }

    // Read side

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    pub fn filtered(&self) -> &[Employee] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Look up a roster employee by id.
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.roster.iter().find(|employee| employee.id == id)
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    pub fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_bookmarked(&self, id: EmployeeId) -> bool {
        self.bookmarks.contains(id)
    }

    pub fn stats(&self) -> RosterStats {
        RosterStats {
            total: self.roster.len(),
            filtered: self.filtered.len(),
            bookmarked: self.bookmarks.len(),
        }
    }

    /// Department options for the filter control.
    pub fn departments(&self) -> Vec<DepartmentSummary> {
        summarize_departments(&self.roster)
    }

    /// Snapshot of the derived state for a renderer.
    pub fn view(&self) -> DashboardView<'_> {
        DashboardView {
            state: &self.state,
            roster: &self.roster,
            filtered: &self.filtered,
            stats: self.stats(),
            bookmarks: &self.bookmarks,
        }
    }

    /// End the session and hand the bookmark store back to the caller.
    pub fn into_bookmarks(self) -> BookmarkStore {
        self.bookmarks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_roster() -> Vec<Employee> {
        vec![
            Employee::new(1, "Ann", "Lee", "ann@example.com", "Sales", 3),
            Employee::new(2, "Bob", "Ray", "bob@example.com", "Engineering", 5),
        ]
    }

    #[test]
    fn test_new_controller_is_loading() {
        let controller = DashboardController::new(BookmarkStore::new());

        assert_eq!(controller.state(), &DashboardState::Loading);
        assert!(controller.roster().is_empty());
        assert!(controller.filtered().is_empty());
        assert!(controller.criteria().is_unrestricted());
    }

    #[test]
    fn test_install_roster_recomputes_with_current_criteria() {
        let mut controller = DashboardController::new(BookmarkStore::new());
        controller.on_search("bob");

        controller.install_roster(create_test_roster());
        assert_eq!(controller.filtered().len(), 1);
        assert_eq!(controller.filtered()[0].id, 2);
    }

    #[test]
    fn test_callbacks_keep_other_fields() {
        let mut controller = DashboardController::new(BookmarkStore::new());
        controller.install_roster(create_test_roster());

        controller.on_search("e");
        controller.on_rating_filter(BTreeSet::from([3]));

        let criteria = controller.criteria();
        assert_eq!(criteria.search_term, "e");
        assert!(criteria.rating_filter.contains(&3));
        assert_eq!(controller.filtered().len(), 1);
        assert_eq!(controller.filtered()[0].id, 1);
    }

    #[test]
    fn test_employee_lookup() {
        let mut controller = DashboardController::new(BookmarkStore::new());
        controller.install_roster(create_test_roster());

        assert_eq!(controller.employee(2).and_then(|e| e.first_name.as_deref()), Some("Bob"));
        assert!(controller.employee(9).is_none());
    }
}
