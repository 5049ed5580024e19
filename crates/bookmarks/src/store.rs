//! The bookmark store: employees the user has marked for later reference.
//!
//! The store is independent of the roster. An employee stays bookmarked
//! even after a reload drops them from the roster, which is why the store
//! keeps a full copy of each record rather than just the id.

use crate::snapshot::BookmarkSnapshot;
use roster_loader::{Employee, EmployeeId};
use std::collections::BTreeMap;
use tracing::debug;

/// A set of bookmarked employees keyed by id.
///
/// Every operation is total: removing an unknown id or re-adding an existing
/// one is a no-op rather than an error.
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    bookmarks: BTreeMap<EmployeeId, Employee>,
}

impl BookmarkStore {
    /// An empty store, as at the start of a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store restored from a previously saved snapshot.
    ///
    /// Later entries win when the snapshot repeats an id.
    pub fn from_snapshot(snapshot: BookmarkSnapshot) -> Self {
        let mut store = Self::new();
        for employee in snapshot.employees {
            store.add(employee);
        }
        store
    }

    /// Export the current members for a persistence collaborator.
    pub fn snapshot(&self) -> BookmarkSnapshot {
        BookmarkSnapshot {
            employees: self.list(),
        }
    }

    /// Insert `employee`, replacing any bookmark with the same id.
    pub fn add(&mut self, employee: Employee) {
        debug!("Bookmarking employee {}", employee.id);
        self.bookmarks.insert(employee.id, employee);
    }

    /// Remove the bookmark for `id`, if there is one.
    pub fn remove(&mut self, id: EmployeeId) {
        if self.bookmarks.remove(&id).is_some() {
            debug!("Removed bookmark for employee {}", id);
        }
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.bookmarks.contains_key(&id)
    }

    /// Current members, ordered by id.
    pub fn list(&self) -> Vec<Employee> {
        self.bookmarks.values().cloned().collect()
    }

    /// Remove `employee` if bookmarked, otherwise add it.
    ///
    /// Returns whether the employee is bookmarked afterwards.
    pub fn toggle(&mut self, employee: &Employee) -> bool {
        if self.contains(employee.id) {
            self.remove(employee.id);
            false
        } else {
            self.add(employee.clone());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Employee {
        Employee::new(1, "Ann", "Lee", "ann@example.com", "Sales", 3)
    }

    fn bob() -> Employee {
        Employee::new(2, "Bob", "Ray", "bob@example.com", "Engineering", 5)
    }

    #[test]
    fn test_add_then_remove() {
        let mut store = BookmarkStore::new();

        store.add(ann());
        assert!(store.contains(1));

        store.remove(1);
        assert!(!store.contains(1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = BookmarkStore::new();
        store.add(ann());

        let mut renamed = ann();
        renamed.last_name = Some("Park".to_string());
        store.add(renamed);

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].last_name.as_deref(), Some("Park"));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = BookmarkStore::new();
        store.add(ann());

        store.remove(99);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut store = BookmarkStore::new();

        assert!(store.toggle(&bob()));
        assert!(store.contains(2));

        assert!(!store.toggle(&bob()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let mut store = BookmarkStore::new();
        store.add(bob());
        store.add(ann());

        let ids: Vec<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_snapshot_restores_store() {
        let mut store = BookmarkStore::new();
        store.add(ann());
        store.add(bob());

        let restored = BookmarkStore::from_snapshot(store.snapshot());
        assert_eq!(restored.list(), store.list());
    }

    #[test]
    fn test_snapshot_with_repeated_id() {
        let mut updated = ann();
        updated.performance_rating = Some(4);

        let snapshot = BookmarkSnapshot {
            employees: vec![ann(), updated],
        };
        let store = BookmarkStore::from_snapshot(snapshot);

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].performance_rating, Some(4));
    }
}
