//! # Bookmarks Crate
//!
//! Session-scoped store of bookmarked employees.
//!
//! ## Components
//!
//! ### BookmarkStore
//! A set of employees keyed by id with add/remove/contains/list and a
//! toggle used by the dashboard. The store is created explicitly at session
//! start and handed to the dashboard, never reached through a global.
//!
//! ### BookmarkSnapshot
//! Optional persistence: a JSON copy of the store that can be saved at the
//! end of a session and restored at the start of the next one.
//!
//! ## Example Usage
//!
//! ```ignore
//! use bookmarks::{BookmarkSnapshot, BookmarkStore};
//!
//! let snapshot = BookmarkSnapshot::load(Path::new("data/bookmarks.json"))?;
//! let mut store = BookmarkStore::from_snapshot(snapshot);
//!
//! store.toggle(&employee);
//! store.snapshot().save(Path::new("data/bookmarks.json"))?;
//! ```

// Public modules
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use snapshot::{BookmarkSnapshot, SnapshotError};
pub use store::BookmarkStore;
