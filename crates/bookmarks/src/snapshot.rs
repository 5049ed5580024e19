//! Saving and restoring bookmarks between sessions.
//!
//! The store itself is session scoped. A caller that wants bookmarks to
//! survive a restart saves a [`BookmarkSnapshot`] on the way out and restores
//! it with `BookmarkStore::from_snapshot` on the way in.

use roster_loader::Employee;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from reading or writing a snapshot file.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed bookmark snapshot in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Serializable copy of the bookmarked employees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkSnapshot {
    pub employees: Vec<Employee>,
}

impl BookmarkSnapshot {
    /// Read a snapshot file. A missing file is an empty snapshot.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let label = path.display().to_string();

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No bookmark snapshot at {}, starting empty", label);
                return Ok(Self::default());
            }
            Err(source) => return Err(SnapshotError::Io { path: label, source }),
        };

        let snapshot: Self = serde_json::from_str(&content)
            .map_err(|source| SnapshotError::Json { path: label.clone(), source })?;
        info!("Restored {} bookmarks from {}", snapshot.employees.len(), label);
        Ok(snapshot)
    }

    /// Write the snapshot as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let label = path.display().to_string();
        let io_err = |source: std::io::Error| SnapshotError::Io { path: label.clone(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|source| SnapshotError::Json { path: label.clone(), source })?;
        std::fs::write(path, content).map_err(io_err)?;

        debug!("Saved {} bookmarks to {}", self.employees.len(), label);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bookmarks-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let path = temp_dir("missing").join("bookmarks.json");
        let snapshot = BookmarkSnapshot::load(&path).unwrap();

        assert!(snapshot.employees.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_dir("roundtrip").join("nested").join("bookmarks.json");
        let snapshot = BookmarkSnapshot {
            employees: vec![Employee::new(1, "Ann", "Lee", "ann@example.com", "Sales", 3)],
        };

        snapshot.save(&path).unwrap();
        assert_eq!(BookmarkSnapshot::load(&path).unwrap(), snapshot);
    }

    #[test]
    fn test_malformed_file() {
        let dir = temp_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bookmarks.json");
        std::fs::write(&path, "not json").unwrap();

        let err = BookmarkSnapshot::load(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Json { .. }));
    }
}
