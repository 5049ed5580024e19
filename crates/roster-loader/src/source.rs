//! Roster sources: where the dashboard gets its employees from.
//!
//! The dashboard only knows about the [`RosterSource`] trait. A fetch is a
//! one-shot async operation that either yields the full roster or fails;
//! callers decide how to present the failure.

use crate::error::RosterLoadError;
use crate::parser;
use crate::types::Employee;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supplies the full employee roster.
///
/// ## Design Note
/// - `Send + Sync` so a source can be shared with spawned tasks
/// - No parameters: pagination and filtering are never pushed to the source
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Returns the name of this source (for logging)
    fn name(&self) -> &str;

    /// Fetch the full roster.
    async fn fetch_roster(&self) -> Result<Vec<Employee>>;
}

// =============================================================================
// JSON file source
// =============================================================================

/// Reads the roster from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RosterSource for JsonFileSource {
    fn name(&self) -> &str {
        "JsonFileSource"
    }

    async fn fetch_roster(&self) -> Result<Vec<Employee>> {
        let file = self.path.display().to_string();
        debug!("Reading roster from {}", file);

        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(RosterLoadError::FileNotFound { path: file }.into());
            }
            Err(err) => return Err(RosterLoadError::IoError(err).into()),
        };

        let roster = parser::parse_roster(&content, &file)?;
        info!("Loaded {} employees from {}", roster.len(), file);
        Ok(roster)
    }
}

// =============================================================================
// In-memory source
// =============================================================================

/// Serves a fixed roster from memory, or a fixed failure.
///
/// Handy for tests and demos where no file or service is available.
#[derive(Debug, Clone)]
pub struct StaticSource {
    outcome: std::result::Result<Vec<Employee>, String>,
}

impl StaticSource {
    /// A source that always returns `roster`.
    pub fn new(roster: Vec<Employee>) -> Self {
        Self { outcome: Ok(roster) }
    }

    /// A source whose every fetch fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
        }
    }
}

#[async_trait]
impl RosterSource for StaticSource {
    fn name(&self) -> &str {
        "StaticSource"
    }

    async fn fetch_roster(&self) -> Result<Vec<Employee>> {
        match &self.outcome {
            Ok(roster) => {
                parser::validate(roster)?;
                Ok(roster.clone())
            }
            Err(reason) => Err(anyhow!("{}", reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("roster-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let path = temp_path("roster.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "firstName": "Ann", "department": "Sales", "performanceRating": 3}]"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        assert_eq!(source.path(), path.as_path());
        let roster = source.fetch_roster().await.unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].first_name.as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new(temp_path("does-not-exist.json"));
        let err = source.fetch_roster().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RosterLoadError>(),
            Some(RosterLoadError::FileNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::new(vec![Employee::new(1, "Ann", "Lee", "", "Sales", 3)]);
        assert_eq!(source.fetch_roster().await.unwrap().len(), 1);

        let failing = StaticSource::failing("network down");
        let err = failing.fetch_roster().await.unwrap_err();
        assert_eq!(err.to_string(), "network down");
    }
}
