//! In-memory local repository implementation.
//!
//! Holds a fixed activity list in memory, either handed over directly or read
//! once from a JSON file. Used for offline development and tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::Activity;
use crate::source::repository::*;

/// In-memory local repository.
///
/// # Example
/// ```
/// use activity_analytics::api::Activity;
/// use activity_analytics::source::LocalRepository;
///
/// let repo = LocalRepository::with_activities(vec![
///     Activity::new(1, 2.0, "2024-01-01", "2024-01-03"),
/// ]);
/// assert_eq!(repo.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    activities: Vec<Activity>,
    origin: Option<PathBuf>,
    unhealthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository serving `activities` in the given order.
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        let repo = Self::new();
        repo.replace_activities(activities);
        repo
    }

    /// Read a JSON array of activities from disk.
    ///
    /// # Returns
    /// * `Ok(LocalRepository)` holding the decoded activities
    /// * `Err(SourceError::NotFound)` if the file does not exist
    /// * `Err(SourceError::DecodeError)` if the content is not an activity array
    pub fn from_file<P: AsRef<Path>>(path: P) -> SourceResult<Self> {
        let path = path.as_ref();
        let context = || ErrorContext::new("load_file").with_source(path.display().to_string());

        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::not_found_with_context("Activity file does not exist", context())
            } else {
                SourceError::connection_with_context(
                    format!("Failed to read activity file: {}", e),
                    context(),
                )
            }
        })?;

        let activities: Vec<Activity> = serde_json::from_str(&content).map_err(|e| {
            SourceError::decode_with_context(
                format!("Failed to parse activity file: {}", e),
                context(),
            )
        })?;

        log::debug!(
            "Read {} activities from {}",
            activities.len(),
            path.display()
        );

        let repo = Self::with_activities(activities);
        repo.data.write().origin = Some(path.to_path_buf());
        Ok(repo)
    }

    /// Swap the served activity list.
    pub fn replace_activities(&self, activities: Vec<Activity>) {
        self.data.write().activities = activities;
    }

    /// Simulate an unreachable source: fetches fail until restored.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().unhealthy = !healthy;
    }

    pub fn len(&self) -> usize {
        self.data.read().activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ActivityRepository for LocalRepository {
    async fn fetch_activities(&self) -> SourceResult<Vec<Activity>> {
        let data = self.data.read();
        if data.unhealthy {
            let source = match data.origin {
                Some(ref path) => format!("file:{}", path.display()),
                None => "local (in-memory)".to_string(),
            };
            return Err(SourceError::connection_with_context(
                "Local repository is marked unavailable",
                ErrorContext::new("fetch_activities").with_source(source),
            ));
        }
        Ok(data.activities.clone())
    }

    async fn health_check(&self) -> SourceResult<bool> {
        Ok(!self.data.read().unhealthy)
    }

    fn describe(&self) -> String {
        match self.data.read().origin {
            Some(ref path) => format!("file:{}", path.display()),
            None => "local (in-memory)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_preserves_order() {
        let repo = LocalRepository::with_activities(vec![
            Activity::new(3, 1.0, "2024-01-01", "2024-01-02"),
            Activity::new(1, 1.0, "2024-01-01", "2024-01-02"),
        ]);

        let ids: Vec<i64> = repo
            .fetch_activities()
            .await
            .unwrap()
            .iter()
            .map(|a| a.node_id.value())
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn test_unhealthy_repository_fails_fetch() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        assert!(!repo.health_check().await.unwrap());
        let err = repo.fetch_activities().await.unwrap_err();
        assert!(matches!(err, SourceError::ConnectionError { .. }));

        repo.set_healthy(true);
        assert!(repo.fetch_activities().await.unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = LocalRepository::from_file("/nonexistent/activities.json").err().unwrap();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn test_describe_in_memory() {
        assert_eq!(LocalRepository::new().describe(), "local (in-memory)");
    }
}
