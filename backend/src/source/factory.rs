//! Repository factory for dependency injection.
//!
//! Builds the configured [`ActivityRepository`] behind an `Arc` so the server
//! and tests share one construction path.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
#[cfg(feature = "remote-source")]
use super::repositories::RemoteRepository;
use super::repository::{ActivityRepository, SourceError, SourceResult};
use crate::config::SourceSettings;

/// Where activities are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory or file-backed snapshot
    Local,
    /// HTTP endpoint
    Remote,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "file", "remote", "http").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "file" => Ok(Self::Local),
            "remote" | "http" => Ok(Self::Remote),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use activity_analytics::config::AppConfig;
/// use activity_analytics::source::RepositoryFactory;
///
/// let config = AppConfig::load()?;
/// let repo = RepositoryFactory::from_settings(&config.source)?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn ActivityRepository>)` - Shared repository instance
    /// * `Err(SourceError)` - If the local file cannot be read or the
    ///   remote backend is compiled out
    pub fn create(
        repo_type: RepositoryType,
        settings: &SourceSettings,
    ) -> SourceResult<Arc<dyn ActivityRepository>> {
        match repo_type {
            RepositoryType::Local => {
                let repo = match settings.file {
                    Some(ref path) => LocalRepository::from_file(path)?,
                    None => LocalRepository::new(),
                };
                Ok(Arc::new(repo))
            }
            RepositoryType::Remote => {
                #[cfg(feature = "remote-source")]
                {
                    Ok(Arc::new(RemoteRepository::new(settings.url.clone())))
                }
                #[cfg(not(feature = "remote-source"))]
                {
                    Err(SourceError::configuration(
                        "Remote repository feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create the repository described by the `[source]` settings.
    pub fn from_settings(settings: &SourceSettings) -> SourceResult<Arc<dyn ActivityRepository>> {
        let repo_type = settings
            .repository_type()
            .map_err(SourceError::configuration)?;
        Self::create(repo_type, settings)
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn ActivityRepository> {
        Arc::new(LocalRepository::new())
    }
}
