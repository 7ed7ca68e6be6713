//! One-shot snapshot loading.

use chrono::{DateTime, Utc};
use log::{info, warn};

use super::checksum::snapshot_checksum;
use super::repository::ActivityRepository;
use crate::api::Activity;

/// An activity list as returned by one successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub activities: Vec<Activity>,
    /// SHA-256 of the canonical JSON form of `activities`
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            checksum: snapshot_checksum(&activities),
            activities,
            loaded_at: Utc::now(),
        }
    }
}

/// Result of one load attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Snapshot),
    Failed { reason: String, retryable: bool },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

impl From<Vec<Activity>> for LoadOutcome {
    fn from(activities: Vec<Activity>) -> Self {
        LoadOutcome::Loaded(Snapshot::new(activities))
    }
}

/// Fetch the activity list once.
///
/// There is no retry: a failure is reported as [`LoadOutcome::Failed`] and
/// the caller shows the zero state.
pub async fn load_snapshot(repo: &dyn ActivityRepository) -> LoadOutcome {
    info!("Loading activities from {}", repo.describe());

    match repo.fetch_activities().await {
        Ok(activities) => LoadOutcome::from(activities),
        Err(e) => {
            warn!("Failed to load activities from {}: {}", repo.describe(), e);
            LoadOutcome::Failed {
                reason: e.to_string(),
                retryable: e.is_retryable(),
            }
        }
    }
}
