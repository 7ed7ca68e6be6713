//! Application state for the HTTP server.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::api::ForceLayout;
use crate::services::Dashboard;
use crate::source::{load_snapshot, ActivityRepository};

/// Shared application state passed to all handlers.
///
/// The dashboard is replaced or mutated only under the write lock, so a
/// reader never observes a half-derived view.
#[derive(Clone)]
pub struct AppState {
    /// Source the snapshot was loaded from, kept for health checks
    pub repository: Arc<dyn ActivityRepository>,
    pub dashboard: Arc<RwLock<Dashboard>>,
}

impl AppState {
    /// Wrap an already derived dashboard.
    pub fn new(repository: Arc<dyn ActivityRepository>, dashboard: Dashboard) -> Self {
        Self {
            repository,
            dashboard: Arc::new(RwLock::new(dashboard)),
        }
    }

    /// Load the snapshot once and derive the dashboard from it.
    ///
    /// A failed load still yields a usable state: the dashboard shows the
    /// zero state and reports the failure in its status.
    pub async fn load(repository: Arc<dyn ActivityRepository>, layout: ForceLayout) -> Self {
        let outcome = load_snapshot(repository.as_ref()).await;
        let dashboard = Dashboard::from_outcome(outcome, layout);
        Self::new(repository, dashboard)
    }
}
