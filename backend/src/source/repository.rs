//! Activity repository trait.

use async_trait::async_trait;

pub use super::error::{ErrorContext, SourceError, SourceResult};
use crate::api::Activity;

/// Read-only access to the activity feed.
///
/// The dashboard calls [`fetch_activities`](Self::fetch_activities) once per
/// load; implementations must not retry on their own.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Fetch the full activity list in feed order.
    ///
    /// # Returns
    /// * `Ok(Vec<Activity>)` - Every activity the source currently holds
    /// * `Err(SourceError)` - If the source is unreachable or the payload is malformed
    async fn fetch_activities(&self) -> SourceResult<Vec<Activity>>;

    /// Check whether the source can currently be reached.
    async fn health_check(&self) -> SourceResult<bool>;

    /// Human-readable location of the source, used in logs and `/health`.
    fn describe(&self) -> String;
}
