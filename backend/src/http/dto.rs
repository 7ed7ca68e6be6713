//! Data Transfer Objects for the HTTP API.
//!
//! Chart payloads are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    Activity, ChartPanel, DashboardData, GraphNodeDetail, LoadStatus, ScatterDetail,
};
pub use crate::routes::stats::StatsResponse;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Where activities are read from
    pub source: String,
    /// Source reachability ("connected", "disconnected" or "error: ...")
    pub source_status: String,
    /// Outcome of the snapshot load
    pub load: LoadStatus,
}

/// Raw activity snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<Activity>,
    pub total: usize,
}
