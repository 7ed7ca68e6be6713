use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{DurationStats, ScatterMode, SkippedActivity, SummaryTile};

// =========================================================
// Dashboard types
// =========================================================

/// Anchor of the duration distribution panel.
pub const DISTRIBUTION_ANCHOR: &str = "duration-distribution-chart";
/// Anchor of the relationship scatter panel.
pub const SCATTER_ANCHOR: &str = "scatter-chart";
/// Anchor of the timeline panel.
pub const TIMELINE_ANCHOR: &str = "timeline-chart";
/// Anchor of the dependency graph panel.
pub const GRAPH_ANCHOR: &str = "path-finder-chart";

/// Primitive chart kind understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Scatter,
    Line,
    Graph,
}

/// A titled chart container with its declarative chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    /// Page element id, target of "scroll to chart".
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub description: String,
    pub options: serde_json::Value,
}

/// Outcome of the one-shot snapshot load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadStatus {
    /// No load has completed yet.
    Pending,
    Loaded {
        activity_count: usize,
        checksum: String,
        loaded_at: DateTime<Utc>,
    },
    Failed {
        reason: String,
        /// A later reload could succeed (unreachable source, 5xx).
        retryable: bool,
    },
}

impl LoadStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Everything the page needs in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub status: LoadStatus,
    pub scatter_mode: ScatterMode,
    pub stats: DurationStats,
    pub tiles: Vec<SummaryTile>,
    pub charts: Vec<ChartPanel>,
    /// Activities left out of the timeline panel.
    #[serde(default)]
    pub timeline_skipped: Vec<SkippedActivity>,
}

impl DashboardData {
    /// Look up a panel by its anchor.
    pub fn chart(&self, id: &str) -> Option<&ChartPanel> {
        self.charts.iter().find(|panel| panel.id == id)
    }
}

/// Route path for the full dashboard payload
pub const GET_DASHBOARD: &str = "/dashboard";
/// Route path for the raw activity snapshot
pub const GET_ACTIVITIES: &str = "/activities";
