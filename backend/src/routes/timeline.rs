use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::NodeId;

// =========================================================
// Weekly occupancy timeline types
// =========================================================

/// Number of activities active during one Monday-aligned week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBin {
    /// Monday of the week, serialized as `YYYY-MM-DD`.
    pub week_start: NaiveDate,
    pub active_count: usize,
}

/// Activity left out of the timeline because its dates could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedActivity {
    pub node_id: NodeId,
    pub reason: String,
}

/// Weekly occupancy series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    pub bins: Vec<WeeklyBin>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedActivity>,
}

impl TimelineData {
    /// Category axis labels, one per bin.
    pub fn week_labels(&self) -> Vec<String> {
        self.bins
            .iter()
            .map(|bin| bin.week_start.format("%Y-%m-%d").to_string())
            .collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.active_count).collect()
    }
}

/// Route path for the timeline chart
pub const GET_TIMELINE_CHART: &str = "/charts/timeline";
