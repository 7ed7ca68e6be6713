use serde::{Deserialize, Serialize};

// =========================================================
// Duration summary types
// =========================================================

/// Activity counts per duration bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationStats {
    pub total_activities: usize,
    /// `duration <= 1`
    pub shorter_than_day: usize,
    /// `1 < duration < 30`
    pub shorter_than_month: usize,
    /// `duration >= 30`
    pub longer_than_month: usize,
}

/// One overview tile on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTile {
    pub value: usize,
    pub description: String,
    pub tooltip: String,
    /// Anchor of the chart the tile scrolls to.
    pub target: String,
}

/// Stats endpoint payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub stats: DurationStats,
    pub tiles: Vec<SummaryTile>,
}

/// Route path for the duration summary
pub const GET_STATS: &str = "/stats";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_stats_default_is_zero() {
        let stats = DurationStats::default();
        assert_eq!(stats.total_activities, 0);
        assert_eq!(stats.shorter_than_day, 0);
        assert_eq!(stats.shorter_than_month, 0);
        assert_eq!(stats.longer_than_month, 0);
    }

    #[test]
    fn test_duration_stats_wire_names() {
        let stats = DurationStats {
            total_activities: 3,
            shorter_than_day: 1,
            shorter_than_month: 1,
            longer_than_month: 1,
        };
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value["totalActivities"], 3);
        assert_eq!(value["shorterThanDay"], 1);
        assert_eq!(value["shorterThanMonth"], 1);
        assert_eq!(value["longerThanMonth"], 1);
    }
}
