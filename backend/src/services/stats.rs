use crate::api::{Activity, DurationStats, SummaryTile};
use crate::routes::dashboard::{DISTRIBUTION_ANCHOR, GRAPH_ANCHOR, SCATTER_ANCHOR, TIMELINE_ANCHOR};

/// Upper bound (inclusive) of the "shorter than a day" bucket, in days.
pub const DAY_THRESHOLD: f64 = 1.0;
/// Lower bound (inclusive) of the "longer than a month" bucket, in days.
pub const MONTH_THRESHOLD: f64 = 30.0;

/// Duration bucket of a single activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationBucket {
    ShorterThanDay,
    ShorterThanMonth,
    LongerThanMonth,
}

impl DurationBucket {
    /// Classify a duration in days. Every value lands in exactly one bucket.
    pub fn of(duration: f64) -> Self {
        if duration <= DAY_THRESHOLD {
            Self::ShorterThanDay
        } else if duration < MONTH_THRESHOLD {
            Self::ShorterThanMonth
        } else {
            Self::LongerThanMonth
        }
    }
}

/// Count activities per duration bucket.
pub fn summarize_durations(activities: &[Activity]) -> DurationStats {
    let mut stats = DurationStats {
        total_activities: activities.len(),
        ..DurationStats::default()
    };

    for activity in activities {
        match DurationBucket::of(activity.duration) {
            DurationBucket::ShorterThanDay => stats.shorter_than_day += 1,
            DurationBucket::ShorterThanMonth => stats.shorter_than_month += 1,
            DurationBucket::LongerThanMonth => stats.longer_than_month += 1,
        }
    }

    stats
}

/// Overview tiles shown above the charts.
pub fn build_summary_tiles(stats: &DurationStats) -> Vec<SummaryTile> {
    vec![
        SummaryTile {
            value: stats.total_activities,
            description: "Activities".to_string(),
            tooltip: "Total number of activities in the project".to_string(),
            target: GRAPH_ANCHOR.to_string(),
        },
        SummaryTile {
            value: stats.shorter_than_day,
            description: "Shorter than a Day".to_string(),
            tooltip: "Activities lasting one day or less".to_string(),
            target: DISTRIBUTION_ANCHOR.to_string(),
        },
        SummaryTile {
            value: stats.shorter_than_month,
            description: "Shorter than a Month".to_string(),
            tooltip: "Activities lasting more than one day and less than 30 days".to_string(),
            target: SCATTER_ANCHOR.to_string(),
        },
        SummaryTile {
            value: stats.longer_than_month,
            description: "Longer than a Month".to_string(),
            tooltip: "Activities lasting 30 days or more".to_string(),
            target: TIMELINE_ANCHOR.to_string(),
        },
    ]
}
