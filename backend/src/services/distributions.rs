use crate::api::{DistributionData, DistributionSlice, DurationStats};

/// Series name of the duration pie.
pub const DISTRIBUTION_SERIES_NAME: &str = "Activity Duration";

/// Share of `value` in `total`, in percent, rounded to two decimals.
///
/// A zero total yields `0.0` rather than NaN.
pub(crate) fn percent_of(value: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = value as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}

fn slice(name: &str, value: usize, total: usize) -> DistributionSlice {
    let percent = percent_of(value, total);
    DistributionSlice {
        name: name.to_string(),
        value,
        percent,
        label: format!("{}: {}%", name, percent),
    }
}

/// Turn bucket counts into pie slices.
///
/// Slices always come in the same order: shorter than a day, shorter than a
/// month, longer than a month.
pub fn build_distribution(stats: &DurationStats) -> DistributionData {
    let total = stats.total_activities;

    DistributionData {
        series_name: DISTRIBUTION_SERIES_NAME.to_string(),
        slices: vec![
            slice("Shorter than a Day", stats.shorter_than_day, total),
            slice("Shorter than a Month", stats.shorter_than_month, total),
            slice("Longer than a Month", stats.longer_than_month, total),
        ],
        total,
    }
}
