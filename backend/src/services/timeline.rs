use log::warn;

use crate::api::{Activity, DateSpan, NodeId, SkippedActivity, TimelineData, WeeklyBin};
use crate::models::{week_end, week_starts};

/// Split activities into usable date spans and the ones that failed to parse.
fn collect_spans(activities: &[Activity]) -> (Vec<DateSpan>, Vec<SkippedActivity>) {
    let mut spans = Vec::with_capacity(activities.len());
    let mut skipped = Vec::new();

    for activity in activities {
        match activity.span() {
            Ok(span) => spans.push(span),
            Err(e) => {
                warn!("Excluding activity from timeline: {}", e);
                skipped.push(SkippedActivity {
                    node_id: e.node_id(),
                    reason: e.to_string(),
                });
            }
        }
    }

    (spans, skipped)
}

/// Count how many activities are active in each Monday-aligned week between
/// the earliest start and the latest end.
///
/// Activities with unusable dates are reported in `skipped` and do not
/// contribute to the range or the counts. Without any usable activity the
/// timeline has no bins.
pub fn build_timeline(activities: &[Activity]) -> TimelineData {
    let (spans, skipped) = collect_spans(activities);

    let range = spans
        .iter()
        .map(|s| s.start)
        .min()
        .zip(spans.iter().map(|s| s.end).max());

    let Some((min_date, max_date)) = range else {
        return TimelineData {
            bins: Vec::new(),
            skipped,
        };
    };

    let bins = week_starts(min_date, max_date)
        .map(|week_start| {
            let last_day = week_end(week_start);
            let active_count = spans
                .iter()
                .filter(|span| span.overlaps(week_start, last_day))
                .count();
            WeeklyBin {
                week_start,
                active_count,
            }
        })
        .collect();

    TimelineData { bins, skipped }
}

/// Node ids excluded from a timeline, in input order.
pub fn skipped_node_ids(timeline: &TimelineData) -> Vec<NodeId> {
    timeline.skipped.iter().map(|s| s.node_id).collect()
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod timeline_tests;
