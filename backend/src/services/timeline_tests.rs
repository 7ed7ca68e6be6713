use chrono::{Datelike, NaiveDate, Weekday};

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn activity(node_id: i64, start: &str, end: &str) -> Activity {
    Activity::new(node_id, 1.0, start, end)
}

#[test]
fn test_single_day_activity_yields_one_bin() {
    // Wednesday
    let timeline = build_timeline(&[activity(1, "2024-01-03", "2024-01-03")]);

    assert_eq!(
        timeline.bins,
        vec![WeeklyBin {
            week_start: date(2024, 1, 1),
            active_count: 1,
        }]
    );
    assert!(timeline.skipped.is_empty());
}

#[test]
fn test_empty_input_has_no_bins() {
    let timeline = build_timeline(&[]);
    assert!(timeline.bins.is_empty());
    assert!(timeline.skipped.is_empty());
}

#[test]
fn test_boundary_spanning_activity_counts_in_both_weeks() {
    // Sunday to Monday
    let timeline = build_timeline(&[activity(1, "2024-01-07", "2024-01-08")]);

    assert_eq!(timeline.counts(), vec![1, 1]);
    assert_eq!(timeline.bins[0].week_start, date(2024, 1, 1));
    assert_eq!(timeline.bins[1].week_start, date(2024, 1, 8));
}

#[test]
fn test_overlap_counts_per_week() {
    let activities = vec![
        activity(1, "2024-01-01", "2024-01-20"),
        activity(2, "2024-01-09", "2024-01-10"),
        activity(3, "2024-01-22", "2024-01-22"),
    ];
    let timeline = build_timeline(&activities);

    assert_eq!(
        timeline.week_labels(),
        vec!["2024-01-01", "2024-01-08", "2024-01-15", "2024-01-22"]
    );
    assert_eq!(timeline.counts(), vec![1, 2, 1, 1]);
}

#[test]
fn test_gap_weeks_are_emitted_with_zero() {
    let activities = vec![
        activity(1, "2024-01-02", "2024-01-02"),
        activity(2, "2024-01-24", "2024-01-24"),
    ];
    let timeline = build_timeline(&activities);

    assert_eq!(timeline.counts(), vec![1, 0, 0, 1]);
}

#[test]
fn test_bins_are_monday_aligned_and_weekly() {
    let activities = vec![
        activity(1, "2023-12-29", "2024-01-05"),
        activity(2, "2024-02-14", "2024-03-02"),
    ];
    let timeline = build_timeline(&activities);

    assert_eq!(timeline.bins[0].week_start.weekday(), Weekday::Mon);
    for pair in timeline.bins.windows(2) {
        assert_eq!((pair[1].week_start - pair[0].week_start).num_days(), 7);
    }
    let last = timeline.bins.last().unwrap().week_start;
    assert!(last <= date(2024, 3, 2));
    assert!(week_end(last) >= date(2024, 3, 2));
}

#[test]
fn test_malformed_dates_are_isolated() {
    let activities = vec![
        activity(1, "2024-01-03", "2024-01-03"),
        activity(2, "garbage", "2024-06-01"),
        activity(3, "2024-05-01", "2024-04-01"),
    ];
    let timeline = build_timeline(&activities);

    assert_eq!(timeline.bins.len(), 1);
    assert_eq!(timeline.bins[0].active_count, 1);
    assert_eq!(
        skipped_node_ids(&timeline),
        vec![NodeId::new(2), NodeId::new(3)]
    );
    assert!(timeline.skipped[0].reason.contains("startDate"));
}

#[test]
fn test_all_malformed_is_empty_timeline() {
    let timeline = build_timeline(&[activity(1, "", "")]);
    assert!(timeline.bins.is_empty());
    assert_eq!(timeline.skipped.len(), 1);
}

#[test]
fn test_null_and_missing_dates_are_skipped() {
    let json = r#"[
        {"nodeId": 1, "duration": 1, "startDate": "2024-01-03", "endDate": "2024-01-04"},
        {"nodeId": 2, "duration": 1, "startDate": "2024-01-03", "endDate": null},
        {"nodeId": 3, "duration": 1, "endDate": "2024-01-10"}
    ]"#;
    let activities: Vec<Activity> = serde_json::from_str(json).unwrap();
    let timeline = build_timeline(&activities);

    assert_eq!(timeline.counts(), vec![1]);
    assert_eq!(
        skipped_node_ids(&timeline),
        vec![NodeId::new(2), NodeId::new(3)]
    );
    assert!(timeline.skipped[0].reason.contains("endDate"));
    assert!(timeline.skipped[1].reason.contains("startDate"));
}
