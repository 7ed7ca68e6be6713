//! File-backed local repository and the load path on top of it.

mod support;

use activity_analytics::api::Activity;
use activity_analytics::config::SourceSettings;
use activity_analytics::services::Dashboard;
use activity_analytics::source::{
    load_snapshot, snapshot_checksum, ActivityRepository, LoadOutcome, LocalRepository,
    RepositoryFactory, SourceError,
};

#[tokio::test]
async fn test_from_file_decodes_wire_format() {
    let file = support::temp_file_with(support::SAMPLE_ACTIVITIES_JSON);
    let repo = LocalRepository::from_file(file.path()).unwrap();

    assert_eq!(repo.len(), 3);
    assert_eq!(
        repo.fetch_activities().await.unwrap(),
        support::sample_activities()
    );
    assert_eq!(repo.describe(), format!("file:{}", file.path().display()));
}

#[tokio::test]
async fn test_relation_lists_default_to_empty() {
    let file = support::temp_file_with(
        r#"[{"nodeId": 7, "duration": 3, "startDate": "2024-05-01", "endDate": "2024-05-04"}]"#,
    );
    let repo = LocalRepository::from_file(file.path()).unwrap();

    let activities = repo.fetch_activities().await.unwrap();
    assert_eq!(
        activities,
        vec![Activity::new(7, 3.0, "2024-05-01", "2024-05-04")]
    );
}

#[test]
fn test_non_array_payload_is_a_decode_error() {
    let file = support::temp_file_with(r#"{"activities": []}"#);
    let err = LocalRepository::from_file(file.path()).err().unwrap();

    assert!(matches!(err, SourceError::DecodeError { .. }));
    assert_eq!(err.context().operation.as_deref(), Some("load_file"));
}

#[tokio::test]
async fn test_factory_builds_file_repository() {
    let file = support::temp_file_with(support::SAMPLE_ACTIVITIES_JSON);
    let settings = SourceSettings {
        repo_type: "file".to_string(),
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let repo = RepositoryFactory::from_settings(&settings).unwrap();
    assert_eq!(repo.fetch_activities().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_checksum_is_stable_across_loads() {
    let file = support::temp_file_with(support::SAMPLE_ACTIVITIES_JSON);
    let repo = LocalRepository::from_file(file.path()).unwrap();

    let first = load_snapshot(&repo).await;
    let second = load_snapshot(&repo).await;

    match (first, second) {
        (LoadOutcome::Loaded(a), LoadOutcome::Loaded(b)) => {
            assert_eq!(a.checksum, b.checksum);
            assert_eq!(a.checksum, snapshot_checksum(&support::sample_activities()));
        }
        other => panic!("expected two successful loads, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_dates_are_isolated() {
    let mut activities = support::sample_activities();
    activities.push(Activity::new(104, 2.0, "2024-13-45", "2024-01-10"));
    activities.push(Activity::new(105, 2.0, "2024-02-10", "2024-02-01"));
    let repo = LocalRepository::with_activities(activities);

    let dashboard = Dashboard::from_outcome(load_snapshot(&repo).await, Default::default());

    // Skipped activities only drop out of the timeline.
    assert_eq!(dashboard.stats().total_activities, 5);
    assert_eq!(dashboard.scatter().len(), 5);
    assert_eq!(dashboard.graph().nodes.len(), 5);

    let skipped: Vec<i64> = dashboard
        .timeline()
        .skipped
        .iter()
        .map(|s| s.node_id.value())
        .collect();
    assert_eq!(skipped, vec![104, 105]);
    assert_eq!(
        dashboard.timeline().bins.first().map(|b| b.week_start.to_string()),
        Some("2024-01-01".to_string())
    );
}

#[tokio::test]
async fn test_null_or_missing_dates_keep_the_load() {
    let file = support::temp_file_with(
        r#"[
            {"nodeId": 1, "duration": 2, "startDate": "2024-01-03", "endDate": "2024-01-05", "directDependencies": [2]},
            {"nodeId": 2, "duration": 4, "startDate": "2024-01-08", "endDate": null},
            {"nodeId": 3, "duration": 6, "endDate": "2024-01-12"}
        ]"#,
    );
    let repo = LocalRepository::from_file(file.path()).unwrap();

    let outcome = load_snapshot(&repo).await;
    assert!(outcome.is_loaded());
    let dashboard = Dashboard::from_outcome(outcome, Default::default());

    assert_eq!(dashboard.stats().total_activities, 3);
    assert_eq!(dashboard.scatter().len(), 3);
    assert_eq!(dashboard.graph().nodes.len(), 3);
    assert_eq!(dashboard.graph().edges.len(), 1);

    let skipped: Vec<i64> = dashboard
        .timeline()
        .skipped
        .iter()
        .map(|s| s.node_id.value())
        .collect();
    assert_eq!(skipped, vec![2, 3]);
    assert_eq!(dashboard.timeline().counts(), vec![1]);
}
