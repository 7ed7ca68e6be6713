use super::*;

fn sample_activities() -> Vec<Activity> {
    vec![
        Activity::new(10, 2.0, "2024-01-01", "2024-01-03")
            .with_prerequisites(&[], &[])
            .with_dependencies(&[11], &[11, 12]),
        Activity::new(11, 5.0, "2024-01-04", "2024-01-09")
            .with_prerequisites(&[10], &[10])
            .with_dependencies(&[12], &[12]),
        Activity::new(12, 31.0, "2024-01-10", "2024-02-10")
            .with_prerequisites(&[11], &[10, 11])
            .with_dependencies(&[], &[]),
    ]
}

#[test]
fn test_direct_mode_counts_direct_relations() {
    let data = build_scatter(&sample_activities(), ScatterMode::Direct);

    assert_eq!(data.mode, ScatterMode::Direct);
    assert_eq!(
        data.points,
        vec![
            ScatterPoint { x: 0, y: 1, z: 2.0 },
            ScatterPoint { x: 1, y: 1, z: 5.0 },
            ScatterPoint { x: 1, y: 0, z: 31.0 },
        ]
    );
}

#[test]
fn test_all_mode_counts_transitive_relations() {
    let data = build_scatter(&sample_activities(), ScatterMode::All);

    assert_eq!(
        data.points,
        vec![
            ScatterPoint { x: 0, y: 2, z: 2.0 },
            ScatterPoint { x: 1, y: 1, z: 5.0 },
            ScatterPoint { x: 2, y: 0, z: 31.0 },
        ]
    );
}

#[test]
fn test_mode_does_not_change_cardinality() {
    let activities = sample_activities();
    let direct = build_scatter(&activities, ScatterMode::Direct);
    let all = build_scatter(&activities, ScatterMode::All);

    assert_eq!(direct.len(), activities.len());
    assert_eq!(all.len(), activities.len());
    assert_eq!(direct.node_ids, all.node_ids);
}

#[test]
fn test_node_ids_are_index_aligned() {
    let data = build_scatter(&sample_activities(), ScatterMode::Direct);
    assert_eq!(
        data.node_ids,
        vec![NodeId::new(10), NodeId::new(11), NodeId::new(12)]
    );
}

#[test]
fn test_empty_input() {
    let data = build_scatter(&[], ScatterMode::All);
    assert!(data.is_empty());
    assert!(data.node_ids.is_empty());
}

#[test]
fn test_description_follows_mode() {
    assert_eq!(
        scatter_description(ScatterMode::Direct),
        "Shows the amount of direct dependencies compared to the direct prerequisites"
    );
    assert_eq!(
        scatter_description(ScatterMode::All),
        "Shows the amount of all dependencies compared to the all prerequisites"
    );
}

#[test]
fn test_detail_recovers_activity() {
    let activities = sample_activities();
    let detail = scatter_detail(&activities, ScatterMode::All, 2).unwrap();

    assert_eq!(detail.index, 2);
    assert_eq!(detail.node_id, NodeId::new(12));
    assert_eq!(detail.prerequisites, 2);
    assert_eq!(detail.dependencies, 0);
    assert_eq!(detail.duration, 31.0);
    assert_eq!(
        detail.tooltip,
        "Activity: 12<br>Prerequisites: 2<br>Dependencies: 0<br>Duration: 31"
    );
}

#[test]
fn test_detail_out_of_range() {
    assert!(scatter_detail(&sample_activities(), ScatterMode::Direct, 3).is_none());
}
