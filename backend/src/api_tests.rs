use super::*;

#[test]
fn test_node_id_conversions() {
    let id = NodeId::new(42);
    assert_eq!(id.value(), 42);
    assert_eq!(NodeId::from(42), id);
    assert_eq!(i64::from(id), 42);
    assert_eq!(id.to_string(), "42");
}

#[test]
fn test_node_id_ordering() {
    assert!(NodeId::new(1) < NodeId::new(2));
}

#[test]
fn test_node_id_is_a_bare_number_on_the_wire() {
    assert_eq!(serde_json::to_string(&NodeId::new(7)).unwrap(), "7");
    assert_eq!(serde_json::from_str::<NodeId>("7").unwrap(), NodeId::new(7));
}

#[test]
fn test_activity_wire_names() {
    let activity = Activity::new(3, 1.5, "2024-01-01", "2024-01-02").with_dependencies(&[4], &[4, 5]);
    let json = serde_json::to_value(&activity).unwrap();

    assert_eq!(json["nodeId"], 3);
    assert_eq!(json["startDate"], "2024-01-01");
    assert_eq!(json["directDependencies"], serde_json::json!([4]));
    assert_eq!(json["allDependencies"], serde_json::json!([4, 5]));
    assert_eq!(json["allPrerequisites"], serde_json::json!([]));
}

#[test]
fn test_load_status_is_tagged() {
    let json = serde_json::to_value(LoadStatus::Failed {
        reason: "timeout".to_string(),
        retryable: true,
    })
    .unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "state": "failed", "reason": "timeout", "retryable": true })
    );
    assert_eq!(
        serde_json::to_value(LoadStatus::Pending).unwrap(),
        serde_json::json!({ "state": "pending" })
    );
}

#[test]
fn test_scatter_mode_wire_names() {
    assert_eq!(serde_json::to_string(&ScatterMode::Direct).unwrap(), "\"direct\"");
    assert_eq!(serde_json::to_string(&ScatterMode::All).unwrap(), "\"all\"");
}
