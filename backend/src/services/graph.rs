use crate::api::{Activity, ForceLayout, GraphData, GraphEdge, GraphNode, GraphNodeDetail, NodeId};
use crate::models::parse_calendar_date;

/// Build the dependency graph: one node per activity and one edge per
/// (activity, direct dependency) pair.
///
/// Parallel edges are kept and cycles are not checked; the renderer draws
/// whatever the feed describes.
pub fn build_graph(activities: &[Activity], layout: ForceLayout) -> GraphData {
    let nodes = activities
        .iter()
        .map(|a| GraphNode {
            id: a.node_id.to_string(),
            name: format!("Act. {}", a.node_id),
            value: a.duration,
        })
        .collect();

    let edges = activities
        .iter()
        .flat_map(|a| {
            a.direct_dependencies.iter().map(move |dep| GraphEdge {
                source: a.node_id.to_string(),
                target: dep.to_string(),
            })
        })
        .collect();

    GraphData {
        nodes,
        edges,
        layout,
    }
}

/// Calendar date of `raw`, or `Invalid Date` when it does not parse.
fn tooltip_date(raw: &str) -> String {
    parse_calendar_date(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}

/// Tooltip text for a graph node.
pub fn graph_tooltip(activity: &Activity) -> String {
    format!(
        "Activity: {}<br>Start: {}<br>End: {}<br>Duration: {}",
        activity.node_id,
        tooltip_date(&activity.start_date),
        tooltip_date(&activity.end_date),
        activity.duration
    )
}

/// Look up the activity behind a graph node.
pub fn graph_node_detail(activities: &[Activity], node_id: NodeId) -> Option<GraphNodeDetail> {
    let activity = activities.iter().find(|a| a.node_id == node_id)?;

    Some(GraphNodeDetail {
        node_id,
        start_date: activity.start_date.clone(),
        end_date: activity.end_date.clone(),
        duration: activity.duration,
        tooltip: graph_tooltip(activity),
    })
}
