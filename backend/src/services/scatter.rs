use crate::api::{Activity, NodeId, ScatterData, ScatterDetail, ScatterMode, ScatterPoint};

/// Panel description, which follows the current mode.
pub fn scatter_description(mode: ScatterMode) -> String {
    format!(
        "Shows the amount of {} dependencies compared to the {} prerequisites",
        mode, mode
    )
}

fn point_for(activity: &Activity, mode: ScatterMode) -> ScatterPoint {
    ScatterPoint {
        x: activity.prerequisites(mode).len(),
        y: activity.dependencies(mode).len(),
        z: activity.duration,
    }
}

/// Map every activity to `(prerequisites, dependencies, duration)`.
///
/// The output is index-aligned with `activities`; `node_ids` records the
/// origin of each point.
pub fn build_scatter(activities: &[Activity], mode: ScatterMode) -> ScatterData {
    let points = activities.iter().map(|a| point_for(a, mode)).collect();
    let node_ids = activities.iter().map(|a| a.node_id).collect();

    ScatterData {
        mode,
        points,
        node_ids,
        description: scatter_description(mode),
    }
}

/// Tooltip text for one point.
pub fn point_tooltip(node_id: NodeId, point: &ScatterPoint) -> String {
    format!(
        "Activity: {}<br>Prerequisites: {}<br>Dependencies: {}<br>Duration: {}",
        node_id, point.x, point.y, point.z
    )
}

/// Recover the activity behind point `index` of a scatter built from the
/// same snapshot.
pub fn scatter_detail(
    activities: &[Activity],
    mode: ScatterMode,
    index: usize,
) -> Option<ScatterDetail> {
    let activity = activities.get(index)?;
    let point = point_for(activity, mode);

    Some(ScatterDetail {
        index,
        node_id: activity.node_id,
        mode,
        prerequisites: point.x,
        dependencies: point.y,
        duration: point.z,
        tooltip: point_tooltip(activity.node_id, &point),
    })
}

#[cfg(test)]
#[path = "scatter_tests.rs"]
mod scatter_tests;
