use serde::{Deserialize, Serialize};

use crate::api::NodeId;

// =========================================================
// Dependency graph types
// =========================================================

/// One activity in the force graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Stringified node id.
    pub id: String,
    /// Display label, `"Act. {id}"`.
    pub name: String,
    /// Node weight (duration in days).
    pub value: f64,
}

/// Directed edge from an activity to one of its direct dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// Physics parameters handed to the renderer's force layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceLayout {
    pub repulsion: f64,
    pub edge_length: f64,
}

impl Default for ForceLayout {
    fn default() -> Self {
        Self {
            repulsion: 200.0,
            edge_length: 100.0,
        }
    }
}

/// Node/edge view of the direct dependency relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub layout: ForceLayout,
}

/// Tooltip detail for one graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNodeDetail {
    pub node_id: NodeId,
    pub start_date: String,
    pub end_date: String,
    pub duration: f64,
    pub tooltip: String,
}

/// Route path for the dependency graph chart
pub const GET_GRAPH_CHART: &str = "/charts/graph";
/// Route path for one graph node's detail
pub const GET_GRAPH_NODE: &str = "/charts/graph/nodes/{node_id}";
