use serde::{Deserialize, Serialize};

use crate::api::NodeId;

// =========================================================
// Relationship scatter types
// =========================================================

/// Which relation sets the scatter chart counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScatterMode {
    /// Immediate neighbours only.
    #[default]
    Direct,
    /// Full transitive closure.
    All,
}

impl ScatterMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Direct => Self::All,
            Self::All => Self::Direct,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for ScatterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prerequisite count, dependency count and duration of one activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: usize,
    pub y: usize,
    pub z: f64,
}

/// Scatter series plus the index-aligned origin of every point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterData {
    pub mode: ScatterMode,
    pub points: Vec<ScatterPoint>,
    /// `node_ids[i]` produced `points[i]`.
    pub node_ids: Vec<NodeId>,
    pub description: String,
}

impl ScatterData {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Tooltip detail for a single scatter point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterDetail {
    pub index: usize,
    pub node_id: NodeId,
    pub mode: ScatterMode,
    pub prerequisites: usize,
    pub dependencies: usize,
    pub duration: f64,
    pub tooltip: String,
}

/// Route path for the scatter chart
pub const GET_SCATTER_CHART: &str = "/charts/scatter";
/// Route path for flipping the scatter mode
pub const POST_SCATTER_TOGGLE: &str = "/charts/scatter/toggle";
/// Route path for one scatter point's detail
pub const GET_SCATTER_POINT: &str = "/charts/scatter/points/{index}";
