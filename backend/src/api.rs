//! Public API surface for the analytics backend.
//!
//! This file consolidates the DTO types served over HTTP.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::dashboard::ChartKind;
pub use crate::routes::dashboard::ChartPanel;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::dashboard::LoadStatus;
pub use crate::routes::distribution::DistributionData;
pub use crate::routes::distribution::DistributionSlice;
pub use crate::routes::graph::ForceLayout;
pub use crate::routes::graph::GraphData;
pub use crate::routes::graph::GraphEdge;
pub use crate::routes::graph::GraphNode;
pub use crate::routes::graph::GraphNodeDetail;
pub use crate::routes::scatter::ScatterData;
pub use crate::routes::scatter::ScatterDetail;
pub use crate::routes::scatter::ScatterMode;
pub use crate::routes::scatter::ScatterPoint;
pub use crate::routes::stats::DurationStats;
pub use crate::routes::stats::SummaryTile;
pub use crate::routes::timeline::SkippedActivity;
pub use crate::routes::timeline::TimelineData;
pub use crate::routes::timeline::WeeklyBin;

pub use crate::models::{Activity, ActivityError, DateSpan};

crate::define_id_type!(i64, NodeId);

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
