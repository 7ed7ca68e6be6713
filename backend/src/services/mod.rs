//! Service layer: pure transforms from an activity snapshot to chart data.
//!
//! None of these functions perform I/O. The [`Dashboard`] session composes
//! them and owns the derived state.

pub mod charts;
pub mod dashboard;
pub mod distributions;
pub mod graph;
pub mod scatter;
pub mod stats;
pub mod timeline;

pub use charts::{
    distribution_chart_options, graph_chart_options, scatter_chart_options,
    timeline_chart_options,
};
pub use dashboard::Dashboard;
pub use distributions::build_distribution;
pub use graph::{build_graph, graph_node_detail};
pub use scatter::{build_scatter, scatter_detail};
pub use stats::{build_summary_tiles, summarize_durations};
pub use timeline::build_timeline;
