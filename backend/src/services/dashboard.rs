//! Dashboard session state.
//!
//! A [`Dashboard`] owns one activity snapshot, the scatter toggle and every
//! view derived from them. Each event replaces the affected views wholesale:
//! a load re-derives everything, a toggle re-derives the scatter only.

use log::{debug, info, warn};

use super::charts::{
    distribution_chart_options, graph_chart_options, scatter_chart_options,
    timeline_chart_options,
};
use super::distributions::build_distribution;
use super::graph::{build_graph, graph_node_detail};
use super::scatter::{build_scatter, scatter_detail};
use super::stats::{build_summary_tiles, summarize_durations};
use super::timeline::build_timeline;
use crate::api::{
    Activity, ChartKind, ChartPanel, DashboardData, DistributionData, DurationStats, ForceLayout,
    GraphData, GraphNodeDetail, LoadStatus, NodeId, ScatterData, ScatterDetail, ScatterMode,
    SummaryTile, TimelineData,
};
use crate::routes::dashboard::{DISTRIBUTION_ANCHOR, GRAPH_ANCHOR, SCATTER_ANCHOR, TIMELINE_ANCHOR};
use crate::source::LoadOutcome;

#[derive(Debug, Clone)]
pub struct Dashboard {
    activities: Vec<Activity>,
    status: LoadStatus,
    mode: ScatterMode,
    layout: ForceLayout,
    stats: DurationStats,
    distribution: DistributionData,
    scatter: ScatterData,
    timeline: TimelineData,
    graph: GraphData,
}

impl Dashboard {
    /// Empty dashboard waiting for its first load.
    pub fn new(layout: ForceLayout) -> Self {
        Self {
            activities: Vec::new(),
            status: LoadStatus::Pending,
            mode: ScatterMode::default(),
            layout,
            stats: DurationStats::default(),
            distribution: build_distribution(&DurationStats::default()),
            scatter: build_scatter(&[], ScatterMode::default()),
            timeline: TimelineData::default(),
            graph: build_graph(&[], layout),
        }
    }

    /// Dashboard derived from a completed load.
    pub fn from_outcome(outcome: LoadOutcome, layout: ForceLayout) -> Self {
        let mut dashboard = Self::new(layout);
        dashboard.apply_outcome(outcome);
        dashboard
    }

    /// Replace the snapshot with the result of a load and re-derive every view.
    ///
    /// A failed load leaves an empty snapshot behind, so all views show their
    /// zero state next to the failure reason. The scatter mode is kept.
    pub fn apply_outcome(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(snapshot) => {
                info!(
                    "Loaded {} activities (checksum {})",
                    snapshot.activities.len(),
                    snapshot.checksum
                );
                self.status = LoadStatus::Loaded {
                    activity_count: snapshot.activities.len(),
                    checksum: snapshot.checksum,
                    loaded_at: snapshot.loaded_at,
                };
                self.activities = snapshot.activities;
            }
            LoadOutcome::Failed { reason, retryable } => {
                warn!("Activity load failed: {}", reason);
                self.status = LoadStatus::Failed { reason, retryable };
                self.activities = Vec::new();
            }
        }
        self.derive_all();
    }

    fn derive_all(&mut self) {
        self.stats = summarize_durations(&self.activities);
        self.distribution = build_distribution(&self.stats);
        self.timeline = build_timeline(&self.activities);
        self.graph = build_graph(&self.activities, self.layout);
        self.recompute_scatter();
    }

    /// Re-derive the scatter view from the snapshot and the current mode.
    pub fn recompute_scatter(&mut self) {
        debug!("Recomputing scatter in {} mode", self.mode);
        self.scatter = build_scatter(&self.activities, self.mode);
    }

    /// Flip between direct and transitive counting and return the new mode.
    pub fn toggle_scatter_mode(&mut self) -> ScatterMode {
        self.mode = self.mode.toggled();
        self.recompute_scatter();
        self.mode
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn mode(&self) -> ScatterMode {
        self.mode
    }

    pub fn layout(&self) -> ForceLayout {
        self.layout
    }

    pub fn stats(&self) -> &DurationStats {
        &self.stats
    }

    pub fn distribution(&self) -> &DistributionData {
        &self.distribution
    }

    pub fn scatter(&self) -> &ScatterData {
        &self.scatter
    }

    pub fn timeline(&self) -> &TimelineData {
        &self.timeline
    }

    pub fn graph(&self) -> &GraphData {
        &self.graph
    }

    pub fn tiles(&self) -> Vec<SummaryTile> {
        build_summary_tiles(&self.stats)
    }

    pub fn scatter_detail(&self, index: usize) -> Option<ScatterDetail> {
        scatter_detail(&self.activities, self.mode, index)
    }

    pub fn graph_node_detail(&self, node_id: NodeId) -> Option<GraphNodeDetail> {
        graph_node_detail(&self.activities, node_id)
    }

    pub fn distribution_panel(&self) -> ChartPanel {
        ChartPanel {
            id: DISTRIBUTION_ANCHOR.to_string(),
            kind: ChartKind::Pie,
            title: "Activity Duration".to_string(),
            description: "Share of activities shorter than a day, shorter than a month and longer than a month".to_string(),
            options: distribution_chart_options(&self.distribution),
        }
    }

    pub fn scatter_panel(&self) -> ChartPanel {
        ChartPanel {
            id: SCATTER_ANCHOR.to_string(),
            kind: ChartKind::Scatter,
            title: "Prerequisites and Dependencies".to_string(),
            description: self.scatter.description.clone(),
            options: scatter_chart_options(&self.scatter),
        }
    }

    pub fn timeline_panel(&self) -> ChartPanel {
        ChartPanel {
            id: TIMELINE_ANCHOR.to_string(),
            kind: ChartKind::Line,
            title: "Activity Timeline".to_string(),
            description: "Number of activities in progress during each week".to_string(),
            options: timeline_chart_options(&self.timeline),
        }
    }

    pub fn graph_panel(&self) -> ChartPanel {
        ChartPanel {
            id: GRAPH_ANCHOR.to_string(),
            kind: ChartKind::Graph,
            title: "Path Finder".to_string(),
            description: "Activities linked to their direct dependencies".to_string(),
            options: graph_chart_options(&self.graph, &self.activities),
        }
    }

    /// Full page payload.
    pub fn view(&self) -> DashboardData {
        DashboardData {
            status: self.status.clone(),
            scatter_mode: self.mode,
            stats: self.stats,
            tiles: self.tiles(),
            charts: vec![
                self.distribution_panel(),
                self.scatter_panel(),
                self.timeline_panel(),
                self.graph_panel(),
            ],
            timeline_skipped: self.timeline.skipped.clone(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(ForceLayout::default())
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod dashboard_tests;
