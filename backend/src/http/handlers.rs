//! HTTP handlers for the REST API.
//!
//! Each handler reads or updates the shared [`Dashboard`](crate::services::Dashboard)
//! and returns one of its views. Locks are never held across an `.await`.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use super::dto::{
    ActivitiesResponse, ChartPanel, DashboardData, GraphNodeDetail, HealthResponse,
    ScatterDetail, StatsResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::NodeId;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the activity source is reachable and how the load went.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let source_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        source: state.repository.describe(),
        source_status,
        load: state.dashboard.read().status().clone(),
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> HandlerResult<DashboardData> {
    Ok(Json(state.dashboard.read().view()))
}

/// GET /v1/activities
pub async fn get_activities(State(state): State<AppState>) -> HandlerResult<ActivitiesResponse> {
    let activities = state.dashboard.read().activities().to_vec();
    let total = activities.len();
    Ok(Json(ActivitiesResponse { activities, total }))
}

/// GET /v1/stats
pub async fn get_stats(State(state): State<AppState>) -> HandlerResult<StatsResponse> {
    let dashboard = state.dashboard.read();
    Ok(Json(StatsResponse {
        stats: *dashboard.stats(),
        tiles: dashboard.tiles(),
    }))
}

// =============================================================================
// Chart Endpoints
// =============================================================================

/// GET /v1/charts/distribution
pub async fn get_distribution_chart(State(state): State<AppState>) -> HandlerResult<ChartPanel> {
    Ok(Json(state.dashboard.read().distribution_panel()))
}

/// GET /v1/charts/scatter
pub async fn get_scatter_chart(State(state): State<AppState>) -> HandlerResult<ChartPanel> {
    Ok(Json(state.dashboard.read().scatter_panel()))
}

/// POST /v1/charts/scatter/toggle
///
/// Flip between direct and transitive counting; returns the re-derived panel.
pub async fn toggle_scatter_mode(State(state): State<AppState>) -> HandlerResult<ChartPanel> {
    let mut dashboard = state.dashboard.write();
    let mode = dashboard.toggle_scatter_mode();
    tracing::info!(%mode, "Scatter mode toggled");
    Ok(Json(dashboard.scatter_panel()))
}

/// GET /v1/charts/scatter/points/{index}
pub async fn get_scatter_point(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
) -> HandlerResult<ScatterDetail> {
    let Path(index) = index?;
    let dashboard = state.dashboard.read();

    dashboard.scatter_detail(index).map(Json).ok_or_else(|| {
        AppError::not_found(
            "Scatter point not found",
            format!(
                "index {} out of range ({} points)",
                index,
                dashboard.scatter().len()
            ),
        )
    })
}

/// GET /v1/charts/timeline
pub async fn get_timeline_chart(State(state): State<AppState>) -> HandlerResult<ChartPanel> {
    Ok(Json(state.dashboard.read().timeline_panel()))
}

/// GET /v1/charts/graph
pub async fn get_graph_chart(State(state): State<AppState>) -> HandlerResult<ChartPanel> {
    Ok(Json(state.dashboard.read().graph_panel()))
}

/// GET /v1/charts/graph/nodes/{node_id}
pub async fn get_graph_node(
    State(state): State<AppState>,
    node_id: Result<Path<i64>, PathRejection>,
) -> HandlerResult<GraphNodeDetail> {
    let Path(node_id) = node_id?;
    let node_id = NodeId::new(node_id);

    state
        .dashboard
        .read()
        .graph_node_detail(node_id)
        .map(Json)
        .ok_or_else(|| {
            AppError::not_found("Activity not found", format!("no node with id {}", node_id))
        })
}
