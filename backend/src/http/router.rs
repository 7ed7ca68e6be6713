//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{dashboard, distribution, graph, scatter, stats, timeline};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The dashboard is read-only apart from the toggle; any origin may call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(dashboard::GET_DASHBOARD, get(handlers::get_dashboard))
        .route(dashboard::GET_ACTIVITIES, get(handlers::get_activities))
        .route(stats::GET_STATS, get(handlers::get_stats))
        .route(
            distribution::GET_DISTRIBUTION_CHART,
            get(handlers::get_distribution_chart),
        )
        .route(scatter::GET_SCATTER_CHART, get(handlers::get_scatter_chart))
        .route(scatter::POST_SCATTER_TOGGLE, post(handlers::toggle_scatter_mode))
        .route(scatter::GET_SCATTER_POINT, get(handlers::get_scatter_point))
        .route(timeline::GET_TIMELINE_CHART, get(handlers::get_timeline_chart))
        .route(graph::GET_GRAPH_CHART, get(handlers::get_graph_chart))
        .route(graph::GET_GRAPH_NODE, get(handlers::get_graph_node));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
