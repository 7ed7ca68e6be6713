//! # Activity Analytics
//!
//! Project dashboard engine: turns a snapshot of project activities into
//! duration statistics and four chart views.
//!
//! ## Features
//!
//! - **Loading**: one-shot fetch of the activity feed from an HTTP endpoint
//!   or a JSON file, with a SHA-256 snapshot checksum
//! - **Statistics**: duration buckets (day / month) and summary tiles
//! - **Charts**: duration pie, prerequisite/dependency scatter with a
//!   direct/transitive toggle, weekly occupancy timeline and a force-directed
//!   dependency graph, emitted as ECharts-compatible options
//! - **HTTP API**: RESTful endpoints serving the derived views
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Activity record and calendar helpers
//! - [`source`]: Repository pattern over the activity feed
//! - [`services`]: Pure transforms and the dashboard session
//! - [`routes`]: Route-specific data types and path constants
//! - [`config`]: TOML configuration with environment overrides
//! - `http`: Axum-based HTTP server (feature `http-server`)

pub mod api;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod source;

#[cfg(feature = "http-server")]
pub mod http;
