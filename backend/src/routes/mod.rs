//! Route-level DTOs and path constants.
//!
//! Each submodule owns the serializable types returned by one group of
//! endpoints together with the path it is mounted on.

pub mod dashboard;
pub mod distribution;
pub mod graph;
pub mod scatter;
pub mod stats;
pub mod timeline;
