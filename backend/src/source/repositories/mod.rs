//! Repository implementations module.
//!
//! This module contains the implementations of the `ActivityRepository` trait:
//! - `remote`: HTTP endpoint via reqwest
//! - `local`: In-memory or file-backed snapshot for tests and offline development
pub mod local;
#[cfg(feature = "remote-source")]
pub mod remote;

pub use local::LocalRepository;
#[cfg(feature = "remote-source")]
pub use remote::RemoteRepository;
