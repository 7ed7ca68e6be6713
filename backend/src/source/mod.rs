//! Activity source module.
//!
//! Abstracts where the activity feed comes from via the Repository pattern so
//! the dashboard can be fed by the live endpoint, a JSON file or a fixture.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Dashboard session / HTTP layer                         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │  load_snapshot() -> LoadOutcome
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Loader (loader.rs)                                     │
//! │  - one fetch, no retry                                   │
//! │  - snapshot checksum                                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs)                       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │ RemoteRepository             │ LocalRepository
//!     │ (reqwest GET)                │ (in-memory / JSON file)
//!     └──────────────────────────────┘
//! ```

pub mod checksum;
pub mod error;
pub mod factory;
pub mod loader;
pub mod repositories;
pub mod repository;

pub use checksum::{calculate_checksum, snapshot_checksum};
pub use error::{ErrorContext, SourceError, SourceResult};
pub use factory::{RepositoryFactory, RepositoryType};
pub use loader::{load_snapshot, LoadOutcome, Snapshot};
pub use repositories::LocalRepository;
#[cfg(feature = "remote-source")]
pub use repositories::RemoteRepository;
pub use repository::ActivityRepository;
