//! Application configuration file support.
//!
//! Settings are read from `activity-analytics.toml` and then overridden by
//! environment variables. Every field has a default, so a missing file is
//! not an error.
//!
//! ```toml
//! [source]
//! type = "remote"
//! url = "http://localhost:5000/api/activities"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [graph]
//! repulsion = 200.0
//! edge_length = 100.0
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::api::ForceLayout;
use crate::source::RepositoryType;

/// Endpoint served by the project-management backend in development.
pub const DEFAULT_ACTIVITIES_URL: &str = "http://localhost:5000/api/activities";

/// File name searched for in the default locations.
pub const CONFIG_FILE_NAME: &str = "activity-analytics.toml";

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No activity-analytics.toml found in standard locations")]
    NotFound,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub graph: GraphSettings,
}

/// Where the activity feed is read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(rename = "type", default = "default_source_type")]
    pub repo_type: String,
    #[serde(default = "default_url")]
    pub url: String,
    /// JSON file for the local repository
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Listen address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Force layout parameters for the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphSettings {
    #[serde(default = "default_repulsion")]
    pub repulsion: f64,
    #[serde(default = "default_edge_length")]
    pub edge_length: f64,
}

fn default_source_type() -> String {
    "remote".to_string()
}

fn default_url() -> String {
    DEFAULT_ACTIVITIES_URL.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_repulsion() -> f64 {
    ForceLayout::default().repulsion
}

fn default_edge_length() -> f64 {
    ForceLayout::default().edge_length
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            repo_type: default_source_type(),
            url: default_url(),
            file: None,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            repulsion: default_repulsion(),
            edge_length: default_edge_length(),
        }
    }
}

impl SourceSettings {
    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repo_type)
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<GraphSettings> for ForceLayout {
    fn from(graph: GraphSettings) -> Self {
        ForceLayout {
            repulsion: graph.repulsion,
            edge_length: graph.edge_length,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `activity-analytics.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Resolve the configuration the server runs with.
    ///
    /// `ACTIVITY_CONFIG` names an explicit file. Otherwise the default
    /// locations are searched and, failing that, defaults are used.
    /// Environment overrides are applied last.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("ACTIVITY_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => match Self::from_default_location() {
                Ok(config) => config,
                Err(ConfigError::NotFound) => {
                    log::info!("No {} found, using defaults", CONFIG_FILE_NAME);
                    Self::default()
                }
                Err(e) => return Err(e),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `ACTIVITY_SOURCE`, `ACTIVITY_API_URL`, `ACTIVITY_FILE`, `HOST`
    /// and `PORT` as returned by `lookup`.
    ///
    /// Setting `ACTIVITY_FILE` alone switches the source to `local`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup("ACTIVITY_SOURCE") {
            if RepositoryType::from_str(&source).is_err() {
                return Err(ConfigError::InvalidValue {
                    key: "ACTIVITY_SOURCE",
                    value: source,
                });
            }
            self.source.repo_type = source;
        }
        if let Some(url) = lookup("ACTIVITY_API_URL") {
            self.source.url = url;
        }
        if let Some(file) = lookup("ACTIVITY_FILE") {
            // A file without an explicit source selects the local repository.
            if lookup("ACTIVITY_SOURCE").is_none() {
                self.source.repo_type = RepositoryType::Local.as_str().to_string();
            }
            self.source.file = Some(PathBuf::from(file));
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port,
            })?;
        }
        Ok(())
    }

    pub fn layout(&self) -> ForceLayout {
        self.graph.into()
    }
}
