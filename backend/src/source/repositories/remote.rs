//! HTTP-backed activity repository.
//!
//! Issues one unparameterized GET against the configured endpoint per fetch.
//! There is no retry and no client-side timeout; the caller decides what a
//! failed load means.

use async_trait::async_trait;
use reqwest::Client;

use crate::api::Activity;
use crate::config::DEFAULT_ACTIVITIES_URL;
use crate::source::repository::*;

#[derive(Debug, Clone)]
pub struct RemoteRepository {
    client: Client,
    url: String,
}

impl RemoteRepository {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("activity-analytics/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| Client::new()),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn context(&self, operation: &str) -> ErrorContext {
        ErrorContext::new(operation).with_source(self.url.as_str())
    }
}

impl Default for RemoteRepository {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITIES_URL)
    }
}

#[async_trait]
impl ActivityRepository for RemoteRepository {
    async fn fetch_activities(&self) -> SourceResult<Vec<Activity>> {
        let resp = self.client.get(&self.url).send().await.map_err(|e| {
            SourceError::connection_with_context(e.to_string(), self.context("fetch_activities"))
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::status(
                status.as_u16(),
                format!("Activity endpoint answered {}", status),
                self.context("fetch_activities"),
            ));
        }

        let body = resp.bytes().await.map_err(|e| {
            SourceError::connection_with_context(e.to_string(), self.context("fetch_activities"))
        })?;

        let activities: Vec<Activity> = serde_json::from_slice(&body).map_err(|e| {
            SourceError::decode_with_context(
                format!("Activity payload is not a JSON array of activities: {}", e),
                self.context("fetch_activities"),
            )
        })?;

        log::debug!("Fetched {} activities from {}", activities.len(), self.url);
        Ok(activities)
    }

    async fn health_check(&self) -> SourceResult<bool> {
        match self.client.get(&self.url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_connect() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
