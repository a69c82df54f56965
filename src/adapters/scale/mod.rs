//! Labeling API client
//!
//! Implements the `TaskSource` port against the task endpoint of the remote
//! labeling platform: `GET {base_url}/task/{id}` with HTTP basic auth, the
//! API key as user name and an empty password.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use thiserror::Error;

use crate::config::ApiConfig;
use crate::core::ports::TaskSource;

/// Errors raised while talking to the labeling API
#[derive(Debug, Error)]
pub enum FetchError {
    /// No API key in the environment or config
    #[error("no API key configured (set {env} or api.key in the config file)", env = crate::config::API_KEY_ENV)]
    MissingApiKey,

    /// Transport-level failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// Status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },
}

/// Blocking client for the labeling API
#[derive(Debug)]
pub struct ApiTaskSource {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl ApiTaskSource {
    /// Create a client from API settings; `api_key` overrides the config
    pub fn new(config: &ApiConfig, api_key: Option<String>) -> Result<Self, FetchError> {
        let api_key = api_key
            .or_else(|| config.key.clone())
            .filter(|k| !k.is_empty())
            .ok_or(FetchError::MissingApiKey)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// URL of a task record
    #[must_use]
    pub fn task_url(&self, task_id: &str) -> String {
        format!("{}/task/{task_id}", self.base_url)
    }

    fn get(&self, task_id: &str) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(self.task_url(task_id))
            .basic_auth(&self.api_key, Some(""))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }
        Ok(response.json()?)
    }
}

impl TaskSource for ApiTaskSource {
    fn fetch_task(&self, task_id: &str) -> anyhow::Result<serde_json::Value> {
        Ok(self.get(task_id)?)
    }
}
