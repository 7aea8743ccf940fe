use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "http://localhost:10000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis service; the endpoint is `<api_url>/api/analyze`.
    pub api_url: String,
    /// Transport timeout. `None` waits for the service indefinitely.
    pub http_timeout: Option<Duration>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let http_timeout = match std::env::var("MATCHER_HTTP_TIMEOUT_SECS") {
            Ok(secs) => Some(Duration::from_secs(
                secs.parse::<u64>()
                    .context("MATCHER_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            Err(_) => None,
        };

        Ok(Config {
            api_url: std::env::var("MATCHER_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            http_timeout,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Replaces the API base URL when one was given on the command line.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }
}
