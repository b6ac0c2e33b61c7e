use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::data_provider::LeaderboardProvider;
use crate::error::FetchError;
use crate::model::LeaderboardResponse;

/// HTTP client for the scoring service
///
/// The API settings are fixed at construction; there is no global endpoint.
pub struct LeaderboardClient {
    http: Client,
    api: ApiConfig,
}

impl LeaderboardClient {
    pub fn new(api: ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .context("failed to build http client")?;
        Ok(Self { http, api })
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

/// Map a transport-level reqwest error onto the fetch taxonomy
fn classify_transport_error(err: &reqwest::Error) -> FetchError {
    if let Some(status) = err.status() {
        return FetchError::from_status(status.as_u16());
    }
    if err.is_connect() || err.is_timeout() || err.is_request() {
        return FetchError::Network(err.to_string());
    }
    FetchError::Unclassified(err.to_string())
}

fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::from_status(status.as_u16()))
    }
}

#[async_trait]
impl LeaderboardProvider for LeaderboardClient {
    async fn fetch_leaderboard(&self) -> Result<LeaderboardResponse, FetchError> {
        let url = self.api.leaderboard_url();
        debug!("HTTP: GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!("HTTP: Request to {} failed: {}", url, e);
                classify_transport_error(&e)
            })?;

        let status = response.status();
        check_status(status).inspect_err(|e| warn!("HTTP: {} returned {}: {}", url, status, e))?;

        response
            .json::<LeaderboardResponse>()
            .await
            .map_err(|e| {
                warn!("HTTP: Failed to decode response from {}: {}", url, e);
                FetchError::Unclassified(format!("invalid response body: {}", e))
            })
    }
}
