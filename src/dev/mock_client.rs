/// Mock leaderboard client for development
use crate::data_provider::LeaderboardProvider;
use crate::error::FetchError;
use crate::fixtures;
use crate::model::LeaderboardResponse;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

/// Number of players served by the mock client
const MOCK_PLAYER_COUNT: usize = 240;

/// Mock client that returns fixture data instead of calling the scoring service
pub struct MockClient;

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeaderboardProvider for MockClient {
    async fn fetch_leaderboard(&self) -> Result<LeaderboardResponse, FetchError> {
        info!("MockClient: Returning {} mock rows", MOCK_PLAYER_COUNT);
        Ok(fixtures::create_mock_response(MOCK_PLAYER_COUNT, Utc::now()))
    }
}
