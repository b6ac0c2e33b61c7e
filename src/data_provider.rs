/// Trait for providing leaderboard data, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::error::FetchError;
use crate::model::LeaderboardResponse;
use crate::ranking::Leaderboard;

/// Source of raw leaderboard responses, implemented by the HTTP client and the mocks
#[async_trait]
pub trait LeaderboardProvider: Send + Sync {
    /// Fetch the raw response of the points endpoint
    async fn fetch_leaderboard(&self) -> Result<LeaderboardResponse, FetchError>;
}

/// Fetch, normalize and rank in one step
///
/// The returned snapshot is complete; callers never see intermediate lists.
pub async fn load_leaderboard(provider: &dyn LeaderboardProvider) -> Result<Leaderboard, FetchError> {
    let response = provider.fetch_leaderboard().await?;
    let board = Leaderboard::from_response(response, Utc::now())?;
    debug!("DATA: Ranked {} players", board.len());
    Ok(board)
}
