use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use super::action::Action;
use crate::data_provider::{load_leaderboard, LeaderboardProvider};
use crate::presentation::HIGHLIGHT_DURATION;

/// Side effect returned by the reducer
///
/// The reducer never performs I/O itself; it describes what should happen
/// and the runtime executes it.
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    /// Fetch the leaderboard, tagging the result with `seq`
    FetchLeaderboard { seq: u64 },
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Self::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
            Self::Async(_) => write!(f, "Async(..)"),
            Self::FetchLeaderboard { seq } => f.debug_struct("FetchLeaderboard").field("seq", seq).finish(),
        }
    }
}

/// Effect handler for data fetching operations
///
/// Each method returns an Effect that will dispatch the matching
/// *Loaded action when complete.
pub struct DataEffects {
    client: Arc<dyn LeaderboardProvider>,
}

impl DataEffects {
    /// Create a new DataEffects handler with a leaderboard provider
    pub fn new(client: Arc<dyn LeaderboardProvider>) -> Self {
        Self { client }
    }

    /// Fetch, normalize and rank the leaderboard
    pub fn fetch_leaderboard(&self, seq: u64) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            debug!("EFFECT: Fetching leaderboard (seq={})", seq);
            let result = load_leaderboard(client.as_ref()).await;
            Action::LeaderboardLoaded { seq, result }
        }))
    }
}

/// Timer that clears the jump highlight set by `generation`
pub fn highlight_timer(generation: u64) -> Effect {
    Effect::Async(Box::pin(async move {
        tokio::time::sleep(HIGHLIGHT_DURATION).await;
        Action::HighlightExpired(generation)
    }))
}
