/// Ranking and rank-relative metrics
///
/// The canonical list is built once per accepted fetch by [`Leaderboard::from_response`]:
/// rows are normalized, sorted, ranked and the metrics thresholds are computed
/// in a single step, so nothing downstream ever observes a half-built list.
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::FetchError;
use crate::formatting::parse_timestamp;
use crate::model::{LeaderboardResponse, Player};
use crate::normalize::normalize_rows;

/// Number of places that make up the "Top 100" zone
pub const TOP_ZONE_SIZE: usize = 100;

/// Sort players by points descending and assign dense ranks
///
/// Equal scores keep the order in which the service sent them.
pub fn rank_players(players: Vec<Player>) -> Vec<Player> {
    let mut indexed: Vec<(usize, Player)> = players.into_iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| b.points.cmp(&a.points).then(ia.cmp(ib)));
    indexed
        .into_iter()
        .enumerate()
        .map(|(position, (_, mut player))| {
            player.rank = (position + 1) as u32;
            player
        })
        .collect()
}

/// Gap to the leader, as displayed in the "To 1st" column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderGap {
    Leader,
    Behind(i64),
}

/// Gap to the Top 100 cut, as displayed in the "To Top 100" column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopZoneGap {
    InTopZone,
    Behind(i64),
}

/// Derived values for a single player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerMetrics {
    pub distance_to_first: i64,
    pub distance_to_top100: i64,
    pub leader_gap: LeaderGap,
    pub top_zone_gap: TopZoneGap,
}

/// Reference points of the canonical list used to compute [`PlayerMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaderboardMetrics {
    pub leader_points: i64,
    pub top100_threshold: i64,
}

impl LeaderboardMetrics {
    /// Compute reference points from a ranked list
    pub fn from_ranked(players: &[Player]) -> Self {
        let leader_points = players.first().map(|p| p.points).unwrap_or(0);
        let top100_threshold = if players.len() >= TOP_ZONE_SIZE {
            players[TOP_ZONE_SIZE - 1].points
        } else {
            0
        };
        Self { leader_points, top100_threshold }
    }

    pub fn for_player(&self, player: &Player) -> PlayerMetrics {
        // Points come straight from the service and may sit at the i64 limits
        let distance_to_first = self.leader_points.saturating_sub(player.points);
        let distance_to_top100 = player.points.saturating_sub(self.top100_threshold);

        let leader_gap = if distance_to_first == 0 {
            LeaderGap::Leader
        } else {
            LeaderGap::Behind(distance_to_first)
        };
        let top_zone_gap = if player.rank as usize <= TOP_ZONE_SIZE {
            TopZoneGap::InTopZone
        } else {
            TopZoneGap::Behind(distance_to_top100.saturating_abs())
        };

        PlayerMetrics {
            distance_to_first,
            distance_to_top100,
            leader_gap,
            top_zone_gap,
        }
    }
}

/// Aggregate figures shown in the stats panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaderboardStats {
    pub total_players: usize,
    pub top_score: i64,
    pub average_points: i64,
    pub filtered_results: usize,
}

impl LeaderboardStats {
    pub fn compute(players: &[Player], filtered_results: usize) -> Self {
        if players.is_empty() {
            return Self {
                filtered_results,
                ..Default::default()
            };
        }
        let top_score = players.iter().map(|p| p.points).max().unwrap_or(0);
        let sum: i128 = players.iter().map(|p| p.points as i128).sum();
        let average = sum as f64 / players.len() as f64;
        Self {
            total_players: players.len(),
            top_score,
            // Half rounds up, negative values included
            average_points: (average + 0.5).floor() as i64,
            filtered_results,
        }
    }
}

/// Immutable snapshot of one accepted fetch
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    pub players: Arc<Vec<Player>>,
    pub metrics: LeaderboardMetrics,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Leaderboard {
    /// Build a ranked snapshot from already-normalized players
    pub fn new(players: Vec<Player>, updated_at: DateTime<Utc>) -> Self {
        let ranked = rank_players(players);
        let metrics = LeaderboardMetrics::from_ranked(&ranked);
        Self {
            players: Arc::new(ranked),
            metrics,
            updated_at: Some(updated_at),
        }
    }

    /// Normalize, rank and stamp a service response
    ///
    /// `fetched_at` is used when the response carries no usable `updated` field.
    pub fn from_response(response: LeaderboardResponse, fetched_at: DateTime<Utc>) -> Result<Self, FetchError> {
        let rows = response.rows.ok_or(FetchError::MissingRows)?;
        let updated_at = match response.updated.as_ref() {
            Some(value) => parse_timestamp(value).unwrap_or_else(|| {
                tracing::warn!("DATA: Unparseable updated timestamp {}, using fetch time", value);
                fetched_at
            }),
            None => fetched_at,
        };
        Ok(Self::new(normalize_rows(&rows), updated_at))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn metrics_for(&self, player: &Player) -> PlayerMetrics {
        self.metrics.for_player(player)
    }

    pub fn find(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}
