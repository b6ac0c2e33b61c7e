//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use async_trait::async_trait;
use chrono::Utc;
use ratatui::buffer::Buffer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::data_provider::LeaderboardProvider;
use crate::error::FetchError;
use crate::fixtures;
use crate::model::LeaderboardResponse;
use crate::ranking::Leaderboard;

/// In-memory provider returning a canned response or error
pub struct MockProvider {
    result: Result<LeaderboardResponse, FetchError>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn with_response(response: LeaderboardResponse) -> Self {
        Self {
            result: Ok(response),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_players(players: &[(&str, i64)]) -> Self {
        Self::with_response(fixtures::create_named_response(players))
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LeaderboardProvider for MockProvider {
    async fn fetch_leaderboard(&self) -> Result<LeaderboardResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Creates an Arc-wrapped provider serving `count` fixture players.
pub fn create_client(count: usize) -> Arc<MockProvider> {
    Arc::new(MockProvider::with_response(fixtures::create_mock_response(count, Utc::now())))
}

/// Ranked leaderboard built from fixtures
pub fn create_test_leaderboard(count: usize) -> Leaderboard {
    Leaderboard::from_response(fixtures::create_mock_response(count, Utc::now()), Utc::now())
        .expect("fixture response has rows")
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
