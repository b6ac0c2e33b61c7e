/// Mock fixture data for testing and development
///
/// This module provides deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app without the scoring service
/// 3. Benchmarks - providing consistent data for performance testing
///
/// Rows deliberately mix the primary and alias field names the service uses.
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::model::LeaderboardResponse;

const NAMES: [&str; 12] = [
    "kurt0411", "goalmachine", "offside_oli", "nutmeg", "parkbus", "tikitaka",
    "var_victim", "extratime", "cleansheet", "hattrick_hana", "bicyclekick", "zonal",
];

/// Build `count` raw rows with descending-ish, partly tied scores
pub fn create_mock_rows(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let name = format!("{}{}", NAMES[i % NAMES.len()], i / NAMES.len());
            // Every fifth player ties with the previous one
            let points = (count - i + (i % 5 == 4) as usize) as i64 * 3;
            let total = 40 + (i % 7) as i64;
            if i % 3 == 0 {
                json!({
                    "id": format!("u{}", i),
                    "username": name,
                    "score": points,
                    "correct": total / 2,
                    "total": total,
                })
            } else {
                json!({
                    "id": format!("u{}", i),
                    "name": name,
                    "points": points,
                    "correctPredictions": total / 3,
                    "totalPredictions": total,
                })
            }
        })
        .collect()
}

/// Full service response with `count` rows, updated a few hours before `now`
pub fn create_mock_response(count: usize, now: DateTime<Utc>) -> LeaderboardResponse {
    let updated = now - Duration::hours(5) - Duration::minutes(20);
    LeaderboardResponse {
        updated: Some(json!(updated.to_rfc3339())),
        rows: Some(create_mock_rows(count)),
    }
}

/// Response built from explicit `(name, points)` pairs
pub fn create_named_response(players: &[(&str, i64)]) -> LeaderboardResponse {
    let rows = players
        .iter()
        .enumerate()
        .map(|(i, (name, points))| json!({"id": format!("id-{}", i), "name": name, "points": points}))
        .collect();
    LeaderboardResponse {
        updated: None,
        rows: Some(rows),
    }
}
