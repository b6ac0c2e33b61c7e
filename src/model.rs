/// Data types shared between the fetch layer, the ranking engine and the views
use serde::Deserialize;
use serde_json::{Map, Value};

/// Untyped row as sent by the scoring service
///
/// Field names are not fixed upstream (`name`/`username`, `points`/`score`, ...),
/// so rows stay as raw JSON objects until the normalizer reads them.
pub type RawRow = Map<String, Value>;

/// Canonical player record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub points: i64,
    pub correct_predictions: i64,
    pub total_predictions: i64,
    /// Dense 1-based rank, assigned by the ranking engine
    pub rank: u32,
}

/// Body of `GET <base>/points`
///
/// `rows` is optional at the type level so that a missing field can be reported
/// as a fetch failure instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardResponse {
    #[serde(default)]
    pub updated: Option<Value>,
    #[serde(default)]
    pub rows: Option<Vec<Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_rows_and_updated() {
        let json = r#"{"updated": "2025-06-01T12:00:00Z", "rows": [{"name": "a"}]}"#;
        let response: LeaderboardResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.rows.map(|r| r.len()), Some(1));
        assert!(response.updated.is_some());
    }

    #[test]
    fn test_response_without_rows() {
        let response: LeaderboardResponse = serde_json::from_str("{}").unwrap();
        assert!(response.rows.is_none());
        assert!(response.updated.is_none());
    }
}
