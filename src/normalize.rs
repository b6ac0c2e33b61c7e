/// Conversion of raw service rows into canonical players
///
/// Every field is looked up under its primary name first and then under its
/// alias. Values that are missing, empty, zero or not numeric fall through to
/// the next candidate and finally to a default, so a single odd row never
/// fails the whole fetch.
use serde_json::Value;

use crate::model::{Player, RawRow};

const ID_KEYS: &[&str] = &["id"];
const NAME_KEYS: &[&str] = &["name", "username"];
const POINTS_KEYS: &[&str] = &["points", "score"];
const CORRECT_KEYS: &[&str] = &["correctPredictions", "correct"];
const TOTAL_KEYS: &[&str] = &["totalPredictions", "total"];

/// Normalize a single row at position `index` of the response
pub fn normalize_row(row: &RawRow, index: usize) -> Player {
    Player {
        id: first_text(row, ID_KEYS).unwrap_or_else(|| format!("player-{}", index)),
        name: first_text(row, NAME_KEYS).unwrap_or_else(|| format!("Player {}", index + 1)),
        points: first_int(row, POINTS_KEYS),
        correct_predictions: first_int(row, CORRECT_KEYS),
        total_predictions: first_int(row, TOTAL_KEYS),
        rank: (index + 1) as u32,
    }
}

/// Normalize every value of the `rows` array
///
/// Non-object entries are treated as empty rows.
pub fn normalize_rows(rows: &[Value]) -> Vec<Player> {
    let empty = RawRow::new();
    rows.iter()
        .enumerate()
        .map(|(index, value)| normalize_row(value.as_object().unwrap_or(&empty), index))
        .collect()
}

fn first_text(row: &RawRow, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match row.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

fn first_int(row: &RawRow, keys: &[&str]) -> i64 {
    keys.iter()
        .find_map(|key| row.get(*key).and_then(coerce_int).filter(|v| *v != 0))
        .unwrap_or(0)
}

/// Coerce a JSON value to an integer, truncating fractions
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}
