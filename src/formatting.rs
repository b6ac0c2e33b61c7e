use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::config::DisplayConfig;
use crate::layout_constants::{
    COLUMN_GAP, LEADER_GAP_COL_WIDTH, PLAYER_COL_WIDTH, POINTS_COL_WIDTH, PREDICTIONS_COL_WIDTH,
    RANK_COL_WIDTH, TOP_ZONE_COL_WIDTH,
};
use crate::model::Player;
use crate::ranking::{LeaderGap, PlayerMetrics, TopZoneGap};

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub cross: String,
    pub selector: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            cross: "┼".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            cross: "+".to_string(),
            selector: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    let width = unicode_width::UnicodeWidthStr::width(text);
    format!("{}\n{}\n", text, separator_char.repeat(width))
}

const HOUR_SECS: i64 = 60 * 60;
const DAY_SECS: i64 = 24 * HOUR_SECS;

/// Units used by [`format_time_ago`], largest first
const TIME_UNITS: [(&str, i64); 4] = [
    ("year", 365 * DAY_SECS),
    ("month", 30 * DAY_SECS),
    ("day", DAY_SECS),
    ("hour", HOUR_SECS),
];

/// Human-readable age of `then` relative to `now`
///
/// Anything under an hour collapses to "less than 1 hour ago"; otherwise the
/// two largest non-zero units are shown, e.g. "3 days 5 hours ago".
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let mut seconds = (now - then).num_seconds().max(0);
    if seconds < HOUR_SECS {
        return "less than 1 hour ago".to_string();
    }

    let mut parts = Vec::with_capacity(2);
    for (name, unit_secs) in TIME_UNITS {
        if parts.len() >= 2 {
            break;
        }
        if seconds >= unit_secs {
            let qty = seconds / unit_secs;
            let suffix = if qty == 1 { "" } else { "s" };
            parts.push(format!("{} {}{}", qty, name, suffix));
            seconds -= qty * unit_secs;
        }
    }

    format!("{} ago", parts.join(" "))
}

/// Parse the `updated` field of a leaderboard response
///
/// Accepts RFC 3339 strings, naive date-times (taken as UTC) and epoch milliseconds.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
                return Some(parsed.with_timezone(&Utc));
            }
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|naive| naive.and_utc())
        }
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            Utc.timestamp_millis_opt(millis).single()
        }
        _ => None,
    }
}

/// Pad or cut `text` to exactly `width` terminal columns
pub fn fit_width(text: &str, width: usize, align_right: bool) -> String {
    let mut fitted = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        fitted.push(c);
        used += w;
    }
    let padding = " ".repeat(width - used);
    if align_right {
        format!("{}{}", padding, fitted)
    } else {
        format!("{}{}", fitted, padding)
    }
}

/// Rank label: medals for the podium, `#N` for everyone else
pub fn rank_icon(rank: u32, use_unicode: bool) -> String {
    match (rank, use_unicode) {
        (1, true) => "🥇".to_string(),
        (2, true) => "🥈".to_string(),
        (3, true) => "🥉".to_string(),
        (1, false) => "1st".to_string(),
        (2, false) => "2nd".to_string(),
        (3, false) => "3rd".to_string(),
        (n, _) => format!("#{}", n),
    }
}

/// Text of the "To 1st" column
pub fn format_leader_gap(gap: LeaderGap, use_unicode: bool) -> String {
    match gap {
        LeaderGap::Leader if use_unicode => "🥇 Leader".to_string(),
        LeaderGap::Leader => "Leader".to_string(),
        LeaderGap::Behind(points) => format!("-{}", points),
    }
}

/// Text of the "To Top 100" column
pub fn format_top_zone_gap(gap: TopZoneGap) -> String {
    match gap {
        TopZoneGap::InTopZone => "Top 100".to_string(),
        TopZoneGap::Behind(points) => format!("-{}", points),
    }
}

/// Text of every column of one leaderboard row, before padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCells {
    pub rank: String,
    pub name: String,
    pub points: String,
    pub predictions: String,
    pub leader_gap: String,
    pub top_zone_gap: String,
}

impl RowCells {
    pub fn new(player: &Player, metrics: &PlayerMetrics, use_unicode: bool) -> Self {
        Self {
            rank: rank_icon(player.rank, use_unicode),
            name: player.name.clone(),
            points: player.points.to_string(),
            predictions: format!("{}/{}", player.correct_predictions, player.total_predictions),
            leader_gap: format_leader_gap(metrics.leader_gap, use_unicode),
            top_zone_gap: format_top_zone_gap(metrics.top_zone_gap),
        }
    }

    pub fn header() -> Self {
        Self {
            rank: "Rank".to_string(),
            name: "Player".to_string(),
            points: "Points".to_string(),
            predictions: "Correct".to_string(),
            leader_gap: "To 1st".to_string(),
            top_zone_gap: "To Top 100".to_string(),
        }
    }

    /// Padded columns in display order
    pub fn columns(&self) -> [String; 6] {
        [
            fit_width(&self.rank, RANK_COL_WIDTH, false),
            fit_width(&self.name, PLAYER_COL_WIDTH, false),
            fit_width(&self.points, POINTS_COL_WIDTH, true),
            fit_width(&self.predictions, PREDICTIONS_COL_WIDTH, true),
            fit_width(&self.leader_gap, LEADER_GAP_COL_WIDTH, true),
            fit_width(&self.top_zone_gap, TOP_ZONE_COL_WIDTH, true),
        ]
    }

    pub fn to_line(&self) -> String {
        self.columns().join(&" ".repeat(COLUMN_GAP))
    }
}
