/// StatsPanel widget - aggregate figures below the table

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use crate::config::DisplayConfig;
use crate::ranking::LeaderboardStats;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct StatsPanel {
    pub stats: LeaderboardStats,
}

impl StatsPanel {
    pub fn entries(&self) -> [(&'static str, String); 4] {
        [
            ("Total Players", self.stats.total_players.to_string()),
            ("Top Score", self.stats.top_score.to_string()),
            ("Average Points", self.stats.average_points.to_string()),
            ("Filtered Results", self.stats.filtered_results.to_string()),
        ]
    }
}

impl RenderableWidget for StatsPanel {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let right = area.x + area.width;
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut x = area.x;
        for (i, (label, value)) in self.entries().iter().enumerate() {
            if i > 0 {
                x = buf.set_stringn(x, area.y, &separator, right.saturating_sub(x) as usize, Style::default()).0;
            }
            x = buf.set_stringn(x, area.y, format!("{}: ", label), right.saturating_sub(x) as usize, Style::default()).0;
            x = buf
                .set_stringn(
                    x,
                    area.y,
                    value,
                    right.saturating_sub(x) as usize,
                    Style::default().add_modifier(Modifier::BOLD),
                )
                .0;
            if x >= right {
                break;
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
