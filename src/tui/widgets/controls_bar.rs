/// ControlsBar widget - title, search box and page-size selector above the table
///
/// Three lines:
/// - Title with the "Last updated" label on the right
/// - Search input and rows-per-page setting
/// - Separator; doubled while the table is scrolled (sticky state)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

pub const TITLE: &str = "Football Predictions Leaderboard";

#[derive(Debug)]
pub struct ControlsBar<'a> {
    pub search_term: &'a str,
    /// Search box has keyboard focus
    pub searching: bool,
    pub page_size_label: String,
    pub is_sticky: bool,
    pub updated_label: Option<String>,
}

impl<'a> ControlsBar<'a> {
    fn search_text(&self, config: &DisplayConfig) -> String {
        let cursor = if self.searching {
            if config.use_unicode { "▏" } else { "_" }
        } else {
            ""
        };
        if self.search_term.is_empty() && !self.searching {
            "Search: (press / to search players)".to_string()
        } else {
            format!("Search: {}{}", self.search_term, cursor)
        }
    }
}

impl<'a> RenderableWidget for ControlsBar<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let title = if config.use_unicode { format!("⚽ {}", TITLE) } else { TITLE.to_string() };
        buf.set_stringn(area.x, area.y, &title, width, bold);
        if let Some(updated) = &self.updated_label {
            let label = format!("Last updated: {}", updated);
            let label_width = label.width();
            if label_width + title.width() + 2 <= width {
                let x = area.x + (width - label_width) as u16;
                buf.set_string(x, area.y, &label, Style::default().add_modifier(Modifier::DIM));
            }
        }

        if area.height < 2 {
            return;
        }
        let search_style = if self.searching {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default()
        };
        let search = self.search_text(config);
        let (x, _) = buf.set_stringn(area.x, area.y + 1, &search, width, search_style);
        let page_size = format!("   Show: {} per page (c)", self.page_size_label);
        let remaining = (area.x + area.width).saturating_sub(x) as usize;
        buf.set_stringn(x, area.y + 1, &page_size, remaining, Style::default());

        if area.height < 3 {
            return;
        }
        let (line, style) = if self.is_sticky {
            (&config.box_chars.double_horizontal, bold)
        } else {
            (&config.box_chars.horizontal, Style::default())
        };
        buf.set_string(area.x, area.y + 2, line.repeat(width), style);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(3)
    }
}
