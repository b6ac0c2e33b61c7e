/// PaginationBar widget - "Showing X to Y of Z players" and the page controls

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::presentation::{PageControl, PageView};
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct PaginationBar {
    /// 1-based bounds of the visible rows
    pub range: Option<(usize, usize)>,
    pub total_filtered: usize,
    /// Empty when the page size covers every player
    pub controls: Vec<PageControl>,
}

impl PaginationBar {
    pub fn from_view(view: &PageView<'_>, show_controls: bool) -> Self {
        Self {
            range: view.showing_range(),
            total_filtered: view.total_filtered,
            controls: if show_controls { view.controls() } else { Vec::new() },
        }
    }

    pub fn info_text(&self) -> String {
        match self.range {
            Some((first, last)) => format!("Showing {} to {} of {} players", first, last, self.total_filtered),
            None => "Showing 0 players".to_string(),
        }
    }

    fn control_segments(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let (prev, next) = if config.use_unicode {
            ("← Previous", "Next →")
        } else {
            ("< Previous", "Next >")
        };
        self.controls
            .iter()
            .map(|control| match control {
                PageControl::Previous(_) => (prev.to_string(), Style::default()),
                PageControl::Next(_) => (next.to_string(), Style::default()),
                PageControl::Page { number, active: true } => (
                    format!("[{}]", number),
                    Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD),
                ),
                PageControl::Page { number, active: false } => (number.to_string(), Style::default()),
            })
            .collect()
    }
}

impl RenderableWidget for PaginationBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let info = self.info_text();
        buf.set_stringn(area.x, area.y, &info, area.width as usize, Style::default());

        let segments = self.control_segments(config);
        if segments.is_empty() {
            return;
        }
        let total_width: usize = segments.iter().map(|(s, _)| s.width()).sum::<usize>() + segments.len() - 1;
        if info.width() + total_width + 2 > area.width as usize {
            return;
        }

        let mut x = area.x + area.width - total_width as u16;
        for (i, (text, style)) in segments.iter().enumerate() {
            if i > 0 {
                x += 1;
            }
            buf.set_string(x, area.y, text, *style);
            x += text.width() as u16;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
