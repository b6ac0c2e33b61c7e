/// LeaderboardTable widget - the ranked player table
///
/// Renders a header, a separator and the visible window of the current page:
/// - Rank (medal for the podium), player, points, correct predictions
/// - Distance to the leader and to the Top 100 cut
/// - A jump hint column while a search is active
///
/// The selected row carries the selector marker, the jumped-to row is
/// highlighted with the theme background.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use crate::config::DisplayConfig;
use crate::formatting::{fit_width, RowCells};
use crate::layout_constants::{ACTIONS_COL_WIDTH, COLUMN_GAP, SELECTOR_COL_WIDTH};
use crate::model::Player;
use crate::ranking::Leaderboard;
use crate::tui::widgets::RenderableWidget;

/// Lines above the first row: header + separator
pub const TABLE_CHROME_LINES: u16 = 2;

/// Widget for displaying one page of the leaderboard
#[derive(Debug)]
pub struct LeaderboardTable<'a> {
    pub rows: &'a [&'a Player],
    pub leaderboard: &'a Leaderboard,
    /// Index of the selected row within `rows`
    pub selected_row: Option<usize>,
    /// Id of the row highlighted by a jump
    pub highlighted_id: Option<&'a str>,
    /// First row of `rows` shown at the top of the body
    pub scroll_offset: usize,
    pub show_actions: bool,
    /// Shown instead of rows when the page is empty
    pub empty_message: &'a str,
}

impl<'a> LeaderboardTable<'a> {
    pub fn new(rows: &'a [&'a Player], leaderboard: &'a Leaderboard) -> Self {
        Self {
            rows,
            leaderboard,
            selected_row: None,
            highlighted_id: None,
            scroll_offset: 0,
            show_actions: false,
            empty_message: "No players found",
        }
    }

    /// Number of body rows that fit into `area`
    pub fn body_height(area: Rect) -> u16 {
        area.height.saturating_sub(TABLE_CHROME_LINES)
    }

    fn row_style(&self, index: usize, player: &Player, config: &DisplayConfig) -> Style {
        let mut style = Style::default();
        if self.highlighted_id == Some(player.id.as_str()) {
            style = style.bg(config.highlight_bg).add_modifier(Modifier::BOLD);
        }
        if self.selected_row == Some(index) {
            style = style.fg(config.selection_fg);
        }
        style
    }

    fn rank_style(&self, player: &Player, base: Style, config: &DisplayConfig) -> Style {
        if player.rank <= 3 {
            base.fg(config.leader_fg).add_modifier(Modifier::BOLD)
        } else {
            base
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let mut header = format!("{}{}", " ".repeat(SELECTOR_COL_WIDTH), RowCells::header().to_line());
        if self.show_actions {
            header.push_str(&" ".repeat(COLUMN_GAP));
            header.push_str(&fit_width("Actions", ACTIONS_COL_WIDTH, false));
        }
        let bold = Style::default().add_modifier(Modifier::BOLD);
        buf.set_stringn(area.x, area.y, &header, area.width as usize, bold);

        if area.height > 1 {
            let separator = config.box_chars.horizontal.repeat(area.width as usize);
            buf.set_string(area.x, area.y + 1, &separator, Style::default());
        }
    }

    fn render_row(&self, index: usize, player: &Player, x: u16, y: u16, width: u16, buf: &mut Buffer, config: &DisplayConfig) {
        let style = self.row_style(index, player, config);
        let right = x + width;

        // Fill first so the highlight spans the whole line
        buf.set_string(x, y, " ".repeat(width as usize), style);

        let selector = if self.selected_row == Some(index) {
            config.box_chars.selector.as_str()
        } else {
            ""
        };
        buf.set_string(x, y, fit_width(selector, SELECTOR_COL_WIDTH, false), style);

        let metrics = self.leaderboard.metrics_for(player);
        let columns = RowCells::new(player, &metrics, config.use_unicode).columns();
        let mut col_x = x + SELECTOR_COL_WIDTH as u16;
        for (i, text) in columns.iter().enumerate() {
            if col_x >= right {
                return;
            }
            let cell_style = if i == 0 { self.rank_style(player, style, config) } else { style };
            let (next_x, _) = buf.set_stringn(col_x, y, text, (right - col_x) as usize, cell_style);
            col_x = next_x + COLUMN_GAP as u16;
        }

        if self.show_actions && col_x < right {
            let hint = if config.use_unicode { "↵ Jump" } else { "> Jump" };
            let hint = fit_width(hint, ACTIONS_COL_WIDTH, false);
            buf.set_stringn(col_x, y, hint, (right - col_x) as usize, style.add_modifier(Modifier::DIM));
        }
    }
}

impl<'a> RenderableWidget for LeaderboardTable<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.render_header(area, buf, config);

        let body_y = area.y + TABLE_CHROME_LINES;
        let body_height = Self::body_height(area) as usize;
        if body_height == 0 {
            return;
        }

        if self.rows.is_empty() {
            buf.set_stringn(area.x + SELECTOR_COL_WIDTH as u16, body_y, self.empty_message, area.width as usize, Style::default());
            return;
        }

        let visible = self.rows.iter().enumerate().skip(self.scroll_offset).take(body_height);
        for (line, (index, player)) in visible.enumerate() {
            self.render_row(index, player, area.x, body_y + line as u16, area.width, buf, config);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(TABLE_CHROME_LINES + self.rows.len() as u16)
    }
}
