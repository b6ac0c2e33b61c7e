/// Screen composition
///
/// Lays the widgets out top to bottom and reports back what was drawn so the
/// runtime can complete pending jumps against the real frame.
use chrono::Utc;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
};

use crate::formatting::format_time_ago;
use crate::ranking::LeaderboardStats;

use super::state::{AppState, InputMode};
use super::widgets::{
    ControlsBar, KeyHint, KeyHintStyle, LeaderboardTable, PaginationBar, RenderableWidget, StatsPanel, StatusBar,
};

/// What a drawn frame contained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Ids of every row bound to the table, in display order
    pub row_ids: Vec<String>,
    /// Table body height in rows
    pub viewport_rows: u16,
}

fn key_hints(state: &AppState) -> Vec<KeyHint> {
    if state.ui.input_mode == InputMode::Search {
        return vec![
            KeyHint::new("Enter", "Done"),
            KeyHint::new("Ctrl-U", "Clear"),
        ];
    }

    let mut hints = Vec::new();
    if state.presentation.show_go_to_top {
        hints.push(KeyHint::with_style("g", "Go to top", KeyHintStyle::Important));
    }
    hints.push(KeyHint::new("/", "Search"));
    hints.push(KeyHint::new("c", "Size"));
    let arrows = if state.system.config.use_unicode { "←→" } else { "</>" };
    hints.push(KeyHint::new(arrows, "Page"));
    hints.push(KeyHint::new("Enter", "Jump"));
    if state.data.error.is_some() {
        hints.push(KeyHint::with_style("r", "Retry", KeyHintStyle::Important));
    } else {
        hints.push(KeyHint::new("r", "Refresh"));
    }
    hints.push(KeyHint::new("q", "Quit"));
    hints
}

fn render_error_banner(state: &AppState, area: Rect, buf: &mut Buffer) {
    let Some(error) = &state.data.error else {
        return;
    };
    let config = state.system.config.display();
    let icon = if config.use_unicode { "⚠ " } else { "! " };
    let text = format!("{}{} Press r to retry.", icon, error.user_message());
    let style = Style::default().fg(config.error_fg).add_modifier(Modifier::BOLD);
    buf.set_stringn(area.x, area.y, text, area.width as usize, style);
}

/// Draw the whole screen for `state` into `buf`
pub fn render(state: &AppState, area: Rect, buf: &mut Buffer) -> RenderedFrame {
    let config = state.system.config.display();
    let view = state.page_view();
    let has_error = state.data.error.is_some();

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(if has_error { 1 } else { 0 }),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .split(area);

    let controls = ControlsBar {
        search_term: &state.presentation.search_term,
        searching: state.ui.input_mode == InputMode::Search,
        page_size_label: state.presentation.page_size.label(),
        is_sticky: state.presentation.is_sticky,
        updated_label: state
            .data
            .leaderboard
            .updated_at
            .filter(|_| state.data.has_data)
            .map(|updated| format_time_ago(updated, Utc::now())),
    };
    controls.render(chunks[0], buf, &config);

    render_error_banner(state, chunks[1], buf);

    let empty_message = if state.data.loading && !state.data.has_data {
        "Loading leaderboard data...".to_string()
    } else if !state.data.has_data {
        "No leaderboard data".to_string()
    } else if state.presentation.search_term.is_empty() {
        "No players found".to_string()
    } else {
        format!("No players match \"{}\"", state.presentation.search_term)
    };
    let table = LeaderboardTable {
        rows: &view.rows,
        leaderboard: &state.data.leaderboard,
        selected_row: Some(state.ui.selected_row),
        highlighted_id: state.ui.jump.highlighted(),
        scroll_offset: state.ui.scroll.offset,
        show_actions: !state.presentation.search_term.is_empty(),
        empty_message: &empty_message,
    };
    table.render(chunks[2], buf, &config);

    if state.data.has_data {
        let total_players = state.data.leaderboard.len();
        let show_controls = state.presentation.pagination_visible(total_players);
        PaginationBar::from_view(&view, show_controls).render(chunks[3], buf, &config);

        let stats = LeaderboardStats::compute(&state.data.leaderboard.players, view.total_filtered);
        StatsPanel { stats }.render(chunks[4], buf, &config);
    }

    let mut status = StatusBar::new().with_hints(key_hints(state));
    if let Some(message) = &state.system.status_message {
        status = if state.system.status_is_error {
            status.with_error(message.clone())
        } else {
            status.with_status(message.clone())
        };
    }
    status.render(chunks[5], buf, &config);

    RenderedFrame {
        row_ids: view.row_ids(),
        viewport_rows: LeaderboardTable::body_height(chunks[2]),
    }
}
