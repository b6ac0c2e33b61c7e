use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};

use crate::commands::parse_page_size;
use crate::config::DisplayConfig;
use crate::data_provider::{load_leaderboard, LeaderboardProvider};
use crate::formatting::{format_header, format_time_ago, RowCells};
use crate::layout_constants::TABLE_WIDTH;
use crate::presentation::PresentationState;
use crate::ranking::{Leaderboard, LeaderboardStats};

const TITLE: &str = "Football Predictions Leaderboard";

/// Render one page of the leaderboard as plain text
///
/// The output mirrors the interactive screen: title, table, pagination info
/// and the stats summary.
pub fn format_leaderboard(
    board: &Leaderboard,
    presentation: &PresentationState,
    display: &DisplayConfig,
    now: DateTime<Utc>,
) -> String {
    let mut output = String::new();
    output.push_str(&format_header(TITLE, true, display));
    if let Some(updated) = board.updated_at {
        output.push_str(&format!("Last updated: {}\n", format_time_ago(updated, now)));
    }
    if !presentation.search_term.is_empty() {
        output.push_str(&format!("Search: {}\n", presentation.search_term));
    }
    output.push('\n');

    let view = presentation.page_view(&board.players);
    output.push_str(RowCells::header().to_line().trim_end());
    output.push('\n');
    output.push_str(&display.box_chars.horizontal.repeat(TABLE_WIDTH));
    output.push('\n');

    if view.rows.is_empty() {
        if presentation.search_term.is_empty() {
            output.push_str("No players found\n");
        } else {
            output.push_str(&format!("No players match \"{}\"\n", presentation.search_term));
        }
    }
    for player in &view.rows {
        let cells = RowCells::new(player, &board.metrics_for(player), display.use_unicode);
        output.push_str(cells.to_line().trim_end());
        output.push('\n');
    }
    output.push('\n');

    match view.showing_range() {
        Some((first, last)) => output.push_str(&format!(
            "Showing {} to {} of {} players (page {} of {})\n",
            first, last, view.total_filtered, view.current_page, view.total_pages
        )),
        None => output.push_str("Showing 0 players\n"),
    }

    let stats = LeaderboardStats::compute(&board.players, view.total_filtered);
    let separator = format!(" {} ", display.box_chars.vertical);
    let summary = [
        format!("Total Players: {}", stats.total_players),
        format!("Top Score: {}", stats.top_score),
        format!("Average Points: {}", stats.average_points),
        format!("Filtered Results: {}", stats.filtered_results),
    ]
    .join(&separator);
    output.push_str(&summary);
    output.push('\n');

    output
}

/// Presentation state for the command-line options
pub fn resolve_presentation(
    board: &Leaderboard,
    search: Option<String>,
    page: u32,
    per_page: &str,
) -> Result<PresentationState> {
    let mut presentation = PresentationState::with_page_size(parse_page_size(per_page, board.len())?);
    if let Some(term) = search {
        presentation.set_search_term(term);
    }

    let total_pages = presentation.page_view(&board.players).total_pages;
    if page == 0 || (total_pages > 0 && page > total_pages) {
        bail!("Page {} is out of range (1-{})", page, total_pages.max(1));
    }
    presentation.set_page(page);
    Ok(presentation)
}

pub async fn run(
    provider: &dyn LeaderboardProvider,
    search: Option<String>,
    page: u32,
    per_page: String,
    display: &DisplayConfig,
) -> Result<()> {
    let board = load_leaderboard(provider)
        .await
        .context("Failed to fetch leaderboard")?;

    let presentation = resolve_presentation(&board, search, page, &per_page)?;
    let output = format_leaderboard(&board, &presentation, display, Utc::now());
    print!("{}", output);

    Ok(())
}
