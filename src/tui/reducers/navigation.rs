use tracing::{debug, trace};

use crate::tui::action::Action;
use crate::tui::effects::{highlight_timer, Effect};
use crate::tui::state::{centered_offset, AppState};

/// Handle table selection, scrolling and jump-to-player
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SelectNext => Ok(select_next(state)),
        Action::SelectPrevious => Ok(select_previous(state)),
        Action::GoToTop => Ok(go_to_top(state)),
        Action::JumpToSelected => Ok(jump_to_selected(state)),
        Action::JumpToPlayer(id) => Ok(jump_to_player(state, id.clone())),
        Action::ViewRendered { row_ids, viewport_rows } => {
            Ok(view_rendered(state, row_ids, *viewport_rows))
        }
        Action::HighlightExpired(generation) => Ok(highlight_expired(state, *generation)),
        Action::Tick => Ok(tick(state)),
        _ => Err(state),
    }
}

fn select_next(state: AppState) -> (AppState, Effect) {
    let rows = state.page_view().rows.len();
    let mut new_state = state;
    if new_state.ui.selected_row + 1 < rows {
        new_state.ui.selected_row += 1;
    }
    keep_selection_visible(&mut new_state);
    (new_state, Effect::None)
}

fn select_previous(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.ui.selected_row = new_state.ui.selected_row.saturating_sub(1);
    keep_selection_visible(&mut new_state);
    (new_state, Effect::None)
}

/// Scroll by the minimum amount that brings the selected row into view
fn keep_selection_visible(state: &mut AppState) {
    let viewport = state.ui.viewport_rows.max(1) as usize;
    let selected = state.ui.selected_row;
    let offset = state.ui.scroll.target;
    if selected < offset {
        state.ui.scroll.jump_to(selected);
    } else if selected >= offset + viewport {
        state.ui.scroll.jump_to(selected + 1 - viewport);
    }
    state.sync_scroll_signals();
}

fn go_to_top(state: AppState) -> (AppState, Effect) {
    trace!("ACTION: Scrolling to top");
    let mut new_state = state;
    new_state.ui.selected_row = 0;
    new_state.ui.scroll.scroll_to(0);
    (new_state, Effect::None)
}

fn jump_to_selected(state: AppState) -> (AppState, Effect) {
    match state.selected_player_id() {
        Some(id) => jump_to_player(state, id),
        None => (state, Effect::None),
    }
}

fn jump_to_player(state: AppState, player_id: String) -> (AppState, Effect) {
    debug!("ACTION: Jump to player {}", player_id);
    let mut new_state = state;
    let total = new_state.data.leaderboard.len();
    new_state.ui.jump.request(player_id, &mut new_state.presentation, total);
    (new_state, Effect::None)
}

fn view_rendered(state: AppState, row_ids: &[String], viewport_rows: u16) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.ui.viewport_rows = viewport_rows;

    let Some(target) = new_state.ui.jump.on_rendered(row_ids) else {
        return (new_state, Effect::None);
    };

    let offset = centered_offset(target.row_index, viewport_rows as usize, row_ids.len());
    debug!(
        "ACTION: Jump target {} at row {}, scrolling to {}",
        target.player_id, target.row_index, offset
    );
    new_state.ui.selected_row = target.row_index;
    new_state.ui.scroll.scroll_to(offset);
    (new_state, highlight_timer(target.generation))
}

fn highlight_expired(state: AppState, generation: u64) -> (AppState, Effect) {
    let mut new_state = state;
    if new_state.ui.jump.expire(generation) {
        trace!("ACTION: Highlight {} expired", generation);
    }
    (new_state, Effect::None)
}

fn tick(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    if new_state.ui.scroll.tick() {
        new_state.sync_scroll_signals();
    }
    (new_state, Effect::None)
}
