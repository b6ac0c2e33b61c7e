use tracing::debug;

use crate::presentation::PageSize;
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::{AppState, InputMode};

/// Handle search, pagination and page-size actions
///
/// Every change of the visible slice puts the table back at its first row.
pub fn reduce_presentation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::EnterSearchMode => Ok(set_input_mode(state, InputMode::Search)),
        Action::ExitSearchMode => Ok(set_input_mode(state, InputMode::Browse)),
        Action::SearchInput(c) => Ok(update_view(state, |s| s.presentation.push_search_char(*c))),
        Action::SearchBackspace => Ok(update_view(state, |s| s.presentation.pop_search_char())),
        Action::ClearSearch => Ok(update_view(state, |s| s.presentation.set_search_term(""))),
        Action::NextPage => Ok(next_page(state)),
        Action::PreviousPage => Ok(previous_page(state)),
        Action::GoToPage(page) => Ok(go_to_page(state, *page)),
        Action::CyclePageSize => {
            let total = state.data.leaderboard.len();
            let next = state.presentation.page_size.cycle(total);
            Ok(set_page_size(state, next))
        }
        Action::SetPageSize(page_size) => Ok(set_page_size(state, *page_size)),
        _ => Err(state),
    }
}

fn set_input_mode(state: AppState, mode: InputMode) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.ui.input_mode = mode;
    (new_state, Effect::None)
}

fn update_view(state: AppState, f: impl FnOnce(&mut AppState)) -> (AppState, Effect) {
    let mut new_state = state;
    f(&mut new_state);
    new_state.reset_table_position();
    (new_state, Effect::None)
}

fn next_page(state: AppState) -> (AppState, Effect) {
    let total_pages = state.page_view().total_pages;
    if state.presentation.current_page >= total_pages {
        return (state, Effect::None);
    }
    let page = state.presentation.current_page + 1;
    update_view(state, |s| s.presentation.set_page(page))
}

fn previous_page(state: AppState) -> (AppState, Effect) {
    if state.presentation.current_page <= 1 {
        return (state, Effect::None);
    }
    let page = state.presentation.current_page - 1;
    update_view(state, |s| s.presentation.set_page(page))
}

fn go_to_page(state: AppState, page: u32) -> (AppState, Effect) {
    let total_pages = state.page_view().total_pages;
    if page == 0 || page > total_pages || page == state.presentation.current_page {
        return (state, Effect::None);
    }
    update_view(state, |s| s.presentation.set_page(page))
}

fn set_page_size(state: AppState, page_size: PageSize) -> (AppState, Effect) {
    debug!("ACTION: Page size -> {}", page_size.label());
    update_view(state, |s| s.presentation.set_page_size(page_size))
}
