use std::time::SystemTime;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::presentation::PageSize;
use crate::ranking::Leaderboard;
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::AppState;

/// Handle all data loading actions (service responses)
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::RefreshData => Ok(handle_refresh_data(state)),
        Action::LeaderboardLoaded { seq, result } => {
            Ok(handle_leaderboard_loaded(state, *seq, result.clone()))
        }
        _ => Err(state),
    }
}

fn handle_refresh_data(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.data.fetch_seq += 1;
    new_state.data.loading = true;
    new_state.data.error = None;
    new_state.system.set_status_message("Loading leaderboard data...".to_string());

    let seq = new_state.data.fetch_seq;
    debug!("DATA: Requesting leaderboard (seq={})", seq);
    (new_state, Effect::FetchLeaderboard { seq })
}

fn handle_leaderboard_loaded(
    state: AppState,
    seq: u64,
    result: Result<Leaderboard, FetchError>,
) -> (AppState, Effect) {
    if seq != state.data.fetch_seq {
        debug!(
            "DATA: Dropping response seq={} (latest requested is {})",
            seq, state.data.fetch_seq
        );
        return (state, Effect::None);
    }

    let mut new_state = state;
    new_state.data.loading = false;

    match result {
        Ok(leaderboard) => {
            debug!("DATA: Loaded {} players", leaderboard.len());
            let first_load = !new_state.data.has_data;
            new_state.data.leaderboard = leaderboard;
            new_state.data.has_data = true;
            new_state.data.error = None;
            new_state.system.last_refresh = Some(SystemTime::now());
            new_state.system.reset_status_message();

            // "all" from the config can only be resolved once the length is known
            if first_load {
                let total = new_state.data.leaderboard.len();
                let configured = &new_state.system.config.default_page_size;
                if let Some(all @ PageSize::All(_)) = PageSize::parse(configured, total) {
                    new_state.presentation.page_size = all;
                }
            }

            // A shorter list can leave the current page past the end
            let total_pages = new_state.page_view().total_pages.max(1);
            if new_state.presentation.current_page > total_pages {
                debug!(
                    "DATA: Page {} no longer exists, showing page {}",
                    new_state.presentation.current_page, total_pages
                );
                new_state.presentation.set_page(total_pages);
            }

            let rows = new_state.page_view().rows.len();
            if new_state.ui.selected_row >= rows {
                new_state.ui.selected_row = rows.saturating_sub(1);
            }
        }
        Err(e) => {
            warn!("DATA: Failed to load leaderboard: {}", e);
            new_state.system.set_status_error_message(e.user_message().to_string());
            new_state.data.error = Some(e);
        }
    }

    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tui::testing::create_test_leaderboard;

    fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
        match reduce_data_loading(state, &action) {
            Ok(result) => result,
            Err(_) => panic!("action not handled: {:?}", action),
        }
    }

    fn loaded(seq: u64, count: usize) -> Action {
        Action::LeaderboardLoaded {
            seq,
            result: Ok(create_test_leaderboard(count)),
        }
    }

    #[test]
    fn test_refresh_increments_sequence_and_requests_fetch() {
        let (state, effect) = reduce(AppState::default(), Action::RefreshData);
        assert_eq!(state.data.fetch_seq, 1);
        assert!(state.data.loading);
        assert!(matches!(effect, Effect::FetchLeaderboard { seq: 1 }));

        let (state, effect) = reduce(state, Action::RefreshData);
        assert_eq!(state.data.fetch_seq, 2);
        assert!(matches!(effect, Effect::FetchLeaderboard { seq: 2 }));
    }

    #[test]
    fn test_loaded_replaces_leaderboard() {
        let (state, _) = reduce(AppState::default(), Action::RefreshData);
        let (state, _) = reduce(state, loaded(1, 40));
        assert!(state.data.has_data);
        assert!(!state.data.loading);
        assert_eq!(state.data.leaderboard.len(), 40);
        assert!(state.system.last_refresh.is_some());
        assert!(!state.system.status_is_error);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let (state, _) = reduce(AppState::default(), Action::RefreshData);
        let (state, _) = reduce(state, Action::RefreshData);

        // Newer request answers first
        let (state, _) = reduce(state, loaded(2, 40));
        // Older one arrives late and must not overwrite it
        let (state, _) = reduce(state, loaded(1, 5));
        assert_eq!(state.data.leaderboard.len(), 40);
    }

    #[test]
    fn test_stale_error_is_dropped() {
        let (state, _) = reduce(AppState::default(), Action::RefreshData);
        let (state, _) = reduce(state, Action::RefreshData);
        let (state, _) = reduce(
            state,
            Action::LeaderboardLoaded {
                seq: 1,
                result: Err(FetchError::Forbidden),
            },
        );
        assert!(state.data.error.is_none());
        assert!(state.data.loading);
    }

    #[test]
    fn test_error_keeps_previous_list() {
        let (state, _) = reduce(AppState::default(), Action::RefreshData);
        let (state, _) = reduce(state, loaded(1, 30));
        let (state, _) = reduce(state, Action::RefreshData);
        let (state, _) = reduce(
            state,
            Action::LeaderboardLoaded {
                seq: 2,
                result: Err(FetchError::Unauthorized),
            },
        );

        assert_eq!(state.data.error, Some(FetchError::Unauthorized));
        assert_eq!(state.data.leaderboard.len(), 30);
        assert!(state.system.status_is_error);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Authentication failed. Please check your bearer token.")
        );
    }

    #[test]
    fn test_retry_clears_error() {
        let mut state = AppState::default();
        state.data.error = Some(FetchError::Network("down".to_string()));
        let (state, _) = reduce(state, Action::RefreshData);
        assert!(state.data.error.is_none());
        assert!(state.data.loading);
    }

    #[test]
    fn test_refresh_keeps_search_and_page() {
        let (mut state, _) = reduce(AppState::default(), Action::RefreshData);
        state.presentation.set_search_term("a");
        state.presentation.set_page(2);
        let (state, _) = reduce(state, loaded(1, 100));
        assert_eq!(state.presentation.search_term, "a");
        assert_eq!(state.presentation.current_page, 2);
    }

    #[test]
    fn test_shrinking_refresh_clamps_page() {
        let (state, _) = reduce(AppState::default(), Action::RefreshData);
        let (mut state, _) = reduce(state, loaded(1, 120));
        state.presentation.set_page(5);
        state.ui.selected_row = 10;

        let (state, _) = reduce(state, Action::RefreshData);
        let (state, _) = reduce(state, loaded(2, 40));
        let view = state.page_view();
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.current_page, 2);
        assert_eq!(view.rows.len(), 15);
        assert_eq!(state.ui.selected_row, 10);

        // Nothing left to show: back to the first page
        let (state, _) = reduce(state, Action::RefreshData);
        let (state, _) = reduce(state, loaded(3, 0));
        assert_eq!(state.presentation.current_page, 1);
    }

    #[test]
    fn test_configured_all_resolves_on_first_load() {
        let config = Config {
            default_page_size: "all".to_string(),
            ..Config::default()
        };
        let (state, _) = reduce(AppState::new(config), Action::RefreshData);
        let (state, _) = reduce(state, loaded(1, 64));
        assert_eq!(state.presentation.page_size, PageSize::All(64));

        // Later refreshes keep the snapshot
        let (state, _) = reduce(state, Action::RefreshData);
        let (state, _) = reduce(state, loaded(2, 70));
        assert_eq!(state.presentation.page_size, PageSize::All(64));
    }

    #[test]
    fn test_selection_clamped_to_shorter_page() {
        let (mut state, _) = reduce(AppState::default(), Action::RefreshData);
        state.ui.selected_row = 20;
        let (state, _) = reduce(state, loaded(1, 5));
        assert_eq!(state.ui.selected_row, 4);
    }
}
