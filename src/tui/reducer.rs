use tracing::debug;

use super::action::Action;
use super::effects::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_data_loading, reduce_navigation, reduce_presentation};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// This function is PURE - no side effects, no I/O, no async.
/// All side effects are returned as `Effect` to be executed separately.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // Data loading actions
    let state = match reduce_data_loading(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Search and pagination actions
    let state = match reduce_presentation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Table navigation actions
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::Quit => {
            debug!("ACTION: Quit");
            (state, Effect::None)
        }
        _ => (state, Effect::None),
    }
}
