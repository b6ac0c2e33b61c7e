/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// Keys are interpreted according to the current input mode.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use super::action::Action;
use super::state::{AppState, InputMode};

/// Handle ESC key with priority-based fallback
fn handle_esc_key(state: &AppState) -> Option<Action> {
    // Priority 1: An active search is cleared first
    if !state.presentation.search_term.is_empty() {
        debug!("KEY: ESC pressed with active search - clearing");
        return Some(Action::ClearSearch);
    }

    // Priority 2: Nothing left to undo, quit
    debug!("KEY: ESC pressed at top level - quitting");
    Some(Action::Quit)
}

/// Keys while typing into the search box
fn handle_search_mode_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => Some(Action::ExitSearchMode),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::ClearSearch),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

/// Keys while browsing the table
fn handle_browse_mode_keys(key: KeyEvent, state: &AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Esc => handle_esc_key(state),
        KeyCode::Char('/') | KeyCode::Char('s') => Some(Action::EnterSearchMode),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::RefreshData),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::PageDown => Some(Action::NextPage),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::PageUp => Some(Action::PreviousPage),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(Action::GoToPage),
        KeyCode::Char('c') => Some(Action::CyclePageSize),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::GoToTop),
        KeyCode::Enter => Some(Action::JumpToSelected),
        _ => None,
    }
}

/// Convert a key event into an action for the current state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} in {:?} mode", key.code, state.ui.input_mode);

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match state.ui.input_mode {
        InputMode::Search => handle_search_mode_keys(key),
        InputMode::Browse => handle_browse_mode_keys(key, state),
    }
}
