use std::time::SystemTime;

use crate::config::Config;
use crate::error::FetchError;
use crate::presentation::{JumpNavigator, PageSize, PageView, PresentationState, ROW_HEIGHT_PX};
use crate::ranking::Leaderboard;

use super::constants::{DEFAULT_STATUS_MESSAGE, DEFAULT_VIEWPORT_ROWS, TABLE_TOP_OFFSET_PX};

/// Root application state - single source of truth
///
/// This is the entire application state in one place.
/// All state changes happen through the reducer.
/// Widgets receive slices of this state when rendering.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Leaderboard data (from the scoring service)
    pub data: DataState,

    /// Search and pagination
    pub presentation: PresentationState,

    /// Table selection, scrolling and jump navigation
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    /// Latest accepted snapshot; players are behind an Arc so cloning is cheap
    pub leaderboard: Leaderboard,
    /// True once any fetch has succeeded
    pub has_data: bool,
    pub loading: bool,
    pub error: Option<FetchError>,
    /// Sequence number of the most recently requested fetch
    pub fetch_seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub input_mode: InputMode,
    /// Selected row within the current page
    pub selected_row: usize,
    pub scroll: TableScroll,
    pub jump: JumpNavigator,
    /// Table body height reported by the last frame
    pub viewport_rows: u16,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Browse,
            selected_row: 0,
            scroll: TableScroll::default(),
            jump: JumpNavigator::default(),
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
        }
    }
}

/// Row offset of the table body with eased motion towards a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableScroll {
    pub offset: usize,
    pub target: usize,
}

impl TableScroll {
    /// Start a smooth scroll towards `target`
    pub fn scroll_to(&mut self, target: usize) {
        self.target = target;
    }

    /// Move immediately, no animation
    pub fn jump_to(&mut self, offset: usize) {
        self.offset = offset;
        self.target = offset;
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    /// Advance one animation step: half the remaining distance, at least one row
    ///
    /// Returns true if the offset changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        let distance = self.offset.abs_diff(self.target);
        let step = (distance / 2).max(1);
        if self.target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        true
    }

    /// Scrolled distance expressed in virtual pixels
    pub fn vertical_offset_px(&self) -> u32 {
        (self.offset as u32).saturating_mul(ROW_HEIGHT_PX)
    }
}

/// Offset that puts `row` in the middle of a `viewport`-row window
pub fn centered_offset(row: usize, viewport: usize, total_rows: usize) -> usize {
    row.saturating_sub(viewport / 2)
        .min(total_rows.saturating_sub(viewport))
}

#[derive(Debug, Clone)]
pub struct SystemState {
    pub last_refresh: Option<SystemTime>,
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            last_refresh: None,
            config: Config::default(),
            status_message: Some(DEFAULT_STATUS_MESSAGE.to_string()),
            status_is_error: false,
        }
    }
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

impl AppState {
    /// Initial state for a session using `config`
    pub fn new(config: Config) -> Self {
        let page_size = PageSize::parse(&config.default_page_size, 0).unwrap_or_default();
        Self {
            presentation: PresentationState::with_page_size(page_size),
            system: SystemState {
                config,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Current page of the canonical list
    pub fn page_view(&self) -> PageView<'_> {
        self.presentation.page_view(&self.data.leaderboard.players)
    }

    /// Id of the player under the selection cursor
    pub fn selected_player_id(&self) -> Option<String> {
        self.page_view()
            .rows
            .get(self.ui.selected_row)
            .map(|p| p.id.clone())
    }

    /// Recompute sticky/go-to-top flags from the current scroll offset
    pub fn sync_scroll_signals(&mut self) {
        let offset = self.ui.scroll.vertical_offset_px();
        self.presentation.update_scroll(offset, TABLE_TOP_OFFSET_PX);
    }

    /// Put selection and scroll back at the top of the table
    pub fn reset_table_position(&mut self) {
        self.ui.selected_row = 0;
        self.ui.scroll.jump_to(0);
        self.sync_scroll_signals();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_status_message() {
        let mut state = SystemState::default();
        state.set_status_message("Test message".to_string());
        assert_eq!(state.status_message, Some("Test message".to_string()));
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_set_status_message_overwrites_error_flag() {
        let mut state = SystemState::default();
        state.set_status_error_message("Error".to_string());
        assert!(state.status_is_error);

        state.set_status_message("Normal message".to_string());
        assert_eq!(state.status_message, Some("Normal message".to_string()));
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_reset_status_message() {
        let mut state = SystemState::default();
        state.set_status_error_message("Custom message".to_string());
        state.reset_status_message();
        assert_eq!(state.status_message, Some(DEFAULT_STATUS_MESSAGE.to_string()));
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_initial_page_size_from_config() {
        let config = Config {
            default_page_size: "100".to_string(),
            ..Config::default()
        };
        let state = AppState::new(config);
        assert_eq!(state.presentation.page_size, PageSize::Hundred);

        let config = Config {
            default_page_size: "bogus".to_string(),
            ..Config::default()
        };
        assert_eq!(AppState::new(config).presentation.page_size, PageSize::TwentyFive);
    }

    #[test]
    fn test_table_scroll_eases_to_target() {
        let mut scroll = TableScroll::default();
        scroll.scroll_to(10);
        assert!(scroll.is_animating());

        let mut offsets = Vec::new();
        while scroll.tick() {
            offsets.push(scroll.offset);
        }
        assert_eq!(offsets, vec![5, 7, 8, 9, 10]);
        assert!(!scroll.is_animating());

        scroll.scroll_to(0);
        while scroll.tick() {}
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_vertical_offset_px() {
        let mut scroll = TableScroll::default();
        scroll.jump_to(3);
        assert_eq!(scroll.vertical_offset_px(), 3 * ROW_HEIGHT_PX);
    }

    #[test]
    fn test_centered_offset() {
        assert_eq!(centered_offset(50, 10, 200), 45);
        assert_eq!(centered_offset(2, 10, 200), 0);
        // Never scrolls past the last full window
        assert_eq!(centered_offset(198, 10, 200), 190);
        // Short lists do not scroll at all
        assert_eq!(centered_offset(3, 10, 5), 0);
    }

    #[test]
    fn test_reset_table_position_clears_scroll_signals() {
        let mut state = AppState::default();
        state.ui.selected_row = 40;
        state.ui.scroll.jump_to(40);
        state.sync_scroll_signals();
        assert!(state.presentation.is_sticky);
        assert!(state.presentation.show_go_to_top);

        state.reset_table_position();
        assert_eq!(state.ui.selected_row, 0);
        assert!(!state.presentation.is_sticky);
        assert!(!state.presentation.show_go_to_top);
    }
}
