/// Widget-based rendering infrastructure for TUI
///
/// This module provides a trait-based architecture for composable, testable widgets.
/// Widgets are small, focused components that are composed by the view to build
/// the leaderboard screen.

#[cfg(test)]
pub mod testing;

pub mod controls_bar;
pub use controls_bar::ControlsBar;

pub mod leaderboard_table;
pub use leaderboard_table::LeaderboardTable;

pub mod pagination_bar;
pub use pagination_bar::PaginationBar;

pub mod stats_panel;
pub use stats_panel::StatsPanel;

pub mod status_bar;
pub use status_bar::{KeyHint, KeyHintStyle, StatusBar};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations. This enables:
/// - Direct styling without character position calculations
/// - Testability (can render to test buffers)
/// - Type safety (compiler catches layout errors)
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    /// Returns Some(height) if the widget has a fixed or preferred height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
