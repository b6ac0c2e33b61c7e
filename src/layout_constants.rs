//! Shared layout constants used across CLI and TUI components.
//!
//! Both the `show` command and the TUI table lay rows out with these widths,
//! so the two outputs line up the same way.

/// Width of the selection marker in front of each TUI row
pub const SELECTOR_COL_WIDTH: usize = 2;

/// Width of the rank column ("#1234", "🥇", "1st")
pub const RANK_COL_WIDTH: usize = 6;

/// Width of the player name column
pub const PLAYER_COL_WIDTH: usize = 24;

/// Width of the points column
pub const POINTS_COL_WIDTH: usize = 7;

/// Width of the correct/total predictions column
pub const PREDICTIONS_COL_WIDTH: usize = 9;

/// Width of the distance-to-leader column
pub const LEADER_GAP_COL_WIDTH: usize = 10;

/// Width of the distance-to-top-100 column
pub const TOP_ZONE_COL_WIDTH: usize = 10;

/// Width of the jump hint column shown while searching
pub const ACTIONS_COL_WIDTH: usize = 8;

/// Space between columns
pub const COLUMN_GAP: usize = 1;

/// Total width of a row without the actions column
pub const TABLE_WIDTH: usize = RANK_COL_WIDTH
    + PLAYER_COL_WIDTH
    + POINTS_COL_WIDTH
    + PREDICTIONS_COL_WIDTH
    + LEADER_GAP_COL_WIDTH
    + TOP_ZONE_COL_WIDTH
    + 5 * COLUMN_GAP;
