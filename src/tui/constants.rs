use std::time::Duration;

/// Status bar text when nothing else is going on
pub const DEFAULT_STATUS_MESSAGE: &str = "Ready";

/// Table body height assumed until the first frame reports the real one
pub const DEFAULT_VIEWPORT_ROWS: u16 = 20;

/// Offset of the first table row within the scrollable area
pub const TABLE_TOP_OFFSET_PX: u32 = 0;

/// Event poll timeout while idle
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Event poll timeout while a smooth scroll is running
pub const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(30);
