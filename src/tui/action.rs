use crate::error::FetchError;
use crate::presentation::PageSize;
use crate::ranking::Leaderboard;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async data loading, timers)
/// - The render loop (frame completion)
#[derive(Debug, Clone)]
pub enum Action {
    // Data actions
    RefreshData,
    /// Result of the fetch stamped with `seq`
    LeaderboardLoaded {
        seq: u64,
        result: Result<Leaderboard, FetchError>,
    },

    // Search actions
    EnterSearchMode,
    ExitSearchMode,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    // Pagination actions
    NextPage,
    PreviousPage,
    GoToPage(u32),
    CyclePageSize,
    SetPageSize(PageSize),

    // Table navigation
    SelectNext,
    SelectPrevious,
    GoToTop,
    JumpToSelected,
    JumpToPlayer(String),
    /// Sent by the render loop once a frame has been drawn
    ViewRendered {
        row_ids: Vec<String>,
        viewport_rows: u16,
    },
    HighlightExpired(u64),
    /// Animation step for smooth scrolling
    Tick,

    // System actions
    Quit,
}
