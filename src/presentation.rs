/// Search, pagination and navigation state for a leaderboard view
///
/// Everything here works on borrowed slices of the canonical player list.
/// The list itself is never reordered or trimmed; views are derived on demand.
use std::time::Duration;

use crate::model::Player;

/// Scroll offset past which the controls bar becomes sticky
pub const STICKY_OFFSET_PX: u32 = 100;

/// Approximate rendered height of one table row
pub const ROW_HEIGHT_PX: u32 = 60;

/// Scroll offset past the table top after which "go to top" is offered
///
/// Roughly 30 rows of [`ROW_HEIGHT_PX`].
pub const GO_TO_TOP_OFFSET_PX: u32 = 1800;

/// Maximum number of page-number controls shown at once
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// How long a jumped-to row stays highlighted
pub const HIGHLIGHT_DURATION: Duration = Duration::from_secs(2);

/// Rows per page
///
/// `All` carries the list length observed when it was selected; it does not
/// grow if a later fetch returns more players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    TwentyFive,
    Fifty,
    Hundred,
    All(usize),
}

impl PageSize {
    pub fn all(total_players: usize) -> Self {
        Self::All(total_players)
    }

    /// Number of rows on one page, never zero
    pub fn rows(&self) -> usize {
        match self {
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
            Self::All(n) => (*n).max(1),
        }
    }

    /// Parse "25", "50", "100" or "all" (case-insensitive)
    pub fn parse(s: &str, total_players: usize) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "25" => Some(Self::TwentyFive),
            "50" => Some(Self::Fifty),
            "100" => Some(Self::Hundred),
            "all" => Some(Self::All(total_players)),
            _ => None,
        }
    }

    /// Next option in the 25 → 50 → 100 → All cycle
    pub fn cycle(self, total_players: usize) -> Self {
        match self {
            Self::TwentyFive => Self::Fifty,
            Self::Fifty => Self::Hundred,
            Self::Hundred => Self::All(total_players),
            Self::All(_) => Self::TwentyFive,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::All(n) => format!("All ({})", n),
            other => other.rows().to_string(),
        }
    }
}

/// A single entry of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous(u32),
    Page { number: u32, active: bool },
    Next(u32),
}

impl PageControl {
    /// Page this control navigates to
    pub fn target(&self) -> u32 {
        match self {
            Self::Previous(page) | Self::Next(page) => *page,
            Self::Page { number, .. } => *number,
        }
    }
}

/// Build the pagination bar for `current_page` out of `total_pages`
///
/// At most [`MAX_VISIBLE_PAGES`] numbers, centred on the current page and
/// shifted back when the window would run past the last page.
pub fn pagination_controls(current_page: u32, total_pages: u32) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let current_page = current_page.clamp(1, total_pages);

    let mut start = current_page.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    if end - start + 1 < MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    let mut controls = Vec::with_capacity(MAX_VISIBLE_PAGES as usize + 2);
    if current_page > 1 {
        controls.push(PageControl::Previous(current_page - 1));
    }
    for number in start..=end {
        controls.push(PageControl::Page {
            number,
            active: number == current_page,
        });
    }
    if current_page < total_pages {
        controls.push(PageControl::Next(current_page + 1));
    }
    controls
}

/// Render-ready slice of the filtered list
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub rows: Vec<&'a Player>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_filtered: usize,
    /// Index of the first row within the filtered list
    pub start_index: usize,
    pub page_rows: usize,
}

impl<'a> PageView<'a> {
    /// 1-based "Showing X to Y" bounds, or None when nothing matched
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        if self.total_filtered == 0 {
            return None;
        }
        let first = self.start_index + 1;
        let last = (self.current_page as usize * self.page_rows).min(self.total_filtered);
        Some((first, last))
    }

    pub fn controls(&self) -> Vec<PageControl> {
        pagination_controls(self.current_page, self.total_pages)
    }

    pub fn row_ids(&self) -> Vec<String> {
        self.rows.iter().map(|p| p.id.clone()).collect()
    }
}

/// Booleans derived from the vertical scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSignals {
    pub is_sticky: bool,
    pub show_go_to_top: bool,
}

impl ScrollSignals {
    pub fn compute(vertical_offset: u32, table_top_offset: u32) -> Self {
        Self {
            is_sticky: vertical_offset > STICKY_OFFSET_PX,
            show_go_to_top: vertical_offset > table_top_offset + GO_TO_TOP_OFFSET_PX,
        }
    }
}

/// Session-local filter and pagination state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    pub search_term: String,
    pub current_page: u32,
    pub page_size: PageSize,
    pub is_sticky: bool,
    pub show_go_to_top: bool,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            page_size: PageSize::default(),
            is_sticky: false,
            show_go_to_top: false,
        }
    }
}

impl PresentationState {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Replace the search term; always returns to the first page
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = std::mem::take(&mut self.search_term);
        term.push(c);
        self.set_search_term(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = std::mem::take(&mut self.search_term);
        term.pop();
        self.set_search_term(term);
    }

    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Change rows per page; always returns to the first page
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.current_page = 1;
    }

    pub fn update_scroll(&mut self, vertical_offset: u32, table_top_offset: u32) -> ScrollSignals {
        let signals = ScrollSignals::compute(vertical_offset, table_top_offset);
        self.is_sticky = signals.is_sticky;
        self.show_go_to_top = signals.show_go_to_top;
        signals
    }

    /// Reset filter and pagination so that every player is on the first page
    pub fn reveal_all(&mut self, total_players: usize) {
        self.search_term.clear();
        self.page_size = PageSize::all(total_players);
        self.current_page = 1;
    }

    pub fn filter<'a>(&self, players: &'a [Player]) -> Vec<&'a Player> {
        let needle = self.search_term.to_lowercase();
        players
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Filter then slice out the current page
    pub fn page_view<'a>(&self, players: &'a [Player]) -> PageView<'a> {
        let filtered = self.filter(players);
        let page_rows = self.page_size.rows();
        let total_filtered = filtered.len();
        let total_pages = total_filtered.div_ceil(page_rows) as u32;

        let start_index = (self.current_page as usize - 1).saturating_mul(page_rows);
        let end_index = start_index.saturating_add(page_rows).min(total_filtered);
        let rows = if start_index < total_filtered {
            filtered[start_index..end_index].to_vec()
        } else {
            Vec::new()
        };

        PageView {
            rows,
            current_page: self.current_page,
            total_pages,
            total_filtered,
            start_index,
            page_rows,
        }
    }

    /// Whether the pagination bar applies at all
    pub fn pagination_visible(&self, total_players: usize) -> bool {
        self.page_size.rows() < total_players
    }
}

/// Progress of a jump-to-player request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Idle,
    /// Filters were reset; waiting for a frame that reflects it
    AwaitingRender { target: String },
    /// Row was found and is highlighted until the timer with `generation` fires
    Highlighting { target: String, generation: u64 },
}

/// A located jump target, returned once the view has been drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTarget {
    pub player_id: String,
    pub row_index: usize,
    pub generation: u64,
}

/// Three-step jump-to-player navigation
///
/// 1. [`JumpNavigator::request`] resets the presentation state,
/// 2. [`JumpNavigator::on_rendered`] locates the row in the drawn frame,
/// 3. [`JumpNavigator::expire`] drops the highlight when its timer fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpNavigator {
    phase: JumpPhase,
    generation: u64,
}

impl JumpNavigator {
    pub fn phase(&self) -> &JumpPhase {
        &self.phase
    }

    pub fn request(&mut self, player_id: impl Into<String>, presentation: &mut PresentationState, total_players: usize) {
        presentation.reveal_all(total_players);
        self.phase = JumpPhase::AwaitingRender { target: player_id.into() };
    }

    pub fn is_awaiting_render(&self) -> bool {
        matches!(self.phase, JumpPhase::AwaitingRender { .. })
    }

    /// Resolve a pending request against the ids of the rows just drawn
    ///
    /// Returns None, and goes back to idle, when the target is not among them.
    pub fn on_rendered(&mut self, rendered_ids: &[String]) -> Option<JumpTarget> {
        if !self.is_awaiting_render() {
            return None;
        }
        let JumpPhase::AwaitingRender { target } = std::mem::take(&mut self.phase) else {
            return None;
        };
        let row_index = rendered_ids.iter().position(|id| *id == target)?;

        self.generation += 1;
        self.phase = JumpPhase::Highlighting {
            target: target.clone(),
            generation: self.generation,
        };
        Some(JumpTarget {
            player_id: target,
            row_index,
            generation: self.generation,
        })
    }

    /// Remove the highlight set by `generation`; stale timers are ignored
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.phase {
            JumpPhase::Highlighting { generation: current, .. } if *current == generation => {
                self.phase = JumpPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn highlighted(&self) -> Option<&str> {
        match &self.phase {
            JumpPhase::Highlighting { target, .. } => Some(target.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| Player {
                id: format!("player-{}", i),
                name: format!("user{:03}", i),
                points: (count - i) as i64,
                correct_predictions: 0,
                total_predictions: 0,
                rank: (i + 1) as u32,
            })
            .collect()
    }

    fn named(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Player {
                id: format!("id-{}", i),
                name: name.to_string(),
                points: 0,
                correct_predictions: 0,
                total_predictions: 0,
                rank: (i + 1) as u32,
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let state = PresentationState::default();
        assert_eq!(state.search_term, "");
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size.rows(), 25);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let list = named(&["Alice", "bob", "ALIBABA", "carol"]);
        let mut state = PresentationState::default();
        state.set_search_term("ali");
        let names: Vec<&str> = state.filter(&list).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "ALIBABA"]);

        state.set_search_term("");
        assert_eq!(state.filter(&list).len(), 4);
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = PresentationState::default();
        state.set_page(3);
        state.set_search_term("x");
        assert_eq!(state.current_page, 1);

        state.set_page(3);
        state.push_search_char('y');
        assert_eq!(state.search_term, "xy");
        assert_eq!(state.current_page, 1);

        state.set_page(2);
        state.pop_search_char();
        assert_eq!(state.search_term, "x");
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = PresentationState::default();
        state.set_page(4);
        state.set_page_size(PageSize::Fifty);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size.rows(), 50);
    }

    #[test]
    fn test_pagination_windowing() {
        let list = players(60);
        let mut state = PresentationState::default();

        let view = state.page_view(&list);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.total_filtered, 60);
        assert_eq!(view.rows.len(), 25);
        assert_eq!(view.rows[0].id, "player-0");
        assert_eq!(view.showing_range(), Some((1, 25)));

        state.set_page(3);
        let view = state.page_view(&list);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.rows[0].id, "player-50");
        assert_eq!(view.rows[9].id, "player-59");
        assert_eq!(view.showing_range(), Some((51, 60)));
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let list = players(10);
        let mut state = PresentationState::default();
        state.set_page(5);
        let view = state.page_view(&list);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_empty_list_has_no_pages() {
        let state = PresentationState::default();
        let view = state.page_view(&[]);
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.showing_range(), None);
        assert!(view.controls().is_empty());
    }

    #[test]
    fn test_set_page_never_below_one() {
        let mut state = PresentationState::default();
        state.set_page(0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_page_size_all_snapshots_length() {
        let list = players(40);
        let mut state = PresentationState::default();
        state.set_page_size(PageSize::all(list.len()));
        assert_eq!(state.page_view(&list).total_pages, 1);
        assert!(!state.pagination_visible(list.len()));

        // A longer list after a refresh spills onto a second page
        let longer = players(45);
        assert_eq!(state.page_view(&longer).total_pages, 2);
        assert!(state.pagination_visible(longer.len()));

        assert_eq!(PageSize::all(0).rows(), 1);
        assert_eq!(PageSize::all(40).label(), "All (40)");
    }

    #[test]
    fn test_page_size_parse_and_cycle() {
        assert_eq!(PageSize::parse("50", 10), Some(PageSize::Fifty));
        assert_eq!(PageSize::parse("ALL", 10), Some(PageSize::All(10)));
        assert_eq!(PageSize::parse("30", 10), None);
        assert_eq!(PageSize::TwentyFive.cycle(9), PageSize::Fifty);
        assert_eq!(PageSize::Hundred.cycle(9), PageSize::All(9));
        assert_eq!(PageSize::All(9).cycle(9), PageSize::TwentyFive);
    }

    #[test]
    fn test_controls_none_for_single_page() {
        assert!(pagination_controls(1, 1).is_empty());
        assert!(pagination_controls(1, 0).is_empty());
    }

    #[test]
    fn test_controls_first_page() {
        let controls = pagination_controls(1, 10);
        assert_eq!(controls.first(), Some(&PageControl::Page { number: 1, active: true }));
        assert_eq!(controls.last(), Some(&PageControl::Next(2)));
        let numbers: Vec<u32> = controls
            .iter()
            .filter_map(|c| match c {
                PageControl::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_controls_centered() {
        let controls = pagination_controls(6, 10);
        assert_eq!(controls[0], PageControl::Previous(5));
        let numbers: Vec<u32> = controls[1..6].iter().map(|c| c.target()).collect();
        assert_eq!(numbers, vec![4, 5, 6, 7, 8]);
        assert_eq!(controls[3], PageControl::Page { number: 6, active: true });
        assert_eq!(controls[6], PageControl::Next(7));
    }

    #[test]
    fn test_controls_shift_back_at_end() {
        let controls = pagination_controls(10, 10);
        assert_eq!(controls.len(), 6);
        assert_eq!(controls[0], PageControl::Previous(9));
        let numbers: Vec<u32> = controls[1..].iter().map(|c| c.target()).collect();
        assert_eq!(numbers, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_controls_current_past_last_page() {
        let controls = pagination_controls(5, 2);
        assert_eq!(
            controls,
            vec![
                PageControl::Previous(1),
                PageControl::Page { number: 1, active: false },
                PageControl::Page { number: 2, active: true },
            ]
        );
        assert!(pagination_controls(0, 3).iter().all(|c| !matches!(c, PageControl::Previous(_))));
    }

    #[test]
    fn test_controls_fewer_pages_than_window() {
        let controls = pagination_controls(2, 3);
        assert_eq!(
            controls,
            vec![
                PageControl::Previous(1),
                PageControl::Page { number: 1, active: false },
                PageControl::Page { number: 2, active: true },
                PageControl::Page { number: 3, active: false },
                PageControl::Next(3),
            ]
        );
    }

    #[test]
    fn test_scroll_signals() {
        let mut state = PresentationState::default();
        assert_eq!(state.update_scroll(100, 0), ScrollSignals::default());
        let signals = state.update_scroll(101, 0);
        assert!(signals.is_sticky);
        assert!(!signals.show_go_to_top);
        assert!(state.is_sticky);

        assert!(!state.update_scroll(2000, 300).show_go_to_top);
        assert!(state.update_scroll(2101, 300).show_go_to_top);
        assert!(state.show_go_to_top);
    }

    #[test]
    fn test_jump_reveals_filtered_out_player() {
        let list = named(&["alice", "bob", "carol"]);
        let mut state = PresentationState::default();
        state.set_search_term("ali");
        state.set_page(2);
        assert!(!state.filter(&list).iter().any(|p| p.id == "id-2"));

        let mut nav = JumpNavigator::default();
        nav.request("id-2", &mut state, list.len());
        assert_eq!(state.search_term, "");
        assert_eq!(state.page_size, PageSize::All(3));
        assert_eq!(state.current_page, 1);
        assert!(nav.is_awaiting_render());

        let view = state.page_view(&list);
        let ids = view.row_ids();
        assert!(ids.contains(&"id-2".to_string()));

        let target = nav.on_rendered(&ids).unwrap();
        assert_eq!(target.row_index, 2);
        assert_eq!(nav.highlighted(), Some("id-2"));
    }

    #[test]
    fn test_jump_to_missing_player_is_silent() {
        let mut state = PresentationState::default();
        let mut nav = JumpNavigator::default();
        nav.request("ghost", &mut state, 2);
        assert_eq!(nav.on_rendered(&["a".to_string(), "b".to_string()]), None);
        assert_eq!(nav.phase(), &JumpPhase::Idle);
        assert_eq!(nav.highlighted(), None);
    }

    #[test]
    fn test_on_rendered_without_request_does_nothing() {
        let mut nav = JumpNavigator::default();
        assert_eq!(nav.on_rendered(&["a".to_string()]), None);
        assert_eq!(nav.phase(), &JumpPhase::Idle);
    }

    #[test]
    fn test_render_during_highlight_keeps_highlight() {
        let mut state = PresentationState::default();
        let rendered = vec!["a".to_string()];
        let mut nav = JumpNavigator::default();
        nav.request("a", &mut state, 1);
        nav.on_rendered(&rendered).unwrap();
        assert_eq!(nav.on_rendered(&rendered), None);
        assert_eq!(nav.highlighted(), Some("a"));
    }

    #[test]
    fn test_stale_highlight_timer_is_ignored() {
        let mut state = PresentationState::default();
        let rendered = vec!["a".to_string()];
        let mut nav = JumpNavigator::default();

        nav.request("a", &mut state, 1);
        let first = nav.on_rendered(&rendered).unwrap();
        nav.request("a", &mut state, 1);
        let second = nav.on_rendered(&rendered).unwrap();
        assert_ne!(first.generation, second.generation);

        assert!(!nav.expire(first.generation));
        assert_eq!(nav.highlighted(), Some("a"));
        assert!(nav.expire(second.generation));
        assert_eq!(nav.highlighted(), None);
    }
}
