/// StatusBar widget - status message and keyboard hints at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator
/// - Bottom line: status message (or error) on the left, key hints on the right
///
/// Error messages are displayed with the error color when present.

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Represents the style of a key hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHintStyle {
    /// Normal hint (default styling)
    Normal,
    /// Important hint (highlighted)
    Important,
}

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The keyboard key (e.g., "/", "r", "Enter")
    pub key: String,
    /// The action description (e.g., "Search", "Refresh")
    pub action: String,
    /// The visual style for this hint
    pub style: KeyHintStyle,
}

impl KeyHint {
    /// Create a new normal key hint
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            style: KeyHintStyle::Normal,
        }
    }

    /// Create a new key hint with a specific style
    pub fn with_style(key: impl Into<String>, action: impl Into<String>, style: KeyHintStyle) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            style,
        }
    }

    fn text(&self) -> String {
        format!("{} {}", self.key, self.action)
    }
}

/// Widget for displaying status information and keyboard hints
#[derive(Debug, Default)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a status message (non-error)
    pub fn with_status(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self.is_error = false;
        self
    }

    /// Set an error message
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.message = Some(error.into());
        self.is_error = true;
        self
    }

    /// Set custom keyboard hints
    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    fn build_left_text(&self) -> String {
        match &self.message {
            Some(msg) if self.is_error => format!("ERROR: {}", msg),
            Some(msg) => msg.clone(),
            None => String::new(),
        }
    }

    fn hint_style(hint: &KeyHint, config: &DisplayConfig) -> Style {
        match hint.style {
            KeyHintStyle::Normal => Style::default().add_modifier(Modifier::DIM),
            KeyHintStyle::Important => Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD),
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        let width = area.width as usize;

        buf.set_string(area.x, area.y, config.box_chars.horizontal.repeat(width), Style::default());

        let y = area.y + 1;
        let hints: Vec<String> = self.hints.iter().map(KeyHint::text).collect();
        let hints_width = hints.iter().map(|h| h.width()).sum::<usize>() + 2 * hints.len().saturating_sub(1) + 1;

        let left_style = if self.is_error {
            Style::default().fg(config.error_fg)
        } else {
            Style::default()
        };
        let left = format!(" {}", self.build_left_text());
        // Hints give way to the message when space runs out
        let show_hints = !hints.is_empty() && left.width() + hints_width + 2 <= width;
        let left_max = if show_hints { width - hints_width - 2 } else { width };
        buf.set_stringn(area.x, y, &left, left_max, left_style);

        if !show_hints {
            return;
        }
        let mut x = area.x + (width - hints_width) as u16;
        for (i, (hint, text)) in self.hints.iter().zip(&hints).enumerate() {
            if i > 0 {
                x += 2;
            }
            buf.set_string(x, y, text, Self::hint_style(hint, config));
            x += text.width() as u16;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}
