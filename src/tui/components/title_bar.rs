//! # TitleBar Component
//!
//! Top status bar: app name, the active view and the latest status message.
//!
//! ```text
//! noteme | Notes | 3 notes
//! noteme | Dashboard
//! ```
//!
//! Purely presentational; both props come from core `App` state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Label of the active view (e.g., "Notes")
    pub view_label: String,
    /// Status message (e.g., "Loading...", "Note saved")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(view_label: String, status_message: String) -> Self {
        Self {
            view_label,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "noteme",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {}", self.view_label)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
