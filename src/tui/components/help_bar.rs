//! # HelpBar Component
//!
//! Bottom line listing the keys that do something in the active view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::View;
use crate::tui::component::Component;

pub struct HelpBar {
    pub view: View,
    /// A list filter is capturing keystrokes.
    pub filtering: bool,
}

impl HelpBar {
    pub fn new(view: View, filtering: bool) -> Self {
        Self { view, filtering }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.filtering {
            return &[("type", "filter"), ("enter", "keep"), ("esc", "clear")];
        }
        match self.view {
            View::Dashboard => &[
                ("tab", "notes"),
                ("n", "new note"),
                ("t", "new todo"),
                ("q", "quit"),
            ],
            View::NoteList => &[
                ("↑/↓", "move"),
                ("enter", "edit"),
                ("n", "new"),
                ("d", "delete"),
                ("/", "filter"),
                ("tab", "todos"),
                ("q", "quit"),
            ],
            View::TodoList => &[
                ("↑/↓", "move"),
                ("space", "toggle"),
                ("n", "new"),
                ("d", "delete"),
                ("/", "filter"),
                ("tab", "dashboard"),
                ("q", "quit"),
            ],
            View::NoteEdit => &[
                ("tab", "next field"),
                ("ctrl+s", "save"),
                ("esc", "back"),
                ("ctrl+c", "quit"),
            ],
            View::TodoAdd => &[
                ("enter", "add"),
                ("/daily /weekly /monthly", "repeat"),
                ("esc", "back"),
            ],
            View::DeleteConfirm => &[("y", "confirm"), ("n", "cancel")],
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan);
        let text_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for (i, (key, what)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", text_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {what}"), text_style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
