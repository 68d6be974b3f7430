//! # RecordList Component
//!
//! Renders projected rows for either list view: a title line plus a dimmed
//! description line per row, a highlighted selection and an optional filter
//! line at the bottom.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - the `ListState` lives in `TuiState` so the scroll offset survives frames
//! - `RecordList` is created each frame with borrowed rows

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::projection::{ListCursor, Row};

pub struct RecordList<'a> {
    pub title: &'a str,
    pub rows: &'a [Row<'a>],
    pub cursor: &'a ListCursor,
    /// Shown when `rows` is empty.
    pub empty_message: &'a str,
    state: &'a mut ListState,
}

impl<'a> RecordList<'a> {
    pub fn new(
        title: &'a str,
        rows: &'a [Row<'a>],
        cursor: &'a ListCursor,
        state: &'a mut ListState,
    ) -> Self {
        Self {
            title,
            rows,
            cursor,
            empty_message: "Nothing here.",
            state,
        }
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let show_filter = self.cursor.filtering || !self.cursor.filter.is_empty();
        let [list_area, filter_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(if show_filter { 1 } else { 0 }),
        ])
        .areas(area);

        let title = format!(" {} ({}) ", self.title, self.rows.len());
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .padding(Padding::horizontal(1));

        if show_filter {
            self.render_filter(frame, filter_area);
        }

        if self.rows.is_empty() {
            self.state.select(None);
            let empty = Paragraph::new(self.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, list_area);
            return;
        }

        // borders + padding + highlight symbol
        let text_width = list_area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                ListItem::new(vec![
                    Line::from(truncate_str(&row.title(), text_width)),
                    Line::from(Span::styled(
                        truncate_str(&row.description(), text_width),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let selected = self.cursor.selected.min(self.rows.len() - 1);
        self.state.select(Some(selected));

        let list = List::new(items)
            .block(block)
            .highlight_symbol("> ")
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );
        frame.render_stateful_widget(list, list_area, self.state);
    }

    fn render_filter(&self, frame: &mut Frame, area: Rect) {
        let label_style = if self.cursor.filtering {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let line = Line::from(vec![
            Span::styled(" Filter: ", label_style),
            Span::raw(self.cursor.filter.as_str()),
        ]);
        frame.render_widget(line, area);

        if self.cursor.filtering {
            let x = area.x + 9 + self.cursor.filter.width() as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
        }
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Frequency, Todo};
    use crate::core::projection::todo_rows;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(rows: &[Row<'_>], cursor: &ListCursor, state: &mut ListState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        terminal
            .draw(|f| {
                RecordList::new("Todos", rows, cursor, state)
                    .empty_message("No todos yet.")
                    .render(f, f.area())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_rows_with_markers() {
        let mut done = Todo::new("water plants", Frequency::Daily);
        done.done = true;
        let todos = vec![Todo::new("buy milk", Frequency::Once), done];
        let rows = todo_rows(&todos, "");
        let cursor = ListCursor::default();
        let mut state = ListState::default();

        let text = render(&rows, &cursor, &mut state);
        assert!(text.contains("Todos (2)"));
        assert!(text.contains("[ ] buy milk"));
        assert!(text.contains("[x] water plants"));
        assert!(text.contains("daily |"));
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_selection_is_clamped_to_rows() {
        let todos = vec![Todo::new("only", Frequency::Once)];
        let rows = todo_rows(&todos, "");
        let cursor = ListCursor {
            selected: 5,
            ..ListCursor::default()
        };
        let mut state = ListState::default();
        render(&rows, &cursor, &mut state);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_empty_list_shows_message() {
        let cursor = ListCursor::default();
        let mut state = ListState::default();
        let text = render(&[], &cursor, &mut state);
        assert!(text.contains("No todos yet."));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_filter_line_visible_while_filtering() {
        let todos = vec![Todo::new("buy milk", Frequency::Once)];
        let cursor = ListCursor {
            selected: 0,
            filter: "mil".to_string(),
            filtering: true,
        };
        let rows = todo_rows(&todos, &cursor.filter);
        let mut state = ListState::default();
        let text = render(&rows, &cursor, &mut state);
        assert!(text.contains("Filter: mil"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a longer title", 8), "a lon...");
        assert_eq!(truncate_str("abc", 2), "..");
    }
}
