//! # TextInput Component
//!
//! Bordered box showing one `TextField`, used by the note editor (three
//! instances) and the todo composer. When focused it places the terminal
//! cursor and scrolls so the cursor stays inside the box.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::text_field::TextField;
use crate::tui::component::Component;

pub struct TextInput<'a> {
    pub label: &'a str,
    pub field: &'a TextField,
    pub focused: bool,
    /// Dimmed hint shown while the field is empty.
    pub placeholder: &'a str,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, field: &'a TextField, focused: bool) -> Self {
        Self {
            label,
            field,
            focused,
            placeholder: "",
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Component for TextInput<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.label));
        let inner = block.inner(area);

        let (line, _) = self.field.cursor_line_col();
        let col = self.field.line_before_cursor().width();
        let scroll = scroll_offset(line, col, inner);

        let paragraph = if self.field.is_empty() && !self.placeholder.is_empty() {
            Paragraph::new(self.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.field.value()).scroll(scroll)
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let x = inner.x + (col as u16).saturating_sub(scroll.1);
            let y = inner.y + (line as u16).saturating_sub(scroll.0);
            frame.set_cursor_position((x, y));
        }
    }
}

/// (rows, cols) to scroll so the cursor at (`line`, `col`) is visible in `inner`.
fn scroll_offset(line: usize, col: usize, inner: Rect) -> (u16, u16) {
    let rows = (line + 1).saturating_sub(inner.height as usize);
    let cols = (col + 1).saturating_sub(inner.width as usize);
    (rows as u16, cols as u16)
}
