//! Editable text buffers owned by the session state.
//!
//! `TextField` holds a string and a cursor (byte offset, always on a char
//! boundary). It knows nothing about terminals; the TUI turns key presses into
//! `TextEdit` values and renders `value()` / `cursor_line_col()`.

/// A single editing operation applied to a focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Paste(String),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    /// Byte offset into `value` (0..=value.len())
    cursor: usize,
    multiline: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field that accepts newlines (the note body).
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the contents and park the cursor at the end.
    pub fn set(&mut self, value: &str) {
        self.value = if self.multiline {
            value.to_string()
        } else {
            value.replace('\n', " ")
        };
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Zero-based (line, column) of the cursor, column counted in chars.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.value[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, before[line_start..].chars().count())
    }

    /// Text from the start of the cursor's line up to the cursor.
    pub fn line_before_cursor(&self) -> &str {
        let before = &self.value[..self.cursor];
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        &before[line_start..]
    }

    /// Apply an edit. Returns `true` if the value or cursor changed.
    pub fn apply(&mut self, edit: &TextEdit) -> bool {
        match edit {
            TextEdit::Insert(c) => {
                if *c == '\n' {
                    return self.apply(&TextEdit::Newline);
                }
                self.value.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            TextEdit::Paste(text) => {
                if text.is_empty() {
                    return false;
                }
                let text = if self.multiline {
                    text.replace("\r\n", "\n")
                } else {
                    text.replace(['\r', '\n'], " ")
                };
                self.value.insert_str(self.cursor, &text);
                self.cursor += text.len();
                true
            }
            TextEdit::Newline => {
                if !self.multiline {
                    return false;
                }
                self.value.insert(self.cursor, '\n');
                self.cursor += 1;
                true
            }
            TextEdit::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = prev_char_boundary(&self.value, self.cursor);
                self.value.drain(prev..self.cursor);
                self.cursor = prev;
                true
            }
            TextEdit::Delete => {
                if self.cursor >= self.value.len() {
                    return false;
                }
                let next = next_char_boundary(&self.value, self.cursor);
                self.value.drain(self.cursor..next);
                true
            }
            TextEdit::Left => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor = prev_char_boundary(&self.value, self.cursor);
                true
            }
            TextEdit::Right => {
                if self.cursor >= self.value.len() {
                    return false;
                }
                self.cursor = next_char_boundary(&self.value, self.cursor);
                true
            }
            TextEdit::Home => {
                let line_start = self.value[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                let moved = self.cursor != line_start;
                self.cursor = line_start;
                moved
            }
            TextEdit::End => {
                let line_end = self.value[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.value.len());
                let moved = self.cursor != line_end;
                self.cursor = line_end;
                moved
            }
            TextEdit::Up => self.move_line(-1),
            TextEdit::Down => self.move_line(1),
        }
    }

    /// Move to the same column on the previous/next logical line, clamped to its length.
    fn move_line(&mut self, direction: i8) -> bool {
        if !self.multiline {
            return false;
        }
        let (line, col) = self.cursor_line_col();
        let target = match direction {
            d if d < 0 && line == 0 => return false,
            d if d < 0 => line - 1,
            _ => line + 1,
        };

        let mut offset = 0;
        for (index, text) in self.value.split('\n').enumerate() {
            if index == target {
                let within = text
                    .char_indices()
                    .nth(col)
                    .map(|(i, _)| i)
                    .unwrap_or(text.len());
                self.cursor = offset + within;
                return true;
            }
            offset += text.len() + 1;
        }
        false
    }
}

/// Byte offset of the character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.apply(&TextEdit::Insert(c));
        }
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut field = TextField::new();
        typed(&mut field, "ab");
        assert_eq!(field.value(), "ab");
        assert!(field.apply(&TextEdit::Backspace));
        assert_eq!(field.value(), "a");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = TextField::new();
        assert!(!field.apply(&TextEdit::Backspace));
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut field = TextField::new();
        typed(&mut field, "café");
        field.apply(&TextEdit::Left);
        assert_eq!(field.cursor(), 3);
        field.apply(&TextEdit::Delete);
        assert_eq!(field.value(), "caf");
    }

    #[test]
    fn test_single_line_rejects_newline() {
        let mut field = TextField::new();
        assert!(!field.apply(&TextEdit::Newline));
        field.apply(&TextEdit::Paste("one\ntwo".to_string()));
        assert_eq!(field.value(), "one two");
    }

    #[test]
    fn test_multiline_newline_and_line_col() {
        let mut field = TextField::multiline();
        typed(&mut field, "first");
        field.apply(&TextEdit::Newline);
        typed(&mut field, "se");
        assert_eq!(field.value(), "first\nse");
        assert_eq!(field.cursor_line_col(), (1, 2));
        assert_eq!(field.line_before_cursor(), "se");
    }

    #[test]
    fn test_up_down_keeps_column_clamped() {
        let mut field = TextField::multiline();
        field.set("long line\nab");
        assert!(field.apply(&TextEdit::Up));
        assert_eq!(field.cursor_line_col(), (0, 2));
        field.apply(&TextEdit::End);
        assert!(field.apply(&TextEdit::Down));
        assert_eq!(field.cursor_line_col(), (1, 2));
        assert!(!field.apply(&TextEdit::Down));
    }

    #[test]
    fn test_home_end_on_current_line() {
        let mut field = TextField::multiline();
        field.set("abc\ndef");
        assert!(field.apply(&TextEdit::Home));
        assert_eq!(field.cursor(), 4);
        assert!(!field.apply(&TextEdit::Home));
        assert!(field.apply(&TextEdit::End));
        assert_eq!(field.cursor(), 7);
    }

    #[test]
    fn test_set_places_cursor_at_end() {
        let mut field = TextField::new();
        field.set("general");
        assert_eq!(field.cursor(), 7);
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }
}
