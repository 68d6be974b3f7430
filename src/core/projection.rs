//! # List Projections
//!
//! Read-only display rows for the note and todo lists.
//!
//! ```text
//! Note { title, folder, created_at }      →  Row::Note
//!     title:        "Groceries"
//!     description:  "[general] 2024-03-15"
//!
//! Todo { content, done, frequency, .. }   →  Row::Todo
//!     title:        "[x] water plants"
//!     description:  "daily | 2024-03-15"
//! ```
//!
//! Rows borrow the record they project; nothing here can mutate a record.
//! The state machine resolves a selected row back to its record by ID.

use chrono::{DateTime, Local, Utc};

use crate::core::model::{Note, Todo};

/// One visible entry in a list view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Row<'a> {
    Note(&'a Note),
    Todo(&'a Todo),
}

impl<'a> Row<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Row::Note(note) => &note.id,
            Row::Todo(todo) => &todo.id,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Row::Note(note) => note.title.clone(),
            Row::Todo(todo) => {
                let marker = if todo.done { "[x] " } else { "[ ] " };
                format!("{marker}{}", todo.content)
            }
        }
    }

    pub fn description(&self) -> String {
        match self {
            Row::Note(note) => format!("[{}] {}", note.folder, format_date(note.created_at)),
            Row::Todo(todo) => format!("{} | {}", todo.frequency, format_date(todo.created_at)),
        }
    }

    /// The text a list filter is matched against.
    pub fn filter_value(&self) -> &'a str {
        match self {
            Row::Note(note) => &note.title,
            Row::Todo(todo) => &todo.content,
        }
    }

    /// Case-insensitive substring match. An empty filter matches everything.
    pub fn matches(&self, filter: &str) -> bool {
        filter.is_empty()
            || self
                .filter_value()
                .to_lowercase()
                .contains(&filter.to_lowercase())
    }
}

pub fn note_rows<'a>(notes: &'a [Note], filter: &str) -> Vec<Row<'a>> {
    notes
        .iter()
        .map(Row::Note)
        .filter(|row| row.matches(filter))
        .collect()
}

pub fn todo_rows<'a>(todos: &'a [Todo], filter: &str) -> Vec<Row<'a>> {
    todos
        .iter()
        .map(Row::Todo)
        .filter(|row| row.matches(filter))
        .collect()
}

/// Format a timestamp as a local `YYYY-MM-DD` date.
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Selection and filter state for one list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Index into the *filtered* rows.
    pub selected: usize,
    pub filter: String,
    /// True while keystrokes edit the filter instead of driving the list.
    pub filtering: bool,
}

impl ListCursor {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn begin_filter(&mut self) {
        self.filtering = true;
    }

    pub fn end_filter(&mut self) {
        self.filtering = false;
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.filtering = false;
        self.selected = 0;
    }
}
