//! # Application State
//!
//! Core session state for noteme. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── view: View                       // which of the six views is active
//! ├── notes: Vec<Note>                 // newest first
//! ├── todos: Vec<Todo>                 // newest first
//! ├── editor: NoteEditor               // title/folder/content buffers + open note id
//! ├── composer: TextField              // todo input line
//! ├── pending_delete: Option<..>       // {id, kind} while DeleteConfirm is up
//! ├── note_cursor / todo_cursor        // list selection + filter
//! ├── default_folder: String           // folder pre-filled for new notes
//! ├── status_message: String           // title bar text
//! └── confirmation: Option<..>         // save/delete result kept across its reload
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::model::{DEFAULT_FOLDER, Note, RecordKind, Todo};
use crate::core::projection::{ListCursor, Row, note_rows, todo_rows};
use crate::core::text_field::TextField;

/// The active view. `Dashboard` is where every session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    NoteList,
    NoteEdit,
    TodoList,
    TodoAdd,
    DeleteConfirm,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::NoteList => "Notes",
            View::NoteEdit => "Edit Note",
            View::TodoList => "Todos",
            View::TodoAdd => "New Todo",
            View::DeleteConfirm => "Confirm Delete",
        }
    }

    /// The list view that shows records of `kind`.
    pub fn list_for(kind: RecordKind) -> View {
        match kind {
            RecordKind::Note => View::NoteList,
            RecordKind::Todo => View::TodoList,
        }
    }
}

/// Focusable fields of the note editor, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Folder,
    Content,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            EditorField::Title => EditorField::Folder,
            EditorField::Folder => EditorField::Content,
            EditorField::Content => EditorField::Title,
        }
    }
}

/// Buffers for the note being created or edited.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteEditor {
    pub title: TextField,
    pub folder: TextField,
    pub content: TextField,
    pub focus: EditorField,
    /// ID of the note open for editing. Empty while creating a new one.
    pub note_id: String,
}

impl Default for NoteEditor {
    fn default() -> Self {
        Self::blank(DEFAULT_FOLDER)
    }
}

impl NoteEditor {
    pub fn blank(folder: &str) -> Self {
        let mut editor = Self {
            title: TextField::new(),
            folder: TextField::new(),
            content: TextField::multiline(),
            focus: EditorField::Title,
            note_id: String::new(),
        };
        editor.folder.set(folder);
        editor
    }

    pub fn from_note(note: &Note) -> Self {
        let mut editor = Self::blank(&note.folder);
        editor.title.set(&note.title);
        editor.content.set(&note.content);
        editor.note_id = note.id.clone();
        editor
    }

    pub fn is_new(&self) -> bool {
        self.note_id.is_empty()
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            EditorField::Title => &mut self.title,
            EditorField::Folder => &mut self.folder,
            EditorField::Content => &mut self.content,
        }
    }

    pub fn advance_focus(&mut self) {
        self.focus = self.focus.next();
    }
}

/// The record captured when entering `DeleteConfirm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub kind: RecordKind,
    /// Set once the delete command has been issued.
    pub in_flight: bool,
}

/// Dashboard aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub notes: usize,
    pub active_todos: usize,
    pub done_todos: usize,
}

impl Stats {
    pub fn is_empty(&self) -> bool {
        self.notes == 0 && self.active_todos == 0 && self.done_todos == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub view: View,
    pub notes: Vec<Note>,
    pub todos: Vec<Todo>,
    pub editor: NoteEditor,
    pub composer: TextField,
    pub pending_delete: Option<PendingDelete>,
    pub note_cursor: ListCursor,
    pub todo_cursor: ListCursor,
    pub default_folder: String,
    pub status_message: String,
    /// Outcome of the last save or delete, shown again once its reload lands.
    pub confirmation: Option<(RecordKind, String)>,
}

impl App {
    pub fn new(default_folder: impl Into<String>) -> Self {
        let default_folder = default_folder.into();
        Self {
            view: View::Dashboard,
            notes: Vec::new(),
            todos: Vec::new(),
            editor: NoteEditor::blank(&default_folder),
            composer: TextField::new(),
            pending_delete: None,
            note_cursor: ListCursor::default(),
            todo_cursor: ListCursor::default(),
            default_folder,
            status_message: String::from("Loading..."),
            confirmation: None,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.default_folder.clone())
    }

    pub fn stats(&self) -> Stats {
        let done_todos = self.todos.iter().filter(|t| t.done).count();
        Stats {
            notes: self.notes.len(),
            active_todos: self.todos.len() - done_todos,
            done_todos,
        }
    }

    pub fn note_rows(&self) -> Vec<Row<'_>> {
        note_rows(&self.notes, &self.note_cursor.filter)
    }

    pub fn todo_rows(&self) -> Vec<Row<'_>> {
        todo_rows(&self.todos, &self.todo_cursor.filter)
    }

    /// The note under the list cursor, after filtering.
    pub fn selected_note(&self) -> Option<&Note> {
        match self.note_rows().get(self.note_cursor.selected) {
            Some(Row::Note(note)) => Some(*note),
            _ => None,
        }
    }

    /// Position in `todos` of the todo under the list cursor, after filtering.
    pub fn selected_todo_index(&self) -> Option<usize> {
        let id = match self.todo_rows().get(self.todo_cursor.selected) {
            Some(Row::Todo(todo)) => todo.id.clone(),
            _ => return None,
        };
        self.todos.iter().position(|t| t.id == id)
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.selected_todo_index().map(|i| &self.todos[i])
    }

    /// Cursor of the list view currently on screen, if any.
    pub fn active_cursor(&self) -> Option<&ListCursor> {
        match self.view {
            View::NoteList => Some(&self.note_cursor),
            View::TodoList => Some(&self.todo_cursor),
            _ => None,
        }
    }

    pub fn active_cursor_mut(&mut self) -> Option<&mut ListCursor> {
        match self.view {
            View::NoteList => Some(&mut self.note_cursor),
            View::TodoList => Some(&mut self.todo_cursor),
            _ => None,
        }
    }

    /// Number of rows visible in the active list view.
    pub fn active_row_count(&self) -> usize {
        match self.view {
            View::NoteList => self.note_rows().len(),
            View::TodoList => self.todo_rows().len(),
            _ => 0,
        }
    }
}
