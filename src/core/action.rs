//! # Actions
//!
//! Everything that can happen in noteme becomes an `Action`.
//! User presses Tab on the dashboard? That's `Action::SwitchView`.
//! A background save finishes? That's `Action::NotesSaved`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing what the caller should do
//! next. No I/O happens here: storage work is requested as a `Command`
//! and its outcome comes back later as another `Action`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//!                                             │
//!                       Effect::Run(Command) ─┴─► pipeline ─► Action (message)
//! ```
//!
//! View transitions:
//!
//! ```text
//!             Tab                 Tab                 Tab
//! Dashboard ──────► NoteList ──────────► TodoList ──────────► Dashboard
//!    │ n/t           │ n, Enter ▲ Esc      │ n       ▲ Esc/Enter
//!    │               ▼          │          ▼         │
//!    │            NoteEdit ─────┘        TodoAdd ────┘
//!    │
//!    └─ NoteList/TodoList ── d ──► DeleteConfirm ── y/n ──► originating list
//! ```

use chrono::Utc;
use log::{debug, info};

use crate::core::model::{Frequency, Note, RecordKind, Todo, new_id};
use crate::core::state::{App, EditorField, NoteEditor, PendingDelete, View};
use crate::core::text_field::TextEdit;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- Input ---
    /// Ends the session from any view. Unsaved edits are dropped.
    Quit,
    SwitchView,
    NewNote,
    NewTodo,
    CursorUp,
    CursorDown,
    /// Enter on a list row.
    Select,
    ToggleDone,
    RequestDelete,
    Back,
    Save,
    FocusNext,
    /// Enter in the todo composer.
    Submit,
    ConfirmDelete,
    CancelDelete,
    /// Text input for the focused editor field or the composer.
    Edit(TextEdit),
    BeginFilter,
    FilterEdit(TextEdit),
    EndFilter,
    ClearFilter,

    // --- Messages (storage results) ---
    NotesLoaded(Vec<Note>),
    TodosLoaded(Vec<Todo>),
    NotesSaved,
    TodosSaved,
    ItemDeleted(RecordKind),
}

/// A storage operation for the pipeline to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadNotes,
    LoadTodos,
    /// Overwrite the whole notes collection.
    SaveNotes(Vec<Note>),
    /// Overwrite the whole todos collection.
    SaveTodos(Vec<Todo>),
    Delete { id: String, kind: RecordKind },
}

impl Command {
    /// Commands issued once when a session starts.
    pub fn startup() -> [Command; 2] {
        [Command::LoadNotes, Command::LoadTodos]
    }

    pub fn load(kind: RecordKind) -> Command {
        match kind {
            RecordKind::Note => Command::LoadNotes,
            RecordKind::Todo => Command::LoadTodos,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::LoadNotes => "load-notes",
            Command::LoadTodos => "load-todos",
            Command::SaveNotes(_) => "save-notes",
            Command::SaveTodos(_) => "save-todos",
            Command::Delete { .. } => "delete",
        }
    }
}

/// What the event loop should do after an `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Run(Command),
}

/// Apply an action to the session state.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => {
            info!("Quit requested from {:?}", app.view);
            Effect::Quit
        }

        // Storage results are accepted whatever view is showing.
        Action::NotesLoaded(notes) => {
            debug!("Notes loaded: {}", notes.len());
            app.notes = notes;
            let len = app.note_rows().len();
            app.note_cursor.clamp(len);
            let count = app.notes.len();
            set_loaded_status(app, RecordKind::Note, count);
            Effect::None
        }
        Action::TodosLoaded(todos) => {
            debug!("Todos loaded: {}", todos.len());
            app.todos = todos;
            let len = app.todo_rows().len();
            app.todo_cursor.clamp(len);
            let count = app.todos.len();
            set_loaded_status(app, RecordKind::Todo, count);
            Effect::None
        }
        Action::NotesSaved => {
            confirm(app, RecordKind::Note, String::from("Note saved"));
            Effect::Run(Command::LoadNotes)
        }
        Action::TodosSaved => {
            confirm(app, RecordKind::Todo, String::from("Todos saved"));
            Effect::Run(Command::LoadTodos)
        }
        Action::ItemDeleted(reported) => {
            let kind = app
                .pending_delete
                .take()
                .map(|pending| pending.kind)
                .unwrap_or(reported);
            info!("Deleted {}, returning to list", kind);
            app.view = View::list_for(kind);
            confirm(app, kind, format!("Deleted {kind}"));
            Effect::Run(Command::load(kind))
        }

        action => match app.view {
            View::Dashboard => update_dashboard(app, action),
            View::NoteList => update_note_list(app, action),
            View::NoteEdit => update_note_edit(app, action),
            View::TodoList => update_todo_list(app, action),
            View::TodoAdd => update_todo_add(app, action),
            View::DeleteConfirm => update_delete_confirm(app, action),
        },
    }
}

fn update_dashboard(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SwitchView => go_to(app, View::NoteList),
        Action::NewNote => open_blank_editor(app),
        Action::NewTodo => open_composer(app),
        _ => {}
    }
    Effect::None
}

fn update_note_list(app: &mut App, action: Action) -> Effect {
    if update_list_navigation(app, &action) {
        return Effect::None;
    }
    match action {
        Action::SwitchView => go_to(app, View::TodoList),
        Action::NewNote => open_blank_editor(app),
        Action::RequestDelete => {
            if let Some(note) = app.selected_note() {
                let id = note.id.clone();
                request_delete(app, id, RecordKind::Note);
            }
        }
        Action::Select => {
            if let Some(note) = app.selected_note() {
                app.editor = NoteEditor::from_note(note);
                debug!("Editing note {}", app.editor.note_id);
                go_to(app, View::NoteEdit);
            }
        }
        _ => {}
    }
    Effect::None
}

fn update_note_edit(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Back => {
            app.editor = NoteEditor::blank(&app.default_folder);
            go_to(app, View::NoteList);
            Effect::None
        }
        Action::Save => save_note(app),
        Action::FocusNext => {
            app.editor.advance_focus();
            Effect::None
        }
        Action::Edit(edit) => {
            app.editor.focused_mut().apply(&edit);
            Effect::None
        }
        _ => Effect::None,
    }
}

/// Fold the editor buffers into the in-memory collection and persist it whole.
fn save_note(app: &mut App) -> Effect {
    let editor = &app.editor;
    let mut note = Note {
        id: editor.note_id.clone(),
        title: editor.title.value().to_string(),
        content: editor.content.value().to_string(),
        created_at: Utc::now(),
        folder: editor.folder.value().to_string(),
    };

    if editor.is_new() {
        note.id = new_id();
        info!("Creating note {}", note.id);
        app.editor.note_id = note.id.clone();
        app.notes.insert(0, note);
        app.note_cursor.selected = 0;
    } else if let Some(existing) = app.notes.iter_mut().find(|n| n.id == note.id) {
        info!("Updating note {}", note.id);
        note.created_at = existing.created_at;
        *existing = note;
    } else {
        // Gone from memory while open (deleted, or an earlier save never landed).
        info!("Note {} no longer present, saving it as new", note.id);
        app.notes.insert(0, note);
        app.note_cursor.selected = 0;
    }

    app.status_message = String::from("Saving...");
    Effect::Run(Command::SaveNotes(app.notes.clone()))
}

fn update_todo_list(app: &mut App, action: Action) -> Effect {
    if update_list_navigation(app, &action) {
        return Effect::None;
    }
    match action {
        Action::SwitchView => go_to(app, View::Dashboard),
        Action::NewTodo => open_composer(app),
        Action::RequestDelete => {
            if let Some(todo) = app.selected_todo() {
                let id = todo.id.clone();
                request_delete(app, id, RecordKind::Todo);
            }
        }
        Action::ToggleDone | Action::Select => {
            if let Some(index) = app.selected_todo_index() {
                let todo = &mut app.todos[index];
                todo.done = !todo.done;
                debug!("Toggled todo {} -> done={}", todo.id, todo.done);
                return Effect::Run(Command::SaveTodos(app.todos.clone()));
            }
        }
        _ => {}
    }
    Effect::None
}

fn update_todo_add(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Back => {
            app.composer.clear();
            go_to(app, View::TodoList);
            Effect::None
        }
        Action::Submit => {
            let (content, frequency) = Frequency::split_suffix(app.composer.value());
            if content.is_empty() {
                return Effect::None;
            }
            let todo = Todo::new(content, frequency);
            info!("Creating todo {} ({})", todo.id, todo.frequency);
            app.todos.insert(0, todo);
            app.composer.clear();
            app.todo_cursor.clear_filter();
            go_to(app, View::TodoList);
            Effect::Run(Command::SaveTodos(app.todos.clone()))
        }
        Action::Edit(edit) => {
            app.composer.apply(&edit);
            Effect::None
        }
        _ => Effect::None,
    }
}

fn update_delete_confirm(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ConfirmDelete => match app.pending_delete.as_mut() {
            Some(pending) if !pending.in_flight => {
                pending.in_flight = true;
                info!("Deleting {} {}", pending.kind, pending.id);
                Effect::Run(Command::Delete {
                    id: pending.id.clone(),
                    kind: pending.kind,
                })
            }
            _ => Effect::None,
        },
        Action::CancelDelete => {
            match app.pending_delete.take() {
                // Too late to cancel once the command is out.
                Some(pending) if pending.in_flight => app.pending_delete = Some(pending),
                Some(pending) => go_to(app, View::list_for(pending.kind)),
                None => go_to(app, View::Dashboard),
            }
            Effect::None
        }
        _ => Effect::None,
    }
}

/// Cursor and filter actions shared by both list views. Returns `true` if handled.
fn update_list_navigation(app: &mut App, action: &Action) -> bool {
    let len = app.active_row_count();
    let Some(cursor) = app.active_cursor_mut() else {
        return false;
    };
    match action {
        Action::CursorUp => cursor.move_up(),
        Action::CursorDown => cursor.move_down(len),
        Action::BeginFilter => cursor.begin_filter(),
        Action::EndFilter => cursor.end_filter(),
        Action::ClearFilter => cursor.clear_filter(),
        Action::FilterEdit(edit) => {
            match edit {
                TextEdit::Insert(c) => cursor.filter.push(*c),
                TextEdit::Paste(text) => cursor.filter.push_str(text),
                TextEdit::Backspace => {
                    cursor.filter.pop();
                }
                _ => return true,
            }
            cursor.selected = 0;
        }
        _ => return false,
    }
    true
}

fn open_blank_editor(app: &mut App) {
    app.editor = NoteEditor::blank(&app.default_folder);
    app.editor.focus = EditorField::Title;
    go_to(app, View::NoteEdit);
}

fn open_composer(app: &mut App) {
    app.composer.clear();
    go_to(app, View::TodoAdd);
}

fn request_delete(app: &mut App, id: String, kind: RecordKind) {
    debug!("Delete requested for {} {}", kind, id);
    app.pending_delete = Some(PendingDelete {
        id,
        kind,
        in_flight: false,
    });
    go_to(app, View::DeleteConfirm);
}

/// Show a save or delete outcome and keep it for the reload that follows.
fn confirm(app: &mut App, kind: RecordKind, message: String) {
    app.status_message = message.clone();
    app.confirmation = Some((kind, message));
}

/// Status after a collection of `kind` arrives: the pending confirmation for
/// that kind, if any, followed by the record count.
fn set_loaded_status(app: &mut App, kind: RecordKind, count: usize) {
    let plural = if count == 1 { "" } else { "s" };
    let counted = format!("{count} {kind}{plural}");
    app.status_message = match app.confirmation.take_if(|(pending, _)| *pending == kind) {
        Some((_, message)) => format!("{message} ({counted})"),
        None => counted,
    };
}

fn go_to(app: &mut App, view: View) {
    debug!("View {:?} -> {:?}", app.view, view);
    app.view = view;
}
