use std::fmt;
use std::io;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::model::{DEFAULT_FOLDER, Frequency, Note, Todo};

pub const WELCOME_NOTE_ID: &str = "welcome-note";
pub const WELCOME_TODO_ID: &str = "welcome-todo";

/// Errors that can occur while reading or writing a collection.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure (permissions, missing directory, disk full).
    Io(io::Error),
    /// The file exists but is not a valid collection.
    Decode(serde_json::Error),
    /// The collection could not be serialized.
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {e}"),
            StoreError::Decode(e) => write!(f, "storage decode error: {e}"),
            StoreError::Encode(e) => write!(f, "storage encode error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

/// Collection-granular persistence for notes and todos.
///
/// Saves overwrite the whole collection. Deletes re-read what is on disk,
/// drop the matching record and write the remainder back; they report
/// whether anything was removed and never write when nothing matched.
#[async_trait]
pub trait Store: Send + Sync {
    /// Load all notes. Seeds and persists the welcome note on first run.
    async fn load_notes(&self) -> Result<Vec<Note>, StoreError>;

    async fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError>;

    async fn delete_note(&self, id: &str) -> Result<bool, StoreError>;

    /// Load all todos. Seeds and persists the welcome todo on first run.
    async fn load_todos(&self) -> Result<Vec<Todo>, StoreError>;

    async fn save_todos(&self, todos: &[Todo]) -> Result<(), StoreError>;

    async fn delete_todo(&self, id: &str) -> Result<bool, StoreError>;
}

/// The note a fresh data directory starts with.
pub fn welcome_note() -> Note {
    Note {
        id: WELCOME_NOTE_ID.to_string(),
        title: "Welcome to noteme".to_string(),
        content: "Notes live here.\n\n\
                  Tab switches lists, n creates, Enter edits, d deletes.\n\
                  In the editor, Tab moves between fields and Ctrl+S saves."
            .to_string(),
        created_at: Utc::now(),
        folder: DEFAULT_FOLDER.to_string(),
    }
}

/// The todo a fresh data directory starts with.
pub fn welcome_todo() -> Todo {
    Todo {
        id: WELCOME_TODO_ID.to_string(),
        content: "Press space to tick me off".to_string(),
        done: false,
        created_at: Utc::now(),
        frequency: Frequency::Once,
    }
}
