//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::core::model::{DEFAULT_FOLDER, Note, Todo};
use crate::core::state::App;
use crate::storage::{Store, StoreError};

/// An in-memory store that counts writes and can be told to fail.
#[derive(Default)]
pub struct MemoryStore {
    pub notes: Mutex<Vec<Note>>,
    pub todos: Mutex<Vec<Todo>>,
    pub writes: AtomicUsize,
    pub fail: bool,
}

impl MemoryStore {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
            ..Self::default()
        }
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Io(std::io::Error::other("disk on fire")));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load_notes(&self) -> Result<Vec<Note>, StoreError> {
        self.check()?;
        Ok(self.notes.lock().unwrap().clone())
    }

    async fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.notes.lock().unwrap() = notes.to_vec();
        Ok(())
    }

    async fn delete_note(&self, id: &str) -> Result<bool, StoreError> {
        self.check()?;
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Ok(false);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn load_todos(&self) -> Result<Vec<Todo>, StoreError> {
        self.check()?;
        Ok(self.todos.lock().unwrap().clone())
    }

    async fn save_todos(&self, todos: &[Todo]) -> Result<(), StoreError> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.todos.lock().unwrap() = todos.to_vec();
        Ok(())
    }

    async fn delete_todo(&self, id: &str) -> Result<bool, StoreError> {
        self.check()?;
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Ok(false);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

/// Creates a test App with the default folder.
pub fn test_app() -> App {
    App::new(DEFAULT_FOLDER)
}

/// A persisted note with a fixed creation time and empty body.
pub fn test_note(id: &str, title: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: String::new(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap(),
        folder: DEFAULT_FOLDER.to_string(),
    }
}
