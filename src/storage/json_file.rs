//! # JSON File Store
//!
//! Persists each collection as a pretty-printed JSON array:
//!
//! ```text
//! <data_dir>/
//! ├── notes.json
//! └── todos.json
//! ```
//!
//! All writes use atomic rename (write a temp file, then `rename()`) so a
//! crash mid-save never leaves a half-written collection behind.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::store::{Store, StoreError, welcome_note, welcome_todo};
use crate::core::model::{Note, Todo, new_id};

pub const NOTES_FILE: &str = "notes.json";
pub const TODOS_FILE: &str = "todos.json";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `base_path`, creating the directory if needed.
    ///
    /// This is the only storage failure that stops noteme from starting.
    pub fn open(base_path: impl Into<PathBuf>) -> io::Result<Self> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path)?;
        info!("Storage opened at {}", base_path.display());
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn notes_path(&self) -> PathBuf {
        self.base_path.join(NOTES_FILE)
    }

    pub fn todos_path(&self) -> PathBuf {
        self.base_path.join(TODOS_FILE)
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn load_notes(&self) -> Result<Vec<Note>, StoreError> {
        load_or_seed(&self.notes_path(), welcome_note).await
    }

    async fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError> {
        atomic_write_json(&self.notes_path(), notes).await
    }

    async fn delete_note(&self, id: &str) -> Result<bool, StoreError> {
        delete_by_id(&self.notes_path(), id, |note: &Note| &note.id).await
    }

    async fn load_todos(&self) -> Result<Vec<Todo>, StoreError> {
        load_or_seed(&self.todos_path(), welcome_todo).await
    }

    async fn save_todos(&self, todos: &[Todo]) -> Result<(), StoreError> {
        atomic_write_json(&self.todos_path(), todos).await
    }

    async fn delete_todo(&self, id: &str) -> Result<bool, StoreError> {
        delete_by_id(&self.todos_path(), id, |todo: &Todo| &todo.id).await
    }
}

/// Read a collection file. `Ok(None)` means the file does not exist yet.
async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, StoreError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(decode_collection(&bytes)?))
}

/// Decode a JSON array. A literal `null` is treated as an empty collection.
fn decode_collection<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, StoreError> {
    let items: Option<Vec<T>> = serde_json::from_slice(bytes).map_err(StoreError::Decode)?;
    Ok(items.unwrap_or_default())
}

/// Load a collection, writing a single seed record the first time around.
async fn load_or_seed<T, F>(path: &Path, seed: F) -> Result<Vec<T>, StoreError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> T,
{
    if let Some(items) = read_collection(path).await? {
        return Ok(items);
    }
    info!("No data at {}, seeding example record", path.display());
    let seeded = vec![seed()];
    atomic_write_json(path, &seeded).await?;
    Ok(seeded)
}

/// Remove the record with `id` from the on-disk collection.
///
/// Reads without seeding and skips the write entirely when nothing matches.
async fn delete_by_id<T, F>(path: &Path, id: &str, id_of: F) -> Result<bool, StoreError>
where
    T: Serialize + DeserializeOwned,
    F: Fn(&T) -> &str,
{
    let items: Vec<T> = read_collection(path).await?.unwrap_or_default();
    let before = items.len();
    let remaining: Vec<T> = items.into_iter().filter(|item| id_of(item) != id).collect();

    if remaining.len() == before {
        debug!("Delete of {} in {}: no match, nothing written", id, path.display());
        return Ok(false);
    }

    atomic_write_json(path, &remaining).await?;
    Ok(true)
}

/// Atomically write `data` as pretty JSON to `path` (temp file + rename).
async fn atomic_write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(data).map_err(StoreError::Encode)?;
    let tmp_path = path.with_extension(format!("{}.tmp", new_id()));
    tokio::fs::write(&tmp_path, json).await?;
    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(e.into());
    }
    debug!("Wrote {}", path.display());
    Ok(())
}
