//! # Record Models
//!
//! The two record types noteme manages, plus the small enums around them.
//! Field names match the on-disk JSON (`created_at`, lowercase frequencies),
//! so files written by earlier versions of noteme load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Folder assigned to new notes when nothing else is configured.
pub const DEFAULT_FOLDER: &str = "general";

/// Generate a new UUID v4 record ID.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Note {
    /// Empty until the note is first saved.
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub folder: String,
}

/// How often a todo comes back around.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Once,
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Once => "once",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }

    /// Split a trailing `/daily`, `/weekly` or `/monthly` marker off composer text.
    ///
    /// Returns the trimmed content and the frequency it implies. Text without a
    /// marker is a one-off todo.
    ///
    /// ```text
    /// "buy milk /weekly"  →  ("buy milk", Weekly)
    /// "call mum"          →  ("call mum", Once)
    /// ```
    pub fn split_suffix(text: &str) -> (String, Frequency) {
        let text = text.trim();
        for frequency in [Frequency::Daily, Frequency::Weekly, Frequency::Monthly] {
            let marker = format!("/{}", frequency.label());
            if let Some(content) = text.strip_suffix(marker.as_str()) {
                return (content.trim().to_string(), frequency);
            }
        }
        (text.to_string(), Frequency::Once)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub frequency: Frequency,
}

impl Todo {
    /// A fresh, not-done todo with a new ID stamped now.
    pub fn new(content: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            id: new_id(),
            content: content.into(),
            done: false,
            created_at: Utc::now(),
            frequency,
        }
    }
}

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Note,
    Todo,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Note => "note",
            RecordKind::Todo => "todo",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
