//! # Storage
//!
//! The durable mirror of the session's collections. The state machine never
//! calls into this module directly; the pipeline runs `Command`s against a
//! `Store` and turns the outcome into a message.
//!
//! - [`store`]: the `Store` trait, its error type, and the first-run seed records
//! - [`json_file`]: `JsonFileStore`, one pretty-printed JSON array per collection

pub mod json_file;
pub mod store;

pub use json_file::JsonFileStore;
pub use store::{Store, StoreError, WELCOME_NOTE_ID, WELCOME_TODO_ID, welcome_note, welcome_todo};
