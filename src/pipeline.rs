//! # Command Pipeline
//!
//! The async boundary between the state machine and storage.
//!
//! ```text
//!  event loop                      pipeline task                 Store
//!  ──────────                      ─────────────                 ─────
//!  update() → Effect::Run(cmd)
//!  pipeline.submit(cmd) ──queue──► execute(cmd) ───────────────► load/save/delete
//!                                       │ ◄──────────────────────── Result
//!  rx.try_recv() ◄──── Action ──────────┘
//!  update(app, message)
//! ```
//!
//! Commands run one at a time in submission order on a single tokio task, so
//! two saves of the same collection always land in the order they were
//! issued. Every command yields exactly one message. Storage errors are logged
//! and swallowed: a failed load reads as an empty collection, a failed save or
//! delete still reports completion.

use std::sync::{Arc, mpsc};

use log::{debug, info, warn};
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

use crate::core::action::{Action, Command};
use crate::core::model::RecordKind;
use crate::storage::Store;

/// Handle for queueing commands. Dropping it stops the worker after the queue drains.
pub struct Pipeline {
    commands: UnboundedSender<Command>,
}

impl Pipeline {
    /// Start the worker task. Must be called from within a tokio runtime.
    pub fn spawn(store: Arc<dyn Store>, actions: mpsc::Sender<Action>) -> Self {
        let (commands, mut queue) = unbounded_channel::<Command>();

        tokio::spawn(async move {
            while let Some(command) = queue.recv().await {
                let label = command.label();
                debug!("Executing {}", label);
                let message = execute(command, store.as_ref()).await;
                if actions.send(message).is_err() {
                    warn!("Failed to deliver {} result: receiver dropped", label);
                    return;
                }
            }
            info!("Command queue closed, pipeline stopping");
        });

        Self { commands }
    }

    /// Queue a command. Never blocks.
    pub fn submit(&self, command: Command) {
        let label = command.label();
        if self.commands.send(command).is_err() {
            warn!("Failed to queue {}: pipeline stopped", label);
        }
    }
}

/// Run one command against the store and produce its result message.
pub async fn execute(command: Command, store: &dyn Store) -> Action {
    match command {
        Command::LoadNotes => match store.load_notes().await {
            Ok(notes) => Action::NotesLoaded(notes),
            Err(e) => {
                warn!("Loading notes failed, treating as empty: {}", e);
                Action::NotesLoaded(Vec::new())
            }
        },
        Command::LoadTodos => match store.load_todos().await {
            Ok(todos) => Action::TodosLoaded(todos),
            Err(e) => {
                warn!("Loading todos failed, treating as empty: {}", e);
                Action::TodosLoaded(Vec::new())
            }
        },
        Command::SaveNotes(notes) => {
            if let Err(e) = store.save_notes(&notes).await {
                warn!("Saving {} notes failed: {}", notes.len(), e);
            }
            Action::NotesSaved
        }
        Command::SaveTodos(todos) => {
            if let Err(e) = store.save_todos(&todos).await {
                warn!("Saving {} todos failed: {}", todos.len(), e);
            }
            Action::TodosSaved
        }
        Command::Delete { id, kind } => {
            let result = match kind {
                RecordKind::Note => store.delete_note(&id).await,
                RecordKind::Todo => store.delete_todo(&id).await,
            };
            match result {
                Ok(true) => info!("Deleted {} {}", kind, id),
                Ok(false) => info!("{} {} not in storage, nothing deleted", kind, id),
                Err(e) => warn!("Deleting {} {} failed: {}", kind, id, e),
            }
            Action::ItemDeleted(kind)
        }
    }
}
