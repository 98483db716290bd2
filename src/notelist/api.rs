//! # API Facade
//!
//! A thin facade over the command layer and the notes controller. UI
//! clients (the CLI here) go through [`NotesApi`] and never touch the store
//! directly.
//!
//! The facade dispatches and normalizes inputs. Validation, ordering and
//! the undo lifecycle live in `commands/` and `notes/`.

use crate::commands;
use crate::config::NotesConfig;
use crate::error::Result;
use crate::model::{Note, NoteId};
use crate::notes::NotesController;
use crate::order::NoteOrder;
use crate::store::NoteStore;
use std::sync::Arc;

pub struct NotesApi {
    store: Arc<dyn NoteStore>,
    config: NotesConfig,
}

impl NotesApi {
    pub fn new(store: Arc<dyn NoteStore>, config: NotesConfig) -> Self {
        Self { store, config }
    }

    pub async fn add_note(&self, note: Note) -> Result<commands::CmdResult> {
        commands::add::run(self.store.as_ref(), note).await
    }

    pub async fn get_note(&self, id: NoteId) -> Result<commands::CmdResult> {
        commands::get::run(self.store.as_ref(), id).await
    }

    pub async fn delete_notes(&self, ids: &[NoteId]) -> Result<commands::CmdResult> {
        commands::delete::run(self.store.as_ref(), ids).await
    }

    /// Lists with `order`, or the configured default when `None`.
    pub fn list_notes(&self, order: Option<NoteOrder>) -> Result<commands::CmdResult> {
        let order = order.unwrap_or(self.config.default_order);
        commands::list::run(self.store.as_ref(), order)
    }

    /// Start a notes controller over this API's store.
    ///
    /// Must be called from within a tokio runtime.
    pub fn controller(&self) -> NotesController {
        NotesController::spawn(self.store.clone(), &self.config)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::notes::{NotesEvent, NotesState};
