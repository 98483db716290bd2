use super::{NotesEvent, NotesState};
use crate::model::Note;
use crate::store::NoteStore;
use std::sync::Arc;
use tokio::sync::watch;

/// The fold behind [`super::NotesController`].
///
/// Owns the write side of both published channels. Writes go through
/// `send_modify`/`send_replace`, which succeed even after every observer is
/// gone, so a late store call finishing after teardown is harmless.
pub(super) struct NotesMachine {
    store: Arc<dyn NoteStore>,
    /// Last collection received from the store, in store order.
    raw: Vec<Note>,
    state: watch::Sender<NotesState>,
    recently_deleted: watch::Sender<Option<Note>>,
}

impl NotesMachine {
    pub(super) fn new(
        store: Arc<dyn NoteStore>,
        raw: Vec<Note>,
        state: watch::Sender<NotesState>,
        recently_deleted: watch::Sender<Option<Note>>,
    ) -> Self {
        Self {
            store,
            raw,
            state,
            recently_deleted,
        }
    }

    /// Replace the collection and re-sort it by the current order.
    pub(super) fn on_notes(&mut self, notes: Vec<Note>) {
        let ordered = self.state.borrow().note_order.sorted(&notes);
        tracing::debug!(count = notes.len(), "Note collection refreshed");
        self.raw = notes;
        self.state.send_modify(|state| state.notes = ordered);
    }

    pub(super) async fn on_event(&mut self, event: NotesEvent) {
        match event {
            NotesEvent::Order(order) => {
                if self.state.borrow().note_order == order {
                    tracing::trace!(%order, "Order unchanged, skipping");
                    return;
                }
                let ordered = order.sorted(&self.raw);
                tracing::debug!(%order, "Reordering notes");
                self.state.send_modify(|state| {
                    state.note_order = order;
                    state.notes = ordered;
                });
            }
            NotesEvent::ToggleOrderSection => {
                self.state.send_modify(|state| {
                    state.is_order_section_visible = !state.is_order_section_visible;
                });
            }
            NotesEvent::DeleteNote(note) => {
                self.recently_deleted.send_replace(Some(note.clone()));
                match self.store.delete(&note).await {
                    Ok(()) => tracing::debug!(id = ?note.id, "Note deleted"),
                    Err(e) => tracing::warn!(id = ?note.id, error = %e, "Failed to delete note"),
                }
            }
            NotesEvent::RestoreNote => {
                let pending = self.recently_deleted.borrow().clone();
                let Some(note) = pending else {
                    tracing::trace!("Nothing to restore");
                    return;
                };
                match self.store.insert(note).await {
                    Ok(id) => {
                        self.recently_deleted.send_replace(None);
                        tracing::debug!(id, "Note restored");
                    }
                    Err(e) => tracing::warn!(error = %e, "Failed to restore note"),
                }
            }
        }
    }
}
