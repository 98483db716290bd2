//! # Notes State Machine
//!
//! This module turns a live note collection and a stream of user events into
//! one observable [`NotesState`].
//!
//! ## Inputs
//!
//! ```text
//!  NoteStore::observe_all ──(full collections)──┐
//!                                                ├──► controller task ──► watch<NotesState>
//!  NotesController::on_event ──(NotesEvent)─────┘          │
//!                                                          └──► watch<Option<Note>> (recently deleted)
//! ```
//!
//! Both inputs are folded by a single tokio task, so events never overlap
//! with each other or with collection refreshes. An event is processed to
//! completion, store call included, before the next one is taken.
//!
//! ## Who writes what
//!
//! - `notes` is written only when the store emits a collection, or when the
//!   ordering changes and the last received collection is re-sorted.
//!   Deleting or restoring never touches it directly: the store's next
//!   emission carries the change.
//! - `note_order` and `is_order_section_visible` are written only by
//!   events.
//! - The recently-deleted slot is written only by `DeleteNote` and a
//!   successful `RestoreNote`.
//!
//! ## Undo
//!
//! The slot holds one note. Deleting a second note before restoring the
//! first replaces it, and the first can no longer be restored from here.

mod controller;
mod machine;

pub use controller::NotesController;

use crate::model::Note;
use crate::order::NoteOrder;

/// Everything the rendering layer can ask the notes list to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesEvent {
    Order(NoteOrder),
    DeleteNote(Note),
    RestoreNote,
    ToggleOrderSection,
}

/// The materialized view observed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotesState {
    pub notes: Vec<Note>,
    pub note_order: NoteOrder,
    pub is_order_section_visible: bool,
}

impl NotesState {
    pub fn with_order(note_order: NoteOrder) -> Self {
        Self {
            note_order,
            ..Self::default()
        }
    }
}
